//! Utility modules for clause assembly.

pub mod interpolate;
pub mod numbering;

pub use interpolate::*;
pub use numbering::*;

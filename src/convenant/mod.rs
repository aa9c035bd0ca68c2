//! Covenant clause assembly
//!
//! Pure mapping from an answer set to an ordered sequence of clause
//! descriptors. Both renderers project the same sequence.

pub mod generator;
pub mod sections;
pub mod types;
pub mod utils;

pub use generator::{assemble, ConvenantGenerator};
pub use types::{Clause, ClauseKind, Document};

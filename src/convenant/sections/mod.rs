//! Covenant Section Generators
//!
//! Each section maps the answer set to its clauses. The generator
//! concatenates them in this order.

pub mod s1_parties;
pub mod s2_recitals;
pub mod s3_children;
pub mod s4_partner_alimony;
pub mod s5_home;
pub mod s6_community;
pub mod s7_pension;
pub mod s8_miscellaneous;
pub mod s9_closing;
pub mod s10_signatures;

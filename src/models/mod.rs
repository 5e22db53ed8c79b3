//! Data models for the employee roster.
//!
//! Field names serialize in camelCase so snapshots stay readable by the web front end.

mod criteria;
mod employee;

pub use criteria::*;
pub use employee::*;

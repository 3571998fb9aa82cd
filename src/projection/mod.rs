//! Projection module
//!
//! Read models derived from account state for display and export.

mod statement;

pub use statement::{Statement, StatementLine};

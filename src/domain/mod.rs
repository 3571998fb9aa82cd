//! Domain module
//!
//! Core domain types: money, transactions and account history.

pub mod amount;
pub mod context;
pub mod error;
pub mod history;
pub mod transaction;

pub use amount::{Amount, AmountError, Balance};
pub use context::OperationContext;
pub use error::DomainError;
pub use history::{EntryOrigin, History, HistoryEntry, TIMESTAMP_FORMAT};
pub use transaction::{Transaction, TransactionKind};

//! teller Library
//!
//! In-memory retail bank: customers, checking accounts, deposits,
//! withdrawals and statements, driven by a text command loop.

pub mod aggregate;
pub mod directory;
pub mod domain;
pub mod handlers;
pub mod projection;
pub mod repl;

pub mod config;
mod error;

pub use config::{Config, LogFormat};
pub use directory::Directory;
pub use domain::{Amount, AmountError, Balance, DomainError, OperationContext};
pub use domain::{History, HistoryEntry, Transaction, TransactionKind};
pub use error::{AppError, AppResult};

//! Domain Error Types
//!
//! Pure domain errors that don't depend on the command loop.

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-specific errors
///
/// Every variant is recoverable: the command loop prints it and carries on.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Amount is zero, negative, or above the base withdrawal ceiling
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Withdrawal larger than the current balance
    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Withdrawal larger than the account's per-transaction limit
    #[error("Withdrawal of {requested:.2} exceeds the limit of {limit:.2}")]
    LimitExceeded { requested: Decimal, limit: Decimal },

    /// Lifetime withdrawal count reached
    #[error("Withdrawal count exceeded: at most {limit} withdrawals allowed")]
    WithdrawalCountExceeded { limit: usize },

    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("A customer with tax id {0} already exists")]
    DuplicateCustomer(String),

    #[error("Account number {0} is already in use")]
    DuplicateAccount(String),
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Check if this is a rejected money movement (state left untouched)
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InsufficientFunds { .. }
                | Self::LimitExceeded { .. }
                | Self::WithdrawalCountExceeded { .. }
        )
    }

    /// Check if this is a failed lookup in the directory
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CustomerNotFound(_) | Self::AccountNotFound(_))
    }
}

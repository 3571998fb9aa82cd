//! Error handling module
//!
//! Centralized error types for the command loop.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Input errors, reported and the loop continues
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    // Fatal errors
    #[error("End of input")]
    EndOfInput,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Errors the command loop reports to the user before reading the next command
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AppError::InvalidRequest(_)
                | AppError::InvalidOperation(_)
                | AppError::Domain(_)
                | AppError::Serialization(_)
        )
    }

    /// Short machine-friendly code, used as a log field
    pub fn error_code(&self) -> &'static str {
        use crate::domain::DomainError;

        match self {
            AppError::InvalidRequest(_) => "invalid_request",
            AppError::InvalidOperation(_) => "invalid_operation",
            AppError::Domain(domain_err) => match domain_err {
                DomainError::InvalidAmount(_) => "invalid_amount",
                DomainError::InsufficientFunds { .. } => "insufficient_funds",
                DomainError::LimitExceeded { .. } => "limit_exceeded",
                DomainError::WithdrawalCountExceeded { .. } => "withdrawal_count_exceeded",
                DomainError::CustomerNotFound(_) => "customer_not_found",
                DomainError::AccountNotFound(_) => "account_not_found",
                DomainError::DuplicateCustomer(_) => "duplicate_customer",
                DomainError::DuplicateAccount(_) => "duplicate_account",
            },
            AppError::EndOfInput => "end_of_input",
            AppError::Io(_) => "io_error",
            AppError::Serialization(_) => "serialization_error",
            AppError::Config(_) => "config_error",
        }
    }
}

//! Command definitions
//!
//! Commands and queries collected by the command loop.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// =========================================================================
// CreateCustomerCommand
// =========================================================================

/// Command to register a new customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCustomerCommand {
    pub name: String,
    pub birth_date: String,
    pub tax_id: String,
    pub address: String,
}

impl CreateCustomerCommand {
    pub fn new(
        name: impl Into<String>,
        birth_date: impl Into<String>,
        tax_id: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
            tax_id: tax_id.into(),
            address: address.into(),
        }
    }
}

// =========================================================================
// CreateAccountCommand
// =========================================================================

/// Command to open a checking account for a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccountCommand {
    pub tax_id: String,
    pub account_number: String,
}

impl CreateAccountCommand {
    pub fn new(tax_id: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            tax_id: tax_id.into(),
            account_number: account_number.into(),
        }
    }
}

// =========================================================================
// TransactionCommand
// =========================================================================

/// Command to deposit into or withdraw from an account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionCommand {
    pub tax_id: String,
    pub account_number: String,
    /// Amount as typed (parsed into a decimal by the handler)
    pub amount: String,
}

impl TransactionCommand {
    pub fn new(
        tax_id: impl Into<String>,
        account_number: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            tax_id: tax_id.into(),
            account_number: account_number.into(),
            amount: amount.into(),
        }
    }
}

// =========================================================================
// Queries
// =========================================================================

/// Query for the statement of one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementQuery {
    pub tax_id: String,
    pub account_number: String,
}

impl StatementQuery {
    pub fn new(tax_id: impl Into<String>, account_number: impl Into<String>) -> Self {
        Self {
            tax_id: tax_id.into(),
            account_number: account_number.into(),
        }
    }
}

/// Query for the account numbers of a customer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListAccountsQuery {
    pub tax_id: String,
}

impl ListAccountsQuery {
    pub fn new(tax_id: impl Into<String>) -> Self {
        Self {
            tax_id: tax_id.into(),
        }
    }
}

/// Result of a successful deposit or withdrawal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResult {
    pub account_number: String,
    pub amount: Decimal,
    pub balance: Decimal,
}

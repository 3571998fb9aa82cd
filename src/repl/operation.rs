//! Menu operations
//!
//! Command codes accepted by the command loop.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

/// Menu shown before every command
pub const MENU: &str = "\
Operations:
[D] - Deposit
[S] - Withdraw
[E] - Statement
[L] - Exit
[C] - Create customer
[A] - Create account
[LI] - List accounts
[X] - Export statement (JSON)";

/// One entry of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Deposit,
    Withdraw,
    Statement,
    Exit,
    CreateCustomer,
    CreateAccount,
    ListAccounts,
    ExportStatement,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Deposit,
        Operation::Withdraw,
        Operation::Statement,
        Operation::Exit,
        Operation::CreateCustomer,
        Operation::CreateAccount,
        Operation::ListAccounts,
        Operation::ExportStatement,
    ];

    /// Menu code
    pub fn code(&self) -> &'static str {
        match self {
            Operation::Deposit => "D",
            Operation::Withdraw => "S",
            Operation::Statement => "E",
            Operation::Exit => "L",
            Operation::CreateCustomer => "C",
            Operation::CreateAccount => "A",
            Operation::ListAccounts => "LI",
            Operation::ExportStatement => "X",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.code() == code)
            .ok_or_else(|| AppError::InvalidOperation(s.trim().to_string()))
    }
}

//! Account Aggregate
//!
//! An account holds a balance and its history. Withdrawal rules come from a
//! `WithdrawalPolicy` value carried by the account: the base policy only
//! applies the fixed per-transaction ceiling, the checking policy adds a
//! configurable limit and a lifetime withdrawal count.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::{Amount, Balance, DomainError, History, Transaction, TransactionKind};

/// Branch code shared by every account
pub const BRANCH_CODE: &str = "0001";

/// Per-transaction ceiling enforced on every withdrawal, whatever the policy
pub const BASE_WITHDRAWAL_CEILING: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Default per-withdrawal limit of a checking account
pub const DEFAULT_WITHDRAWAL_LIMIT: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// Default lifetime withdrawal count of a checking account
pub const DEFAULT_MAX_WITHDRAWALS: usize = 3;

/// Withdrawal rules layered on top of the base ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawalPolicy {
    /// Largest single withdrawal allowed
    limit: Option<Decimal>,
    /// Successful withdrawals allowed over the account's lifetime
    max_withdrawals: Option<usize>,
}

impl WithdrawalPolicy {
    /// Plain account: only the base ceiling and balance apply
    pub fn base() -> Self {
        Self {
            limit: None,
            max_withdrawals: None,
        }
    }

    /// Checking account with a per-withdrawal limit and a lifetime count
    pub fn checking(limit: Decimal, max_withdrawals: usize) -> Self {
        Self {
            limit: Some(limit),
            max_withdrawals: Some(max_withdrawals),
        }
    }
}

impl Default for WithdrawalPolicy {
    fn default() -> Self {
        Self::checking(DEFAULT_WITHDRAWAL_LIMIT, DEFAULT_MAX_WITHDRAWALS)
    }
}

/// Owner of an account, captured when the account is opened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountHolder {
    pub tax_id: String,
    pub name: String,
}

impl AccountHolder {
    pub fn new(tax_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tax_id: tax_id.into(),
            name: name.into(),
        }
    }
}

/// Account Aggregate
///
/// Balance only changes through `deposit` and `withdraw`; a rejected call
/// leaves balance and history untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account number, unique in the directory
    number: String,

    /// Owning customer
    holder: AccountHolder,

    /// Current balance
    balance: Balance,

    /// Withdrawal rules
    policy: WithdrawalPolicy,

    /// Recorded movements
    history: History,
}

impl Account {
    // =========================================================================
    // Account::open()
    // =========================================================================

    /// Open an empty account for `holder`
    pub fn open(
        holder: AccountHolder,
        number: impl Into<String>,
        policy: WithdrawalPolicy,
    ) -> Self {
        Self {
            number: number.into(),
            holder,
            balance: Balance::zero(),
            policy,
            history: History::new(),
        }
    }

    /// Open a checking account with the default limits
    pub fn checking(holder: AccountHolder, number: impl Into<String>) -> Self {
        Self::open(holder, number, WithdrawalPolicy::default())
    }

    // =========================================================================
    // Account::deposit()
    // =========================================================================

    /// Deposit a positive amount
    pub fn deposit(&mut self, value: Decimal) -> Result<(), DomainError> {
        let amount = Amount::new(value).map_err(|e| DomainError::InvalidAmount(e.to_string()))?;
        self.balance = self
            .balance
            .credit(&amount)
            .map_err(|e| DomainError::InvalidAmount(e.to_string()))?;
        self.history.record(&Transaction::deposit(value));
        Ok(())
    }

    // =========================================================================
    // Account::withdraw()
    // =========================================================================

    /// Withdraw under the account's policy.
    ///
    /// Checks run in a fixed order: policy limit, lifetime withdrawal count,
    /// then the base rule (ceiling and balance).
    pub fn withdraw(&mut self, value: Decimal) -> Result<(), DomainError> {
        let prior_withdrawals = self.history.settled_count(TransactionKind::Withdrawal);

        if let Some(limit) = self.policy.limit {
            if value > limit {
                return Err(DomainError::LimitExceeded {
                    requested: value,
                    limit,
                });
            }
        }

        if let Some(max) = self.policy.max_withdrawals {
            if prior_withdrawals >= max {
                return Err(DomainError::WithdrawalCountExceeded { limit: max });
            }
        }

        self.withdraw_within_ceiling(value)
    }

    /// Base withdrawal rule: `0 < value <= ceiling` and `value <= balance`
    fn withdraw_within_ceiling(&mut self, value: Decimal) -> Result<(), DomainError> {
        if value <= Decimal::ZERO || value > BASE_WITHDRAWAL_CEILING {
            return Err(DomainError::InvalidAmount(format!(
                "withdrawals must be greater than 0 and at most {:.2} (got {:.2})",
                BASE_WITHDRAWAL_CEILING, value
            )));
        }
        let amount = Amount::new(value).map_err(|e| DomainError::InvalidAmount(e.to_string()))?;

        if !self.balance.is_sufficient_for(&amount) {
            return Err(DomainError::insufficient_funds(value, self.balance.value()));
        }

        self.balance = self
            .balance
            .debit(&amount)
            .map_err(|_| DomainError::insufficient_funds(value, self.balance.value()))?;
        self.history.record(&Transaction::withdrawal(value));
        Ok(())
    }

    pub(crate) fn record_registration(&mut self, transaction: &Transaction) {
        self.history.record_registration(transaction);
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn branch(&self) -> &'static str {
        BRANCH_CODE
    }

    pub fn holder(&self) -> &AccountHolder {
        &self.holder
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    pub fn policy(&self) -> &WithdrawalPolicy {
        &self.policy
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Branch: {}", BRANCH_CODE)?;
        writeln!(f, "Account: {}", self.number)?;
        write!(f, "Holder: {}", self.holder.name)
    }
}

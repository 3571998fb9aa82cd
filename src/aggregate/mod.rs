//! Aggregate module
//!
//! Accounts and the customers that own them.

pub mod account;
pub mod customer;

pub use account::{
    Account, AccountHolder, WithdrawalPolicy, BASE_WITHDRAWAL_CEILING, BRANCH_CODE,
    DEFAULT_MAX_WITHDRAWALS, DEFAULT_WITHDRAWAL_LIMIT,
};
pub use customer::{Customer, Identity};

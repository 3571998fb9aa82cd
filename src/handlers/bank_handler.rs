//! Bank Handler
//!
//! Executes commands against the customer directory. This is the boundary
//! between raw user input and the domain.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::aggregate::{Account, Customer, Identity, WithdrawalPolicy};
use crate::directory::Directory;
use crate::domain::{DomainError, Transaction};
use crate::error::{AppError, AppResult};
use crate::projection::Statement;

use super::{
    CreateAccountCommand, CreateCustomerCommand, ListAccountsQuery, StatementQuery,
    TransactionCommand, TransactionResult,
};

/// Handler for every teller operation
#[derive(Debug)]
pub struct BankHandler {
    directory: Directory,
    policy: WithdrawalPolicy,
}

impl BankHandler {
    /// New handler; accounts it opens get `policy`
    pub fn new(policy: WithdrawalPolicy) -> Self {
        Self {
            directory: Directory::new(),
            policy,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    // =========================================================================
    // Customers and accounts
    // =========================================================================

    pub fn create_customer(&mut self, command: CreateCustomerCommand) -> AppResult<&Customer> {
        let identity = Identity {
            name: command.name,
            birth_date: command.birth_date,
            tax_id: command.tax_id,
        };
        let customer = self
            .directory
            .register(Customer::register(identity, command.address))?;

        tracing::info!(tax_id = customer.tax_id(), "Customer created");
        Ok(customer)
    }

    pub fn create_account(&mut self, command: CreateAccountCommand) -> AppResult<&Account> {
        let account =
            self.directory
                .open_account(&command.tax_id, &command.account_number, self.policy)?;

        tracing::info!(
            tax_id = %command.tax_id,
            account = account.number(),
            "Checking account created"
        );
        Ok(account)
    }

    pub fn list_accounts(&self, query: ListAccountsQuery) -> AppResult<Vec<String>> {
        let customer = self.directory.require(&query.tax_id)?;
        Ok(customer.list_accounts().map(str::to_string).collect())
    }

    // =========================================================================
    // Money movements
    // =========================================================================

    pub fn deposit(&mut self, command: TransactionCommand) -> AppResult<TransactionResult> {
        let amount = parse_amount(&command.amount)?;
        self.execute(command, Transaction::deposit(amount))
    }

    pub fn withdraw(&mut self, command: TransactionCommand) -> AppResult<TransactionResult> {
        let amount = parse_amount(&command.amount)?;
        self.execute(command, Transaction::withdrawal(amount))
    }

    fn execute(
        &mut self,
        command: TransactionCommand,
        transaction: Transaction,
    ) -> AppResult<TransactionResult> {
        let customer = self.directory.require_mut(&command.tax_id)?;

        if let Err(e) = customer.perform_transaction(&command.account_number, &transaction) {
            if e.is_rejection() {
                tracing::warn!(
                    account = %command.account_number,
                    kind = %transaction.kind(),
                    amount = %transaction.amount(),
                    "Transaction rejected: {}",
                    e
                );
            }
            return Err(e.into());
        }

        let balance = customer
            .account(&command.account_number)
            .map(|account| account.balance().value())
            .ok_or_else(|| DomainError::AccountNotFound(command.account_number.clone()))?;

        tracing::info!(
            account = %command.account_number,
            kind = %transaction.kind(),
            amount = %transaction.amount(),
            %balance,
            "Transaction registered"
        );

        Ok(TransactionResult {
            account_number: command.account_number,
            amount: transaction.amount(),
            balance,
        })
    }

    // =========================================================================
    // Statement
    // =========================================================================

    pub fn statement(&self, query: StatementQuery) -> AppResult<Statement> {
        let customer = self.directory.require(&query.tax_id)?;
        let account = customer
            .account(&query.account_number)
            .ok_or_else(|| DomainError::AccountNotFound(query.account_number.clone()))?;

        tracing::debug!(
            account = account.number(),
            entries = account.history().len(),
            "Statement built"
        );
        Ok(Statement::of(account))
    }
}

impl Default for BankHandler {
    fn default() -> Self {
        Self::new(WithdrawalPolicy::default())
    }
}

/// Parse a typed amount; sign and range are checked by the account
fn parse_amount(raw: &str) -> AppResult<Decimal> {
    Decimal::from_str(raw.trim())
        .map_err(|_| AppError::InvalidRequest(format!("'{}' is not a valid amount", raw.trim())))
}

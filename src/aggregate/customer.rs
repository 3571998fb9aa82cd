//! Customer Aggregate
//!
//! A registered customer and the accounts it owns.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Transaction};

use super::{Account, AccountHolder};

/// Registration data of a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,

    /// Free text, as typed at registration
    pub birth_date: String,

    /// Lookup key in the directory
    pub tax_id: String,
}

/// Customer Aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    identity: Identity,
    address: String,

    /// Owned accounts in the order they were opened
    accounts: Vec<Account>,
}

impl Customer {
    // =========================================================================
    // Customer::register()
    // =========================================================================

    /// Create a customer with no accounts
    pub fn register(identity: Identity, address: impl Into<String>) -> Self {
        Self {
            identity,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    /// Holder snapshot used when opening an account for this customer
    pub fn as_holder(&self) -> AccountHolder {
        AccountHolder::new(&self.identity.tax_id, &self.identity.name)
    }

    /// Append an account. Number uniqueness is checked by the directory.
    pub fn add_account(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Account numbers in insertion order
    pub fn list_accounts(&self) -> impl Iterator<Item = &str> + '_ {
        self.accounts.iter().map(Account::number)
    }

    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.number() == number)
    }

    pub fn account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }

    // =========================================================================
    // Customer::perform_transaction()
    // =========================================================================

    /// Register `transaction` against one of this customer's accounts
    pub fn perform_transaction(
        &mut self,
        account_number: &str,
        transaction: &Transaction,
    ) -> Result<(), DomainError> {
        let account = self
            .account_mut(account_number)
            .ok_or_else(|| DomainError::AccountNotFound(account_number.to_string()))?;
        transaction.register(account)
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn tax_id(&self) -> &str {
        &self.identity.tax_id
    }

    pub fn birth_date(&self) -> &str {
        &self.identity.birth_date
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn customer() -> Customer {
        Customer::register(
            Identity {
                name: "Ana".to_string(),
                birth_date: "01/02/1990".to_string(),
                tax_id: "111".to_string(),
            },
            "Rua A, 10",
        )
    }

    #[test]
    fn test_register() {
        let customer = customer();

        assert_eq!(customer.name(), "Ana");
        assert_eq!(customer.tax_id(), "111");
        assert_eq!(customer.birth_date(), "01/02/1990");
        assert_eq!(customer.address(), "Rua A, 10");
        assert_eq!(customer.list_accounts().count(), 0);
    }

    #[test]
    fn test_list_accounts_in_insertion_order() {
        let mut customer = customer();
        for number in ["3", "1", "2"] {
            let account = Account::checking(customer.as_holder(), number);
            customer.add_account(account);
        }

        let numbers: Vec<_> = customer.list_accounts().collect();
        assert_eq!(numbers, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_account_holder_is_owner() {
        let mut customer = customer();
        customer.add_account(Account::checking(customer.as_holder(), "1"));

        let account = customer.account("1").unwrap();
        assert_eq!(account.holder().tax_id, "111");
        assert_eq!(account.holder().name, "Ana");
    }

    #[test]
    fn test_perform_transaction() {
        let mut customer = customer();
        customer.add_account(Account::checking(customer.as_holder(), "1"));

        customer
            .perform_transaction("1", &Transaction::deposit(dec!(250)))
            .unwrap();

        let account = customer.account("1").unwrap();
        assert_eq!(account.balance().value(), dec!(250));
        assert_eq!(account.history().len(), 2);
    }

    #[test]
    fn test_perform_transaction_unknown_account() {
        let mut customer = customer();
        let result = customer.perform_transaction("9", &Transaction::deposit(dec!(1)));

        assert_eq!(result, Err(DomainError::AccountNotFound("9".to_string())));
    }
}

//! Customer Directory
//!
//! In-memory registry of every customer, alive for the whole process.
//! Lookups scan linearly by tax id.

use crate::aggregate::{Account, Customer, WithdrawalPolicy};
use crate::domain::DomainError;

/// Registry of customers
#[derive(Debug, Default)]
pub struct Directory {
    customers: Vec<Customer>,
}

impl Directory {
    /// Create an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a customer; tax ids are unique
    pub fn register(&mut self, customer: Customer) -> Result<&Customer, DomainError> {
        if self.find(customer.tax_id()).is_some() {
            return Err(DomainError::DuplicateCustomer(customer.tax_id().to_string()));
        }

        let tax_id = customer.tax_id().to_string();
        self.customers.push(customer);

        tracing::debug!(%tax_id, "Customer registered");
        self.customers
            .last()
            .ok_or_else(|| DomainError::CustomerNotFound(tax_id))
    }

    /// First customer with `tax_id`, if any
    pub fn find(&self, tax_id: &str) -> Option<&Customer> {
        self.customers.iter().find(|c| c.tax_id() == tax_id)
    }

    pub fn find_mut(&mut self, tax_id: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.tax_id() == tax_id)
    }

    /// Like `find`, but a miss is a `CustomerNotFound` error
    pub fn require(&self, tax_id: &str) -> Result<&Customer, DomainError> {
        self.find(tax_id)
            .ok_or_else(|| DomainError::CustomerNotFound(tax_id.to_string()))
    }

    pub fn require_mut(&mut self, tax_id: &str) -> Result<&mut Customer, DomainError> {
        self.find_mut(tax_id)
            .ok_or_else(|| DomainError::CustomerNotFound(tax_id.to_string()))
    }

    /// Open a new account for the customer with `tax_id`.
    ///
    /// Account numbers are unique across all customers.
    pub fn open_account(
        &mut self,
        tax_id: &str,
        number: &str,
        policy: WithdrawalPolicy,
    ) -> Result<&Account, DomainError> {
        if self.account_number_in_use(number) {
            // Unknown customers still report as not found first.
            self.require(tax_id)?;
            return Err(DomainError::DuplicateAccount(number.to_string()));
        }

        let customer = self.require_mut(tax_id)?;
        let account = Account::open(customer.as_holder(), number, policy);
        customer.add_account(account);

        tracing::debug!(tax_id, number, "Account opened");
        customer
            .account(number)
            .ok_or_else(|| DomainError::AccountNotFound(number.to_string()))
    }

    fn account_number_in_use(&self, number: &str) -> bool {
        self.customers
            .iter()
            .any(|c| c.account(number).is_some())
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}

//! Account Statement
//!
//! Snapshot of an account's history, rendered as text for the command loop
//! or serialized as JSON for export.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregate::Account;
use crate::domain::{EntryOrigin, TransactionKind};

/// One line of a statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatementLine {
    /// `day-month-year hour:minute:second`
    pub timestamp: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub origin: EntryOrigin,
}

/// Statement of a single account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statement {
    pub account_number: String,
    pub branch: String,
    pub holder: String,
    pub balance: Decimal,
    pub lines: Vec<StatementLine>,
}

impl Statement {
    /// Build the statement from the account's current state
    pub fn of(account: &Account) -> Self {
        let lines = account
            .history()
            .entries()
            .iter()
            .map(|entry| StatementLine {
                timestamp: entry.formatted_timestamp(),
                kind: entry.kind(),
                amount: entry.amount(),
                origin: entry.origin(),
            })
            .collect();

        Self {
            account_number: account.number().to_string(),
            branch: account.branch().to_string(),
            holder: account.holder().name.clone(),
            balance: account.balance().value(),
            lines,
        }
    }

    /// Text form: header, `timestamp - Kind: amount` per entry, balance
    pub fn render(&self) -> String {
        let mut out = format!("Statement for account {}:\n", self.account_number);
        if self.lines.is_empty() {
            out.push_str("No transactions recorded.\n");
        }
        for line in &self.lines {
            out.push_str(&format!(
                "{} - {}: {:.2}\n",
                line.timestamp, line.kind, line.amount
            ));
        }
        out.push_str(&format!("Balance: {:.2}", self.balance));
        out
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::AccountHolder;
    use crate::domain::Transaction;
    use rust_decimal_macros::dec;

    fn account() -> Account {
        Account::checking(AccountHolder::new("111", "Ana"), "1")
    }

    #[test]
    fn test_empty_statement() {
        let statement = Statement::of(&account());

        assert!(statement.lines.is_empty());
        assert_eq!(
            statement.render(),
            "Statement for account 1:\nNo transactions recorded.\nBalance: 0.00"
        );
    }

    #[test]
    fn test_render_lines() {
        let mut account = account();
        Transaction::deposit(dec!(1000)).register(&mut account).unwrap();
        account.withdraw(dec!(250.5)).unwrap();

        let statement = Statement::of(&account);
        let rendered = statement.render();
        let lines: Vec<_> = rendered.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Statement for account 1:");
        assert!(lines[1].ends_with(" - Deposit: 1000.00"));
        assert!(lines[2].ends_with(" - Deposit: 1000.00"));
        assert!(lines[3].ends_with(" - Withdrawal: 250.50"));
        assert_eq!(lines[4], "Balance: 749.50");
    }

    #[test]
    fn test_to_json() {
        let mut account = account();
        account.deposit(dec!(12.5)).unwrap();

        let json = Statement::of(&account).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["account_number"], "1");
        assert_eq!(value["branch"], "0001");
        assert_eq!(value["holder"], "Ana");
        assert_eq!(value["balance"], "12.5");
        assert_eq!(value["lines"][0]["kind"], "Deposit");
        assert_eq!(value["lines"][0]["amount"], "12.5");
        assert_eq!(value["lines"][0]["origin"], "ledger");
    }
}

//! Account History
//!
//! Append-only log of recorded money movements. Entries are stamped with the
//! local wall-clock time when they are recorded and are never changed.

use chrono::{DateTime, Local};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Transaction, TransactionKind};

/// Pattern used when a timestamp is shown to the user
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Which path appended an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOrigin {
    /// Appended by the account when the movement was applied
    Ledger,
    /// Appended again when the transaction was registered by its owner
    Registration,
}

/// One recorded movement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    kind: TransactionKind,
    amount: Decimal,
    timestamp: DateTime<Local>,
    origin: EntryOrigin,
}

impl HistoryEntry {
    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    pub fn origin(&self) -> EntryOrigin {
        self.origin
    }

    /// Timestamp rendered as `day-month-year hour:minute:second`
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// History of a single account
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a movement applied by the account itself
    pub fn record(&mut self, transaction: &Transaction) {
        self.push(transaction, EntryOrigin::Ledger);
    }

    /// Record a transaction on behalf of its registration
    pub fn record_registration(&mut self, transaction: &Transaction) {
        self.push(transaction, EntryOrigin::Registration);
    }

    fn push(&mut self, transaction: &Transaction, origin: EntryOrigin) {
        self.entries.push(HistoryEntry {
            kind: transaction.kind(),
            amount: transaction.amount(),
            timestamp: Local::now(),
            origin,
        });
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of successful movements of `kind`, one per applied operation
    pub fn settled_count(&self, kind: TransactionKind) -> usize {
        self.entries
            .iter()
            .filter(|e| e.kind == kind && e.origin == EntryOrigin::Ledger)
            .count()
    }
}

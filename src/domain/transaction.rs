use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

/// Whether a transaction adds to or subtracts from the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

/// A single ledger entry. Immutable once created, apart from deletion.
/// Amounts are always canonical base-currency values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub category: Category,
    pub amount: f64,
    pub kind: TxKind,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub recurring: bool,
}

impl Transaction {
    pub fn new(category: Category, amount: f64, kind: TxKind, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            amount,
            kind,
            date,
            description: None,
            recurring: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn recurring(mut self) -> Self {
        self.recurring = true;
        self
    }

    /// Key used to deduplicate recurring templates against a period's entries.
    /// Two unrelated transactions sharing description and amount collide on
    /// purpose; see the recurrence service for the consequences.
    pub fn dedup_key(&self) -> (String, u64) {
        (
            self.description.clone().unwrap_or_default(),
            self.amount.to_bits(),
        )
    }

    pub fn is_income(&self) -> bool {
        self.kind == TxKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }
}

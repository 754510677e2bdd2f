use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{category::Category, period::Period};

/// A recurring monthly bill. Payment state is a set of period keys; whether a
/// bill is overdue is always derived, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    /// Day of month the bill falls due, 1 through 31.
    pub due_day: u32,
    pub category: Category,
    pub icon: String,
    #[serde(default)]
    pub paid_months: BTreeSet<String>,
}

impl Bill {
    pub fn new(
        name: impl Into<String>,
        amount: f64,
        due_day: u32,
        category: Category,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
            due_day,
            category,
            icon: icon.into(),
            paid_months: BTreeSet::new(),
        }
    }

    pub fn is_paid(&self, period: Period) -> bool {
        self.paid_months.contains(&period.key())
    }

    /// Flips the paid flag for `period`. Toggling twice restores the set.
    pub fn toggle_paid(&mut self, period: Period) {
        let key = period.key();
        if !self.paid_months.remove(&key) {
            self.paid_months.insert(key);
        }
    }

    /// Unpaid and past its due day relative to today's day of month.
    pub fn is_overdue(&self, period: Period, today: NaiveDate) -> bool {
        !self.is_paid(period) && self.due_day < today.day()
    }
}

//! First-run seed data.
//!
//! A fresh install boots with one quarter of realistic activity so every
//! screen has something to show. The seed also comes back on a full reset.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;

use crate::domain::{Category, Transaction, TxKind};

/// Default monthly budget caps for the recurring essentials.
pub static DEFAULT_BUDGETS: Lazy<BTreeMap<Category, f64>> = Lazy::new(|| {
    BTreeMap::from([
        (Category::Transport, 42_000.0),
        (Category::Foodstuff, 30_000.0),
        (Category::Bread, 4_000.0),
        (Category::Data, 14_000.0),
    ])
});

/// The Q1 2025 starter ledger: recurring essentials on the 1st, salary on
/// the 25th, and one cleared debt in February.
pub fn q1_transactions() -> Vec<Transaction> {
    let mut txs = Vec::with_capacity(16);
    for (month, salary_desc) in [(2, "February salary"), (3, "March salary"), (4, "April salary")] {
        let first = day(month, 1);
        txs.push(
            Transaction::new(Category::Transport, 42_000.0, TxKind::Expense, first)
                .with_description("Monthly transport")
                .recurring(),
        );
        txs.push(
            Transaction::new(Category::Foodstuff, 30_000.0, TxKind::Expense, first)
                .with_description("Foodstuff")
                .recurring(),
        );
        txs.push(
            Transaction::new(Category::Bread, 4_000.0, TxKind::Expense, first)
                .with_description("Bread ×4 weeks")
                .recurring(),
        );
        txs.push(
            Transaction::new(Category::Data, 14_000.0, TxKind::Expense, first)
                .with_description("Mobile data")
                .recurring(),
        );
        if month == 2 {
            txs.push(
                Transaction::new(Category::Debt, 120_000.0, TxKind::Expense, day(2, 25))
                    .with_description("Debt cleared"),
            );
        }
        txs.push(
            Transaction::new(Category::Other, 500_000.0, TxKind::Income, day(month, 25))
                .with_description(salary_desc),
        );
    }
    txs
}

fn day(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_sixteen_entries() {
        assert_eq!(q1_transactions().len(), 16);
    }

    #[test]
    fn seed_income_and_expense_split() {
        let txs = q1_transactions();
        let incomes = txs.iter().filter(|t| t.is_income()).count();
        assert_eq!(incomes, 3);
        assert_eq!(txs.len() - incomes, 13);
    }

    #[test]
    fn recurring_entries_land_on_the_first() {
        use chrono::Datelike;
        for tx in q1_transactions() {
            if tx.recurring {
                assert_eq!(tx.date.day(), 1);
            }
        }
    }

    #[test]
    fn default_budgets_cover_the_essentials() {
        assert_eq!(DEFAULT_BUDGETS.get(&Category::Transport), Some(&42_000.0));
        assert_eq!(DEFAULT_BUDGETS.len(), 4);
    }
}

//! Period aggregation: totals, savings rate, category spend, and trends.
//!
//! Everything here is a pure function over transaction slices. Selecting a
//! different period never mutates state, it only changes which entries the
//! aggregation sees.

use std::collections::BTreeMap;

use crate::domain::{Category, Period, Transaction};

/// Income, expense, and their difference for one period.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
}

impl Totals {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

/// One month in a trend series.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub period: Period,
    pub label: String,
    pub income: f64,
    pub expense: f64,
    /// Never negative; a deficit month shows zero savings.
    pub savings: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Transactions dated inside `period`.
    pub fn transactions_in_period<'a>(
        transactions: &'a [Transaction],
        period: Period,
    ) -> Vec<&'a Transaction> {
        transactions
            .iter()
            .filter(|tx| period.contains(tx.date))
            .collect()
    }

    pub fn totals(transactions: &[&Transaction]) -> Totals {
        let mut totals = Totals::default();
        for tx in transactions {
            if tx.is_income() {
                totals.income += tx.amount;
            } else {
                totals.expense += tx.amount;
            }
        }
        totals
    }

    /// Fraction of income kept. Zero income means zero rate; a deficit month
    /// reads negative. Never exceeds 1 since expense cannot be negative.
    pub fn savings_rate(totals: Totals) -> f64 {
        if totals.income <= 0.0 {
            return 0.0;
        }
        totals.balance() / totals.income
    }

    /// Expense totals by category for the given entries. Categories with no
    /// spend are absent rather than zero.
    pub fn category_spend(transactions: &[&Transaction]) -> BTreeMap<Category, f64> {
        let mut spend = BTreeMap::new();
        for tx in transactions {
            if tx.is_expense() {
                *spend.entry(tx.category).or_insert(0.0) += tx.amount;
            }
        }
        spend
    }

    /// The category with the highest spend, with its total.
    pub fn top_category(transactions: &[&Transaction]) -> Option<(Category, f64)> {
        Self::category_spend(transactions)
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// The last `window` months ending at `period`, oldest first. Months with
    /// no activity appear as zero points so the series length is fixed.
    pub fn trend_series(
        transactions: &[Transaction],
        period: Period,
        window: u32,
    ) -> Vec<TrendPoint> {
        (0..window)
            .rev()
            .map(|back| {
                let month = period.back(back);
                let entries = Self::transactions_in_period(transactions, month);
                let totals = Self::totals(&entries);
                TrendPoint {
                    period: month,
                    label: month.label().to_string(),
                    income: totals.income,
                    expense: totals.expense,
                    savings: totals.balance().max(0.0),
                }
            })
            .collect()
    }
}

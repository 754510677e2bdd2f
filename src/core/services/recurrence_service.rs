//! Materializes recurring templates into a target period.

use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{Period, Transaction};

pub struct RecurrenceService;

impl RecurrenceService {
    /// Copies each recurring transaction into `period` unless an entry with
    /// the same description and amount already exists there. Materialized
    /// entries land on the first of the month, keep the recurring flag, and
    /// get fresh ids. Running twice for the same period adds nothing.
    pub fn materialize(transactions: &[Transaction], period: Period) -> Vec<Transaction> {
        let mut seen: HashSet<(String, u64)> = transactions
            .iter()
            .filter(|tx| period.contains(tx.date))
            .map(Transaction::dedup_key)
            .collect();

        let mut produced = Vec::new();
        for template in transactions.iter().filter(|tx| tx.recurring) {
            let key = template.dedup_key();
            if seen.insert(key) {
                let mut entry = template.clone();
                entry.id = Uuid::new_v4();
                entry.date = period.first_day();
                produced.push(entry);
            }
        }
        produced
    }
}

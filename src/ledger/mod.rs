//! The in-memory ledger state.
//!
//! [`Ledger`] is a plain container for every persisted collection. All
//! derivation (totals, trends, insights) lives in the service layer; the
//! ledger only offers structural mutation and lookup.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::currency::Currency;
use crate::domain::{Bill, Category, Debt, Goal, Profile, Transaction};

/// Everything the app persists, held together in memory.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    /// Monthly spending cap per category. Absent key means no budget set.
    pub budgets: BTreeMap<Category, f64>,
    pub goals: Vec<Goal>,
    pub debts: Vec<Debt>,
    pub bills: Vec<Bill>,
    pub profile: Profile,
    pub currency: Currency,
    pub dark_mode: bool,
}

impl Ledger {
    /// Inserts a transaction at the front so the newest entry lists first.
    pub fn push_transaction(&mut self, tx: Transaction) {
        self.transactions.insert(0, tx);
    }

    /// Removes a transaction by id. Returns whether anything was removed.
    pub fn remove_transaction(&mut self, id: Uuid) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|tx| tx.id != id);
        self.transactions.len() != before
    }

    pub fn goal_mut(&mut self, id: Uuid) -> Option<&mut Goal> {
        self.goals.iter_mut().find(|g| g.id == id)
    }

    pub fn remove_goal(&mut self, id: Uuid) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        self.goals.len() != before
    }

    pub fn debt_mut(&mut self, id: Uuid) -> Option<&mut Debt> {
        self.debts.iter_mut().find(|d| d.id == id)
    }

    pub fn remove_debt(&mut self, id: Uuid) -> bool {
        let before = self.debts.len();
        self.debts.retain(|d| d.id != id);
        self.debts.len() != before
    }

    pub fn bill_mut(&mut self, id: Uuid) -> Option<&mut Bill> {
        self.bills.iter_mut().find(|b| b.id == id)
    }

    pub fn remove_bill(&mut self, id: Uuid) -> bool {
        let before = self.bills.len();
        self.bills.retain(|b| b.id != id);
        self.bills.len() != before
    }

    /// Debts that still have an outstanding balance.
    pub fn open_debts(&self) -> impl Iterator<Item = &Debt> {
        self.debts.iter().filter(|d| !d.is_cleared())
    }
}

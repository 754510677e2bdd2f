//! The command and query facade over the ledger.
//!
//! `LedgerManager` owns the in-memory [`Ledger`], a storage backend, and a
//! clock. Commands validate before touching state; every successful mutation
//! persists the affected document best-effort. A persistence failure is
//! logged and swallowed, the in-memory state stays the source of truth.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::currency::{format_amount, Currency};
use crate::domain::{Bill, Category, Debt, Goal, Period, Profile, Transaction, TxKind};
use crate::errors::LedgerError;
use crate::ledger::Ledger;
use crate::seed;
use crate::storage::{keys, StorageBackend};
use crate::time::Clock;

use super::services::{
    HealthReport, Insight, InsightService, PeriodSnapshot, RecurrenceService, SummaryService,
    Totals, TrendPoint,
};

type Result<T> = std::result::Result<T, LedgerError>;

/// Months shown in the analytics trend chart.
pub const DEFAULT_TREND_WINDOW: u32 = 6;

/// Form input for a new transaction. Amounts arrive as raw text.
#[derive(Debug, Clone)]
pub struct TransactionDraft {
    pub category: Category,
    pub amount: String,
    pub kind: TxKind,
    pub date: NaiveDate,
    pub description: String,
    pub recurring: bool,
}

#[derive(Debug, Clone)]
pub struct GoalDraft {
    pub name: String,
    pub target: String,
    /// Optional starting balance; blank or junk input counts as zero.
    pub saved: String,
    pub icon: String,
    pub deadline: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct DebtDraft {
    pub creditor: String,
    pub amount: String,
    /// Optional amount already repaid; blank or junk input counts as zero.
    pub paid: String,
    pub due_date: Option<NaiveDate>,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct BillDraft {
    pub name: String,
    pub amount: String,
    pub due_day: u32,
    pub category: Category,
    pub icon: String,
}

#[derive(Debug, Clone)]
pub struct ProfileDraft {
    pub name: String,
    pub avatar_icon: String,
    pub monthly_income: String,
}

/// Aggregate view over all debts.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DebtSummary {
    pub total: f64,
    pub paid: f64,
    pub outstanding: f64,
}

pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
    clock: Box<dyn Clock>,
}

impl LedgerManager {
    /// Loads every persisted document. A missing or unreadable transaction
    /// document boots the seed dataset and writes it back immediately; any
    /// other missing document falls back to its default.
    pub fn new(storage: Box<dyn StorageBackend>, clock: Box<dyn Clock>) -> Self {
        let mut ledger = Ledger {
            budgets: seed::DEFAULT_BUDGETS.clone(),
            ..Ledger::default()
        };
        if let Some(budgets) = load_doc::<BTreeMap<Category, f64>>(&*storage, keys::BUDGETS) {
            ledger.budgets = budgets;
        }
        if let Some(goals) = load_doc::<Vec<Goal>>(&*storage, keys::GOALS) {
            ledger.goals = goals;
        }
        if let Some(debts) = load_doc::<Vec<Debt>>(&*storage, keys::DEBTS) {
            ledger.debts = debts;
        }
        if let Some(bills) = load_doc::<Vec<Bill>>(&*storage, keys::BILLS) {
            ledger.bills = bills;
        }
        if let Some(profile) = load_doc::<Profile>(&*storage, keys::PROFILE) {
            ledger.profile = profile;
        }
        if let Some(currency) = load_doc::<Currency>(&*storage, keys::CURRENCY) {
            ledger.currency = currency;
        }
        if let Some(dark) = load_doc::<bool>(&*storage, keys::DARK_MODE) {
            ledger.dark_mode = dark;
        }

        let transactions = load_doc::<Vec<Transaction>>(&*storage, keys::TRANSACTIONS);
        let mut manager = Self {
            ledger,
            storage,
            clock,
        };
        match transactions {
            Some(txs) => manager.ledger.transactions = txs,
            None => {
                info!("no transaction history found, booting seed dataset");
                manager.ledger.transactions = seed::q1_transactions();
                manager.persist(keys::TRANSACTIONS, &manager.ledger.transactions);
            }
        }
        manager
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn current_period(&self) -> Period {
        Period::from_date(self.clock.today())
    }

    // ── Transactions ──────────────────────────────────────────────

    pub fn add_transaction(&mut self, draft: TransactionDraft) -> Result<Transaction> {
        let amount = parse_amount(&draft.amount)?;
        let mut tx = Transaction::new(draft.category, amount, draft.kind, draft.date);
        let description = draft.description.trim();
        if !description.is_empty() {
            tx = tx.with_description(description);
        }
        if draft.recurring {
            tx = tx.recurring();
        }
        self.ledger.push_transaction(tx.clone());
        self.persist(keys::TRANSACTIONS, &self.ledger.transactions);
        Ok(tx)
    }

    /// Removes a transaction if present. Unknown ids are a silent no-op, so
    /// repeated deletes are safe.
    pub fn delete_transaction(&mut self, id: Uuid) {
        if self.ledger.remove_transaction(id) {
            self.persist(keys::TRANSACTIONS, &self.ledger.transactions);
        }
    }

    /// Materializes recurring templates into `period`; returns how many
    /// entries were added. Zero means everything was already present.
    pub fn apply_recurring(&mut self, period: Period) -> usize {
        let produced = RecurrenceService::materialize(&self.ledger.transactions, period);
        let count = produced.len();
        if count > 0 {
            for tx in produced {
                self.ledger.push_transaction(tx);
            }
            self.persist(keys::TRANSACTIONS, &self.ledger.transactions);
            info!(count, period = %period.key(), "materialized recurring entries");
        }
        count
    }

    // ── Budgets ───────────────────────────────────────────────────

    /// Sets or clears the monthly cap for a category. A `None` or
    /// non-positive limit clears it.
    pub fn set_budget(&mut self, category: Category, limit: Option<f64>) {
        match limit {
            Some(value) if value > 0.0 => {
                self.ledger.budgets.insert(category, value);
            }
            _ => {
                self.ledger.budgets.remove(&category);
            }
        }
        self.persist(keys::BUDGETS, &self.ledger.budgets);
    }

    // ── Goals ─────────────────────────────────────────────────────

    pub fn add_goal(&mut self, draft: GoalDraft) -> Result<Goal> {
        let name = require_text(&draft.name, "goal name")?;
        let target = parse_amount(&draft.target)?;
        let icon = if draft.icon.trim().is_empty() {
            "🎯".to_string()
        } else {
            draft.icon
        };
        let mut goal = Goal::new(name, target, icon);
        goal.saved = parse_starting_amount(&draft.saved).min(target);
        goal.deadline = draft.deadline;
        self.ledger.goals.push(goal.clone());
        self.persist(keys::GOALS, &self.ledger.goals);
        Ok(goal)
    }

    pub fn top_up_goal(&mut self, id: Uuid, amount: f64) -> Result<Goal> {
        if amount <= 0.0 {
            return Err(LedgerError::validation("top-up amount must be positive"));
        }
        let goal = self
            .ledger
            .goal_mut(id)
            .ok_or_else(|| LedgerError::validation(format!("unknown goal {id}")))?;
        goal.top_up(amount);
        let updated = goal.clone();
        self.persist(keys::GOALS, &self.ledger.goals);
        Ok(updated)
    }

    pub fn delete_goal(&mut self, id: Uuid) {
        if self.ledger.remove_goal(id) {
            self.persist(keys::GOALS, &self.ledger.goals);
        }
    }

    // ── Debts ─────────────────────────────────────────────────────

    pub fn add_debt(&mut self, draft: DebtDraft) -> Result<Debt> {
        let creditor = require_text(&draft.creditor, "creditor")?;
        let amount = parse_amount(&draft.amount)?;
        let mut debt = Debt::new(creditor, amount);
        debt.paid = parse_starting_amount(&draft.paid).min(amount);
        debt.due_date = draft.due_date;
        let note = draft.note.trim();
        if !note.is_empty() {
            debt.note = Some(note.to_string());
        }
        self.ledger.debts.push(debt.clone());
        self.persist(keys::DEBTS, &self.ledger.debts);
        Ok(debt)
    }

    /// Applies a payment and records it in the ledger. The ledger entry
    /// carries the requested amount even when the debt clamps at its total.
    pub fn pay_debt(&mut self, id: Uuid, amount: &str) -> Result<Debt> {
        let payment = parse_amount(amount)?;
        let today = self.clock.today();
        let debt = self
            .ledger
            .debt_mut(id)
            .ok_or_else(|| LedgerError::validation(format!("unknown debt {id}")))?;
        debt.apply_payment(payment);
        let updated = debt.clone();

        let entry = Transaction::new(Category::Debt, payment, TxKind::Expense, today)
            .with_description(format!("Payment → {}", updated.creditor));
        self.ledger.push_transaction(entry);

        self.persist(keys::DEBTS, &self.ledger.debts);
        self.persist(keys::TRANSACTIONS, &self.ledger.transactions);
        Ok(updated)
    }

    pub fn delete_debt(&mut self, id: Uuid) {
        if self.ledger.remove_debt(id) {
            self.persist(keys::DEBTS, &self.ledger.debts);
        }
    }

    pub fn debt_summary(&self) -> DebtSummary {
        let mut summary = DebtSummary::default();
        for debt in &self.ledger.debts {
            summary.total += debt.amount;
            summary.paid += debt.paid;
            summary.outstanding += debt.outstanding();
        }
        summary
    }

    // ── Bills ─────────────────────────────────────────────────────

    pub fn add_bill(&mut self, draft: BillDraft) -> Result<Bill> {
        let name = require_text(&draft.name, "bill name")?;
        let amount = parse_amount(&draft.amount)?;
        if !(1..=31).contains(&draft.due_day) {
            return Err(LedgerError::validation("due day must be 1 through 31"));
        }
        let icon = if draft.icon.trim().is_empty() {
            "🧾".to_string()
        } else {
            draft.icon
        };
        let bill = Bill::new(name, amount, draft.due_day, draft.category, icon);
        self.ledger.bills.push(bill.clone());
        self.persist(keys::BILLS, &self.ledger.bills);
        Ok(bill)
    }

    pub fn toggle_bill_paid(&mut self, id: Uuid, period: Period) -> Result<Bill> {
        let bill = self
            .ledger
            .bill_mut(id)
            .ok_or_else(|| LedgerError::validation(format!("unknown bill {id}")))?;
        bill.toggle_paid(period);
        let updated = bill.clone();
        self.persist(keys::BILLS, &self.ledger.bills);
        Ok(updated)
    }

    pub fn delete_bill(&mut self, id: Uuid) {
        if self.ledger.remove_bill(id) {
            self.persist(keys::BILLS, &self.ledger.bills);
        }
    }

    /// Bills split into (paid, unpaid) for the given period.
    pub fn bills_for_period(&self, period: Period) -> (Vec<&Bill>, Vec<&Bill>) {
        self.ledger.bills.iter().partition(|b| b.is_paid(period))
    }

    // ── Settings ──────────────────────────────────────────────────

    pub fn set_currency(&mut self, currency: Currency) {
        self.ledger.currency = currency;
        self.persist(keys::CURRENCY, &self.ledger.currency);
    }

    pub fn set_dark_mode(&mut self, enabled: bool) {
        self.ledger.dark_mode = enabled;
        self.persist(keys::DARK_MODE, &self.ledger.dark_mode);
    }

    pub fn save_profile(&mut self, draft: ProfileDraft) -> Result<Profile> {
        let name = require_text(&draft.name, "name")?;
        let monthly_income = parse_amount(&draft.monthly_income)?;
        let avatar_icon = if draft.avatar_icon.trim().is_empty() {
            Profile::default().avatar_icon
        } else {
            draft.avatar_icon
        };
        self.ledger.profile = Profile {
            name,
            avatar_icon,
            monthly_income,
        };
        self.persist(keys::PROFILE, &self.ledger.profile);
        Ok(self.ledger.profile.clone())
    }

    /// Restores the seed transactions and clears goals, debts, and bills.
    /// Budgets, profile, and currency survive a reset.
    pub fn reset_to_seed(&mut self) {
        self.ledger.transactions = seed::q1_transactions();
        self.ledger.goals.clear();
        self.ledger.debts.clear();
        self.ledger.bills.clear();
        self.persist(keys::TRANSACTIONS, &self.ledger.transactions);
        self.persist(keys::GOALS, &self.ledger.goals);
        self.persist(keys::DEBTS, &self.ledger.debts);
        self.persist(keys::BILLS, &self.ledger.bills);
        info!("ledger reset to seed data");
    }

    // ── Derived views ─────────────────────────────────────────────

    pub fn totals(&self, period: Period) -> Totals {
        let entries = SummaryService::transactions_in_period(&self.ledger.transactions, period);
        SummaryService::totals(&entries)
    }

    pub fn savings_rate(&self, period: Period) -> f64 {
        SummaryService::savings_rate(self.totals(period))
    }

    pub fn category_spend(&self, period: Period) -> BTreeMap<Category, f64> {
        let entries = SummaryService::transactions_in_period(&self.ledger.transactions, period);
        SummaryService::category_spend(&entries)
    }

    pub fn trend(&self, period: Period, window: u32) -> Vec<TrendPoint> {
        SummaryService::trend_series(&self.ledger.transactions, period, window)
    }

    pub fn insights(&self, period: Period) -> Vec<Insight> {
        InsightService::evaluate(&self.snapshot(period))
    }

    pub fn health_report(&self, period: Period) -> HealthReport {
        InsightService::health_report(
            self.savings_rate(period),
            self.ledger.open_debts().count(),
            self.ledger.goals.len(),
        )
    }

    /// Formats a canonical amount in the active display currency.
    pub fn format(&self, amount: f64) -> String {
        format_amount(amount, self.ledger.currency)
    }

    fn snapshot(&self, period: Period) -> PeriodSnapshot {
        let entries = SummaryService::transactions_in_period(&self.ledger.transactions, period);
        let totals = SummaryService::totals(&entries);
        let today = self.clock.today();
        PeriodSnapshot {
            totals,
            savings_rate: SummaryService::savings_rate(totals),
            prior_expense: self.totals(period.prev()).expense,
            top_category: SummaryService::top_category(&entries),
            overdue_bills: self
                .ledger
                .bills
                .iter()
                .filter(|b| b.is_overdue(period, today))
                .count(),
            currency: self.ledger.currency,
        }
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => {
                if let Err(err) = self.storage.save(key, &json) {
                    warn!(key, error = %err, "failed to persist document");
                }
            }
            Err(err) => warn!(key, error = %err, "failed to serialize document"),
        }
    }
}

fn load_doc<T: DeserializeOwned>(storage: &dyn StorageBackend, key: &str) -> Option<T> {
    match storage.load(key) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "discarding unreadable document");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!(key, error = %err, "failed to load document");
            None
        }
    }
}

fn parse_amount(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| LedgerError::validation(format!("not a number: {raw:?}")))?;
    if !value.is_finite() || value <= 0.0 {
        return Err(LedgerError::validation("amount must be positive"));
    }
    Ok(value)
}

/// Lenient parse for optional starting balances: anything that is not a
/// positive finite number counts as zero.
fn parse_starting_amount(raw: &str) -> f64 {
    let value: f64 = raw.trim().parse().unwrap_or(0.0);
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn require_text(raw: &str, what: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LedgerError::validation(format!("{what} must not be empty")));
    }
    Ok(trimmed.to_string())
}

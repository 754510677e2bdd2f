use chrono::NaiveDate;
use planr_core::core::ledger_manager::{LedgerManager, TransactionDraft, DEFAULT_TREND_WINDOW};
use planr_core::core::services::HealthTier;
use planr_core::currency::Currency;
use planr_core::domain::{Category, Period, TxKind};
use planr_core::storage::JsonStorage;
use planr_core::time::FixedClock;
use std::path::Path;
use tempfile::tempdir;

fn manager_at(root: &Path, today: NaiveDate) -> LedgerManager {
    let storage = JsonStorage::new(Some(root.to_path_buf())).unwrap();
    LedgerManager::new(Box::new(storage), Box::new(FixedClock(today)))
}

fn mid_march() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()
}

#[test]
fn seed_quarter_produces_the_expected_summaries() {
    let temp = tempdir().unwrap();
    let manager = manager_at(temp.path(), mid_march());

    let feb = manager.totals(Period::new(2025, 2));
    assert_eq!(feb.income, 500_000.0);
    assert_eq!(feb.expense, 210_000.0);
    assert_eq!(feb.balance(), 290_000.0);
    assert!((manager.savings_rate(Period::new(2025, 2)) - 0.58).abs() < 1e-9);

    for month in [3, 4] {
        let totals = manager.totals(Period::new(2025, month));
        assert_eq!(totals.income, 500_000.0);
        assert_eq!(totals.expense, 90_000.0);
        assert_eq!(totals.balance(), 410_000.0);
    }

    let report = manager.health_report(Period::new(2025, 3));
    assert_eq!(report.score, 82);
    assert_eq!(report.tier, HealthTier::Excellent);
    assert_eq!(report.open_debts, 0);
    assert_eq!(report.active_goals, 0);
}

#[test]
fn recurring_entries_materialize_once_per_month() {
    let temp = tempdir().unwrap();
    let mut manager = manager_at(temp.path(), NaiveDate::from_ymd_opt(2025, 5, 3).unwrap());

    let may = Period::new(2025, 5);
    assert_eq!(manager.apply_recurring(may), 4);
    assert_eq!(manager.apply_recurring(may), 0);

    let totals = manager.totals(may);
    assert_eq!(totals.expense, 90_000.0);
    assert_eq!(totals.income, 0.0);

    // March already holds every template, so nothing new appears.
    assert_eq!(manager.apply_recurring(Period::new(2025, 3)), 0);
}

#[test]
fn rejected_input_changes_nothing_in_memory_or_on_disk() {
    let temp = tempdir().unwrap();
    let mut manager = manager_at(temp.path(), mid_march());
    let tx_doc = temp.path().join("tx.json");
    let before_disk = std::fs::read_to_string(&tx_doc).unwrap();
    let before_len = manager.ledger().transactions.len();

    for bad in ["abc", "-5", "0"] {
        let result = manager.add_transaction(TransactionDraft {
            category: Category::Foodstuff,
            amount: bad.to_string(),
            kind: TxKind::Expense,
            date: mid_march(),
            description: String::new(),
            recurring: false,
        });
        assert!(result.is_err(), "input {bad:?} should be rejected");
    }

    assert_eq!(manager.ledger().transactions.len(), before_len);
    assert_eq!(std::fs::read_to_string(&tx_doc).unwrap(), before_disk);
}

#[test]
fn state_survives_a_restart() {
    let temp = tempdir().unwrap();
    let added_id;
    {
        let mut manager = manager_at(temp.path(), mid_march());
        manager.set_currency(Currency::Usd);
        manager.set_budget(Category::Housing, Some(150_000.0));
        let tx = manager
            .add_transaction(TransactionDraft {
                category: Category::Health,
                amount: "12500".to_string(),
                kind: TxKind::Expense,
                date: mid_march(),
                description: "Pharmacy".to_string(),
                recurring: false,
            })
            .unwrap();
        added_id = tx.id;
    }

    let reloaded = manager_at(temp.path(), mid_march());
    assert_eq!(reloaded.ledger().currency, Currency::Usd);
    assert_eq!(
        reloaded.ledger().budgets.get(&Category::Housing),
        Some(&150_000.0)
    );
    assert!(reloaded
        .ledger()
        .transactions
        .iter()
        .any(|tx| tx.id == added_id));
    // 16 seeded plus the pharmacy run.
    assert_eq!(reloaded.ledger().transactions.len(), 17);
}

#[test]
fn insights_follow_the_selected_period() {
    let temp = tempdir().unwrap();
    let manager = manager_at(temp.path(), mid_march());

    // March spent 90k against February's 210k.
    let insights = manager.insights(Period::new(2025, 3));
    assert!(insights[0].text.contains("Spending down 57%"));
    assert!(insights
        .iter()
        .any(|i| i.text == "Outstanding! You saved 82% of income."));

    // February has no prior activity, so no month-over-month insight.
    let feb = manager.insights(Period::new(2025, 2));
    assert!(!feb.iter().any(|i| i.text.contains("vs last month")));
}

#[test]
fn trend_covers_the_requested_window() {
    let temp = tempdir().unwrap();
    let manager = manager_at(temp.path(), mid_march());

    let series = manager.trend(Period::new(2025, 4), DEFAULT_TREND_WINDOW);
    assert_eq!(series.len(), 6);
    assert_eq!(series[0].label, "Nov");
    assert_eq!(series[5].label, "Apr");
    assert_eq!(series[5].savings, 410_000.0);
    assert_eq!(series[1].expense, 0.0);
}

#[test]
fn display_formatting_follows_the_active_currency() {
    let temp = tempdir().unwrap();
    let mut manager = manager_at(temp.path(), mid_march());

    assert_eq!(manager.format(500_000.0), "₦500.0K");
    manager.set_currency(Currency::Usd);
    assert_eq!(manager.format(500_000.0), "$315");
}

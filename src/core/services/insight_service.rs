//! Rule-driven insights and the financial health score.

use crate::currency::{format_amount, Currency};
use crate::domain::Category;

use super::summary_service::Totals;

/// How urgent an insight is, used for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Good,
    Info,
    Warning,
    Alert,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Insight {
    pub icon: String,
    pub text: String,
    pub severity: Severity,
}

/// Everything the insight rules look at, computed once per evaluation.
#[derive(Debug, Clone)]
pub struct PeriodSnapshot {
    pub totals: Totals,
    pub savings_rate: f64,
    /// Total expense of the immediately preceding period.
    pub prior_expense: f64,
    pub top_category: Option<(Category, f64)>,
    pub overdue_bills: usize,
    pub currency: Currency,
}

type InsightRule = fn(&PeriodSnapshot) -> Option<Insight>;

/// Evaluation order fixes presentation order.
const RULES: [InsightRule; 4] = [
    month_over_month,
    savings_tier,
    biggest_spend,
    unpaid_bills,
];

const MAX_INSIGHTS: usize = 4;

pub struct InsightService;

impl InsightService {
    /// Runs every rule in order and keeps at most four hits.
    pub fn evaluate(snapshot: &PeriodSnapshot) -> Vec<Insight> {
        RULES
            .iter()
            .filter_map(|rule| rule(snapshot))
            .take(MAX_INSIGHTS)
            .collect()
    }

    /// Health score is the savings rate as a percentage, clamped to `[0, 100]`.
    pub fn health_score(savings_rate: f64) -> u8 {
        (savings_rate * 100.0).clamp(0.0, 100.0).round() as u8
    }

    pub fn health_report(
        savings_rate: f64,
        open_debts: usize,
        active_goals: usize,
    ) -> HealthReport {
        let score = Self::health_score(savings_rate);
        HealthReport {
            score,
            tier: HealthTier::for_score(score),
            open_debts,
            active_goals,
        }
    }
}

fn month_over_month(s: &PeriodSnapshot) -> Option<Insight> {
    if s.prior_expense <= 0.0 || s.totals.expense <= 0.0 {
        return None;
    }
    let diff = s.totals.expense - s.prior_expense;
    let pct = (diff / s.prior_expense * 100.0).abs().round();
    let insight = if diff > 0.0 {
        Insight {
            icon: "📈".into(),
            text: format!("Spending up {pct:.0}% vs last month"),
            severity: Severity::Alert,
        }
    } else {
        Insight {
            icon: "📉".into(),
            text: format!("Spending down {pct:.0}% vs last month"),
            severity: Severity::Good,
        }
    };
    Some(insight)
}

fn savings_tier(s: &PeriodSnapshot) -> Option<Insight> {
    let pct = (s.savings_rate * 100.0).round();
    if s.savings_rate > 0.75 {
        Some(Insight {
            icon: "🌟".into(),
            text: format!("Outstanding! You saved {pct:.0}% of income."),
            severity: Severity::Good,
        })
    } else if s.savings_rate > 0.0 && s.savings_rate < 0.3 {
        Some(Insight {
            icon: "⚠️".into(),
            text: format!("Only {pct:.0}% saved. Consider cutting your top category."),
            severity: Severity::Warning,
        })
    } else {
        None
    }
}

fn biggest_spend(s: &PeriodSnapshot) -> Option<Insight> {
    let (category, amount) = s.top_category?;
    Some(Insight {
        icon: category.icon().into(),
        text: format!(
            "Biggest spend: {} at {}",
            category.label(),
            format_amount(amount, s.currency)
        ),
        severity: Severity::Info,
    })
}

fn unpaid_bills(s: &PeriodSnapshot) -> Option<Insight> {
    if s.overdue_bills == 0 {
        return None;
    }
    Some(Insight {
        icon: "🔔".into(),
        text: format!("{} bill(s) unpaid this month", s.overdue_bills),
        severity: Severity::Alert,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthTier {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl HealthTier {
    pub fn for_score(score: u8) -> Self {
        match score {
            71..=100 => HealthTier::Excellent,
            51..=70 => HealthTier::Good,
            31..=50 => HealthTier::Fair,
            _ => HealthTier::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthTier::Excellent => "Excellent",
            HealthTier::Good => "Good",
            HealthTier::Fair => "Fair",
            HealthTier::NeedsWork => "Needs Work",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub score: u8,
    pub tier: HealthTier,
    pub open_debts: usize,
    pub active_goals: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> PeriodSnapshot {
        PeriodSnapshot {
            totals: Totals { income: 500_000.0, expense: 90_000.0 },
            savings_rate: 0.82,
            prior_expense: 210_000.0,
            top_category: Some((Category::Transport, 42_000.0)),
            overdue_bills: 0,
            currency: Currency::Ngn,
        }
    }

    #[test]
    fn march_snapshot_yields_ordered_insights() {
        let insights = InsightService::evaluate(&snapshot());

        assert_eq!(insights.len(), 3);
        assert_eq!(insights[0].text, "Spending down 57% vs last month");
        assert_eq!(insights[0].severity, Severity::Good);
        assert_eq!(insights[1].text, "Outstanding! You saved 82% of income.");
        assert_eq!(insights[2].text, "Biggest spend: Transportation at ₦42.0K");
    }

    #[test]
    fn rising_spend_is_an_alert() {
        let mut snap = snapshot();
        snap.prior_expense = 60_000.0;
        let insights = InsightService::evaluate(&snap);
        assert_eq!(insights[0].text, "Spending up 50% vs last month");
        assert_eq!(insights[0].severity, Severity::Alert);
    }

    #[test]
    fn low_savings_warns() {
        let mut snap = snapshot();
        snap.savings_rate = 0.2;
        let insights = InsightService::evaluate(&snap);
        assert!(insights
            .iter()
            .any(|i| i.severity == Severity::Warning && i.text.starts_with("Only 20%")));
    }

    #[test]
    fn middle_band_savings_rate_stays_silent() {
        let mut snap = snapshot();
        snap.savings_rate = 0.5;
        snap.prior_expense = 0.0;
        snap.top_category = None;
        assert!(InsightService::evaluate(&snap).is_empty());
    }

    #[test]
    fn overdue_bills_raise_an_alert() {
        let mut snap = snapshot();
        snap.overdue_bills = 2;
        let insights = InsightService::evaluate(&snap);
        let last = insights.last().unwrap();
        assert_eq!(last.text, "2 bill(s) unpaid this month");
        assert_eq!(last.severity, Severity::Alert);
    }

    #[test]
    fn at_most_four_insights() {
        let mut snap = snapshot();
        snap.overdue_bills = 1;
        assert_eq!(InsightService::evaluate(&snap).len(), 4);
    }

    #[test]
    fn health_score_clamps_and_rounds() {
        assert_eq!(InsightService::health_score(0.82), 82);
        assert_eq!(InsightService::health_score(1.5), 100);
        assert_eq!(InsightService::health_score(-0.2), 0);
        assert_eq!(InsightService::health_score(0.705), 71);
    }

    #[test]
    fn tiers_follow_score_bands() {
        assert_eq!(HealthTier::for_score(82), HealthTier::Excellent);
        assert_eq!(HealthTier::for_score(71), HealthTier::Excellent);
        assert_eq!(HealthTier::for_score(70), HealthTier::Good);
        assert_eq!(HealthTier::for_score(31), HealthTier::Fair);
        assert_eq!(HealthTier::for_score(30), HealthTier::NeedsWork);
    }
}

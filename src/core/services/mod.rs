pub mod insight_service;
pub mod recurrence_service;
pub mod summary_service;

pub use insight_service::{
    HealthReport, HealthTier, Insight, InsightService, PeriodSnapshot, Severity,
};
pub use recurrence_service::RecurrenceService;
pub use summary_service::{SummaryService, Totals, TrendPoint};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A savings goal. `saved` never leaves `[0, target]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    pub name: String,
    pub target: f64,
    pub saved: f64,
    pub icon: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
}

impl Goal {
    pub fn new(name: impl Into<String>, target: f64, icon: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target,
            saved: 0.0,
            icon: icon.into(),
            deadline: None,
        }
    }

    /// Adds `amount` to the saved total, clamped to the target.
    pub fn top_up(&mut self, amount: f64) {
        self.saved = (self.saved + amount).min(self.target);
    }

    pub fn is_reached(&self) -> bool {
        self.saved >= self.target
    }

    pub fn remaining(&self) -> f64 {
        (self.target - self.saved).max(0.0)
    }

    /// Progress in percent, capped at 100.
    pub fn progress_pct(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.saved / self.target * 100.0).min(100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_up_clamps_to_target() {
        let mut goal = Goal::new("Emergency Fund", 500_000.0, "🎯");
        goal.top_up(450_000.0);
        goal.top_up(100_000.0);
        assert_eq!(goal.saved, 500_000.0);
        assert!(goal.is_reached());
        assert_eq!(goal.remaining(), 0.0);
    }

    #[test]
    fn repeated_top_ups_never_exceed_target() {
        let mut goal = Goal::new("Laptop", 300_000.0, "💻");
        for _ in 0..10 {
            goal.top_up(50_000.0);
            assert!(goal.saved <= goal.target);
        }
        assert_eq!(goal.progress_pct(), 100.0);
    }
}

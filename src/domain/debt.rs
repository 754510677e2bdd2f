use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Money owed to a creditor. `paid` only grows and never exceeds `amount`;
/// a debt with `paid == amount` is cleared, a terminal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub creditor: String,
    pub amount: f64,
    pub paid: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Debt {
    pub fn new(creditor: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            creditor: creditor.into(),
            amount,
            paid: 0.0,
            due_date: None,
            note: None,
        }
    }

    /// Applies a payment, clamping at the full amount. Callers record the
    /// requested payment in the ledger themselves; the clamp only protects
    /// the debt record.
    pub fn apply_payment(&mut self, amount: f64) {
        if amount > 0.0 {
            self.paid = (self.paid + amount).min(self.amount);
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.paid >= self.amount
    }

    pub fn outstanding(&self) -> f64 {
        (self.amount - self.paid).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payments_are_monotone_and_clamped() {
        let mut debt = Debt::new("GTBank Loan", 120_000.0);
        let mut previous = debt.paid;
        for payment in [40_000.0, 40_000.0, 100_000.0, 5_000.0] {
            debt.apply_payment(payment);
            assert!(debt.paid >= previous);
            assert!(debt.paid <= debt.amount);
            previous = debt.paid;
        }
        assert!(debt.is_cleared());
        assert_eq!(debt.outstanding(), 0.0);
    }

    #[test]
    fn non_positive_payment_is_a_no_op() {
        let mut debt = Debt::new("Uncle Emeka", 50_000.0);
        debt.apply_payment(0.0);
        debt.apply_payment(-10.0);
        assert_eq!(debt.paid, 0.0);
    }
}

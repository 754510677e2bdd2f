use serde::{Deserialize, Serialize};

pub const DEFAULT_MONTHLY_INCOME: f64 = 500_000.0;

/// The single user profile, created at onboarding and edited via settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub avatar_icon: String,
    pub monthly_income: f64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar_icon: "😊".into(),
            monthly_income: DEFAULT_MONTHLY_INCOME,
        }
    }
}

//! The fixed set of spending categories transactions and bills are bucketed by.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Spending category. The set is closed; anything unrecognized in persisted
/// data deserializes to [`Category::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Transport,
    Foodstuff,
    Bread,
    Data,
    Debt,
    Feeding,
    Clothing,
    Housing,
    Health,
    Utilities,
    Savings,
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: [Category; 12] = [
        Category::Transport,
        Category::Foodstuff,
        Category::Bread,
        Category::Data,
        Category::Debt,
        Category::Feeding,
        Category::Clothing,
        Category::Housing,
        Category::Health,
        Category::Utilities,
        Category::Savings,
        Category::Other,
    ];

    /// Human-facing label, matching the labels the presentation layer renders.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Transport => "Transportation",
            Category::Foodstuff => "Foodstuff",
            Category::Bread => "Bread",
            Category::Data => "Mobile Data",
            Category::Debt => "Debt Repayment",
            Category::Feeding => "Eating Out",
            Category::Clothing => "Clothing",
            Category::Housing => "Housing/Rent",
            Category::Health => "Health",
            Category::Utilities => "Utilities",
            Category::Savings => "Savings",
            Category::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Transport => "🚌",
            Category::Foodstuff => "🛒",
            Category::Bread => "🍞",
            Category::Data => "📶",
            Category::Debt => "💳",
            Category::Feeding => "🍽️",
            Category::Clothing => "👔",
            Category::Housing => "🏠",
            Category::Health => "💊",
            Category::Utilities => "⚡",
            Category::Savings => "💰",
            Category::Other => "📦",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_lowercase_identifier() {
        let json = serde_json::to_string(&Category::Data).unwrap();
        assert_eq!(json, "\"data\"");
    }

    #[test]
    fn unknown_identifier_falls_back_to_other() {
        let parsed: Category = serde_json::from_str("\"crypto\"").unwrap();
        assert_eq!(parsed, Category::Other);
    }

    #[test]
    fn all_lists_every_variant_once() {
        let mut seen = std::collections::BTreeSet::new();
        for category in Category::ALL {
            assert!(seen.insert(category), "duplicate {category:?}");
        }
        assert_eq!(seen.len(), 12);
    }
}

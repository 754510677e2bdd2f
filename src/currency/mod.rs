//! Display currencies and the static conversion table.
//!
//! Canonical amounts are stored in the base currency (NGN). Conversion is a
//! pure multiply-and-format against fixed rates; stored data never changes
//! when the display currency does.

use serde::{Deserialize, Serialize};

/// Supported display currencies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Ngn,
    Usd,
    Gbp,
    Eur,
    Ghs,
    Kes,
    Zar,
    Xof,
}

impl Currency {
    pub const ALL: [Currency; 8] = [
        Currency::Ngn,
        Currency::Usd,
        Currency::Gbp,
        Currency::Eur,
        Currency::Ghs,
        Currency::Kes,
        Currency::Zar,
        Currency::Xof,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Ngn => "NGN",
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Ghs => "GHS",
            Currency::Kes => "KES",
            Currency::Zar => "ZAR",
            Currency::Xof => "XOF",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::Ngn => "₦",
            Currency::Usd => "$",
            Currency::Gbp => "£",
            Currency::Eur => "€",
            Currency::Ghs => "GH₵",
            Currency::Kes => "KSh",
            Currency::Zar => "R",
            Currency::Xof => "CFA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Currency::Ngn => "Nigerian Naira",
            Currency::Usd => "US Dollar",
            Currency::Gbp => "British Pound",
            Currency::Eur => "Euro",
            Currency::Ghs => "Ghanaian Cedi",
            Currency::Kes => "Kenyan Shilling",
            Currency::Zar => "South African Rand",
            Currency::Xof => "West African CFA",
        }
    }

    /// Units of this currency per unit of the base currency.
    pub fn rate(&self) -> f64 {
        match self {
            Currency::Ngn => 1.0,
            Currency::Usd => 0.00063,
            Currency::Gbp => 0.00050,
            Currency::Eur => 0.00058,
            Currency::Ghs => 0.0096,
            Currency::Kes => 0.082,
            Currency::Zar => 0.012,
            Currency::Xof => 0.38,
        }
    }

    /// Converts a canonical amount into this currency's units.
    pub fn convert(&self, canonical: f64) -> f64 {
        canonical * self.rate()
    }
}

/// Formats a canonical amount for display in `currency`.
///
/// Millions render as `₦1.25M`, thousands as `₦42.0K`, smaller values as a
/// grouped whole number.
pub fn format_amount(canonical: f64, currency: Currency) -> String {
    let value = currency.convert(canonical);
    let symbol = currency.symbol();
    let abs = value.abs();
    if abs >= 1_000_000.0 {
        format!("{}{:.2}M", symbol, value / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{:.1}K", symbol, value / 1_000.0)
    } else {
        format!("{}{}", symbol, group_digits(value.round() as i64))
    }
}

fn group_digits(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
        count += 1;
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_currency_formats_by_magnitude() {
        assert_eq!(format_amount(1_250_000.0, Currency::Ngn), "₦1.25M");
        assert_eq!(format_amount(42_000.0, Currency::Ngn), "₦42.0K");
        assert_eq!(format_amount(950.0, Currency::Ngn), "₦950");
        assert_eq!(format_amount(0.0, Currency::Ngn), "₦0");
    }

    #[test]
    fn conversion_applies_the_static_rate() {
        // 500k NGN at 0.00063 is 315 USD, below the thousands threshold.
        assert_eq!(format_amount(500_000.0, Currency::Usd), "$315");
        assert_eq!(format_amount(500_000.0, Currency::Xof), "CFA190.0K");
    }

    #[test]
    fn negative_amounts_keep_their_sign() {
        assert_eq!(format_amount(-42_000.0, Currency::Ngn), "₦-42.0K");
        assert_eq!(format_amount(-950.0, Currency::Ngn), "₦-950");
    }

    #[test]
    fn codes_round_trip_through_serde() {
        let json = serde_json::to_string(&Currency::Ghs).unwrap();
        assert_eq!(json, "\"GHS\"");
        let parsed: Currency = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Currency::Ghs);
    }
}

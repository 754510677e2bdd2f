use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A calendar (month, year) pair used to bucket transactions and bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Period {
    pub year: i32,
    /// 1 through 12.
    pub month: u32,
}

impl Period {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Storage key for per-period bill state, e.g. `"2025-2"` for Feb 2025.
    pub fn key(&self) -> String {
        format!("{}-{}", self.year, self.month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }

    pub fn prev(&self) -> Self {
        self.back(1)
    }

    /// The period `months` calendar months before this one.
    pub fn back(&self, months: u32) -> Self {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) - months as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// Abbreviated month name for chart axes.
    pub fn label(&self) -> &'static str {
        match self.month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            _ => "Dec",
        }
    }
}

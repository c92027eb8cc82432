use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One raw spend record as parsed from the host payload.
///
/// `amount` is in minor currency units, `timestamp` in Unix epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendRecord {
    pub id: u64,
    pub name: String,
    pub amount: i64,
    pub category: String,
    #[serde(alias = "time")]
    pub timestamp: i64,
}

/// One raw spend sample fed into the drill-down line chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendPoint {
    pub amount: i64,
    pub timestamp: i64,
}

impl SpendPoint {
    #[must_use]
    pub fn new(amount: i64, timestamp: i64) -> Self {
        Self { amount, timestamp }
    }
}

/// Summed spending for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: i64,
}

impl CategoryTotal {
    #[must_use]
    pub fn new(category: impl Into<String>, amount: i64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Local calendar day identifier used to bucket timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DayKey {
    pub year: i32,
    pub ordinal: u32,
}

impl DayKey {
    /// Derives the day key for an epoch-seconds timestamp in the local time zone.
    #[must_use]
    pub fn from_epoch_seconds(timestamp: i64) -> Self {
        let moment = DateTime::from_timestamp(timestamp, 0)
            .unwrap_or_default()
            .with_timezone(&Local);
        Self {
            year: moment.year(),
            ordinal: moment.ordinal(),
        }
    }

    /// ISO date label (`YYYY-MM-DD`) for axis rendering.
    #[must_use]
    pub fn label(self) -> String {
        NaiveDate::from_yo_opt(self.year, self.ordinal)
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("{:04}-{:03}", self.year, self.ordinal))
    }
}

/// Day-bucketed spending, one entry per distinct local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoint {
    pub amount: i64,
    pub day: DayKey,
}

impl DailyPoint {
    #[must_use]
    pub fn new(amount: i64, day: DayKey) -> Self {
        Self { amount, day }
    }
}

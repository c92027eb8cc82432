//! Pure aggregation of raw spend records into chart-ready series.

use indexmap::IndexMap;

use crate::core::line::LineDataset;
use crate::core::types::{CategoryTotal, DailyPoint, DayKey, SpendPoint, SpendRecord};

/// Groups records by category, summing amounts.
///
/// Output order is the order of each category's first appearance in `records`.
#[must_use]
pub fn totals_by_category(records: &[SpendRecord]) -> Vec<CategoryTotal> {
    let mut totals: IndexMap<&str, i64> = IndexMap::new();
    for record in records {
        *totals.entry(record.category.as_str()).or_insert(0) += record.amount;
    }
    totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal::new(category, amount))
        .collect()
}

/// Buckets spend samples by local calendar day, summing amounts within a day.
///
/// A single sample passes through unchanged. Output order is the order of each
/// day's first occurrence in the input, not calendar order.
#[must_use]
pub fn bucket_by_day(points: &[SpendPoint]) -> Vec<DailyPoint> {
    if points.len() <= 1 {
        return points
            .iter()
            .map(|point| DailyPoint::new(point.amount, DayKey::from_epoch_seconds(point.timestamp)))
            .collect();
    }

    let mut buckets: IndexMap<DayKey, i64> = IndexMap::new();
    for point in points {
        *buckets
            .entry(DayKey::from_epoch_seconds(point.timestamp))
            .or_insert(0) += point.amount;
    }
    buckets
        .into_iter()
        .map(|(day, amount)| DailyPoint::new(amount, day))
        .collect()
}

/// Extracts the raw samples of one category, in record order.
#[must_use]
pub fn category_points(records: &[SpendRecord], category: &str) -> Vec<SpendPoint> {
    records
        .iter()
        .filter(|record| record.category == category)
        .map(|record| SpendPoint::new(record.amount, record.timestamp))
        .collect()
}

/// Builds the drill-down dataset for one category: filter, then day-bucket.
#[must_use]
pub fn daily_spend(records: &[SpendRecord], category: &str) -> LineDataset {
    LineDataset {
        category: category.to_owned(),
        points: bucket_by_day(&category_points(records, category)),
    }
}

//! Totals, averages, and time span over expanded events.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use super::result::{ForecastResult, TimestampEntry};
use crate::ledger::time_interval::month_difference;

#[derive(Debug, Clone, Copy, Default)]
pub struct StatisticsOptions {
    /// Leave out events whose category was imported from a bank feed.
    pub ignore_imported: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total: f64,
    pub daily_average: f64,
    pub weekly_average: f64,
    pub monthly_average: f64,
    pub quarterly_average: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub days: i64,
    pub months: i64,
    pub years: i64,
}

/// Computes summary statistics for `result`.
///
/// Span counts are inclusive, so a single day yields `days = months = years = 1`.
pub fn calculate_statistics(result: &ForecastResult, options: StatisticsOptions) -> Statistics {
    let mut events: Vec<&TimestampEntry> = result
        .timestamps
        .iter()
        .filter(|event| !(options.ignore_imported && event.category.imported))
        .collect();

    let total: f64 = events.iter().map(|event| event.amount).sum();
    if events.is_empty() {
        return Statistics::default();
    }

    events.sort_by_key(|event| event.timestamp);
    let (start, end) = match (events.first(), events.last()) {
        (Some(first), Some(last)) => (first.timestamp, last.timestamp),
        _ => return Statistics::default(),
    };

    let days = (end - start).num_days() + 1;
    let months = month_difference(start, end) + 1;
    let years = (end.year() - start.year()) as i64 + 1;

    Statistics {
        total,
        daily_average: total / days as f64,
        weekly_average: total / (days as f64 / 7.0),
        monthly_average: total / months as f64,
        quarterly_average: total / (months as f64 / 3.0),
        start_date: Some(start),
        end_date: Some(end),
        days,
        months,
        years,
    }
}

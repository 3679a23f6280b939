//! Calendar-month rollups of expanded events.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, warn};

use super::{
    result::ForecastResult,
    statistics::{calculate_statistics, StatisticsOptions},
};
use crate::{
    errors::{Diagnostic, DiagnosticUnit, SolverError},
    ledger::{time_interval, Category},
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorizedResult {
    pub category: Category,
    pub balance: f64,
}

/// Category balances for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyResult {
    /// First day of the month.
    pub date: NaiveDate,
    pub categorized_results: Vec<CategorizedResult>,
}

impl MonthlyResult {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            categorized_results: Vec::new(),
        }
    }

    /// Short label such as `Jan 2024`.
    pub fn label(&self) -> String {
        self.date.format("%b %Y").to_string()
    }

    /// Sum of every category balance in the month.
    pub fn net(&self) -> f64 {
        self.categorized_results.iter().map(|item| item.balance).sum()
    }

    pub fn balance_for(&self, category: &Category) -> Option<f64> {
        let key = category.key();
        self.categorized_results
            .iter()
            .find(|item| item.category.key() == key)
            .map(|item| item.balance)
    }

    fn add(&mut self, category: &Category, amount: f64) {
        let key = category.key();
        match self
            .categorized_results
            .iter_mut()
            .find(|item| item.category.key() == key)
        {
            Some(bucket) => bucket.balance += amount,
            None => self.categorized_results.push(CategorizedResult {
                category: category.clone(),
                balance: amount,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct MonthlyReport {
    pub months: Vec<MonthlyResult>,
    /// Months that could not be built, or the reason no months were built.
    pub diagnostics: Vec<Diagnostic>,
}

/// Buckets events into a contiguous, ascending run of calendar months from
/// the month of the earliest event through the month of the latest one.
///
/// Months without activity are present with no categorized results. When the
/// events do not span at least two distinct days the report holds no months
/// and a [`SolverError::EmptyOrInvertedRange`] diagnostic.
pub fn accumulate_monthly(result: &ForecastResult) -> MonthlyReport {
    let mut report = MonthlyReport::default();
    let stats = calculate_statistics(result, StatisticsOptions::default());

    let (start, end) = match (stats.start_date, stats.end_date) {
        (Some(start), Some(end)) if !result.is_empty() && start < end => (start, end),
        _ => {
            debug!(events = result.timestamps.len(), "No monthly range to accumulate");
            report.diagnostics.push(Diagnostic::new(
                DiagnosticUnit::Range,
                SolverError::EmptyOrInvertedRange,
            ));
            return report;
        }
    };

    let mut current = time_interval::month_start(start);
    while current <= end {
        match accumulate_month(result, current) {
            Ok((month, next)) => {
                report.months.push(month);
                current = next;
            }
            Err(error) => {
                warn!(month = %current, %error, "Failed to accumulate month");
                report
                    .diagnostics
                    .push(Diagnostic::new(DiagnosticUnit::Month(current), error));
                break;
            }
        }
    }

    report.months.sort_by_key(|month| month.date);
    debug!(months = report.months.len(), "Accumulated monthly results");
    report
}

/// Running net balance at the end of each month.
pub fn cumulative_balances(months: &[MonthlyResult]) -> Vec<(NaiveDate, f64)> {
    months
        .iter()
        .scan(0.0, |running, month| {
            *running += month.net();
            Some((month.date, *running))
        })
        .collect()
}

fn accumulate_month(
    result: &ForecastResult,
    month_start: NaiveDate,
) -> Result<(MonthlyResult, NaiveDate), SolverError> {
    let next = time_interval::shift_month(month_start, 1)
        .ok_or(SolverError::InvalidTimestamp(month_start))?;
    let mut month = MonthlyResult::new(month_start);
    for event in result
        .timestamps
        .iter()
        .filter(|event| event.timestamp >= month_start && event.timestamp < next)
    {
        month.add(&event.category, event.amount);
    }
    Ok((month, next))
}

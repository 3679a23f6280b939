//! Runs the whole projection pipeline in one call.

use serde::Serialize;
use tracing::info;

use super::{
    expand::solve,
    monthly::{accumulate_monthly, cumulative_balances, MonthlyResult},
    result::ForecastResult,
    statistics::{calculate_statistics, Statistics},
};
use crate::{config::SolverConfig, errors::Diagnostic, ledger::Entry};

/// Everything a presentation layer needs for one forecast.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub result: ForecastResult,
    pub months: Vec<MonthlyResult>,
    pub running_balance: Vec<(chrono::NaiveDate, f64)>,
    pub statistics: Statistics,
    /// Diagnostics from expansion followed by those from monthly accumulation.
    pub diagnostics: Vec<Diagnostic>,
}

pub struct ForecastService;

impl ForecastService {
    /// Expands `entries`, rolls them up per month, and summarises them using
    /// the exclusions and filters from `config`.
    pub fn run(entries: &[Entry], config: &SolverConfig) -> ForecastReport {
        let result = solve(entries, &config.solve_options());
        let monthly = accumulate_monthly(&result);
        let statistics = calculate_statistics(&result, config.statistics_options());
        let running_balance = cumulative_balances(&monthly.months);
        let diagnostics: Vec<Diagnostic> = result
            .diagnostics
            .iter()
            .chain(monthly.diagnostics.iter())
            .cloned()
            .collect();

        info!(
            base = config.base_currency.as_str(),
            events = result.timestamps.len(),
            months = monthly.months.len(),
            diagnostics = diagnostics.len(),
            "Forecast computed"
        );

        ForecastReport {
            result,
            months: monthly.months,
            running_balance,
            statistics,
            diagnostics,
        }
    }
}

//! Projection of entries into events, monthly rollups, and statistics.

pub mod expand;
pub mod forecast;
pub mod monthly;
pub mod result;
pub mod statistics;

pub use expand::{solve, SolveOptions};
pub use forecast::{ForecastReport, ForecastService};
pub use monthly::{
    accumulate_monthly, cumulative_balances, CategorizedResult, MonthlyReport, MonthlyResult,
};
pub use result::{CategorySet, ForecastResult, TimestampEntry};
pub use statistics::{calculate_statistics, Statistics, StatisticsOptions};

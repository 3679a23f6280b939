//! Recurrence expansion: turns entries into dated, base-currency events.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::result::{ForecastResult, TimestampEntry};
use crate::{
    errors::{Diagnostic, DiagnosticUnit, SolverError},
    ledger::{CategoryKey, Entry, Interval},
};

#[derive(Debug, Clone, Default)]
pub struct SolveOptions {
    /// Categories whose entries are dropped before expansion.
    pub excluded_categories: HashSet<CategoryKey>,
}

impl SolveOptions {
    pub fn excluding<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = CategoryKey>,
    {
        Self {
            excluded_categories: keys.into_iter().collect(),
        }
    }

    pub fn is_excluded(&self, key: &CategoryKey) -> bool {
        self.excluded_categories.contains(key)
    }
}

/// Expands every entry into its occurrences inside the entry's time range.
///
/// Output is grouped by entry in input order and is chronological within each
/// entry. An entry that fails part way keeps the events emitted before the
/// failure; the failure is logged and recorded in `diagnostics`.
pub fn solve(entries: &[Entry], options: &SolveOptions) -> ForecastResult {
    let mut result = ForecastResult::default();

    for (index, entry) in entries.iter().enumerate() {
        if entry.interval == Interval::Never {
            continue;
        }
        if options.is_excluded(&entry.category.key()) {
            continue;
        }
        if let Err(error) = expand_entry(entry, &mut result) {
            warn!(
                entry = %entry.description,
                %error,
                "Failed to process entry"
            );
            result.diagnostics.push(Diagnostic::new(
                DiagnosticUnit::Entry {
                    index,
                    description: entry.description.clone(),
                },
                error,
            ));
        }
    }

    debug!(
        entries = entries.len(),
        events = result.timestamps.len(),
        categories = result.categories.len(),
        skipped = result.diagnostics.len(),
        "Expanded forecast entries"
    );
    result
}

fn expand_entry(entry: &Entry, result: &mut ForecastResult) -> Result<(), SolverError> {
    if !entry.currency.is_usable() {
        return Err(SolverError::InvalidRate {
            code: entry.currency.code.as_str().to_string(),
            rate: entry.currency.rate,
        });
    }

    let amount = entry.base_amount();
    let step = entry.occurrence_step();
    let mut current = entry.time_range.start;

    while current <= entry.time_range.end {
        result.push(TimestampEntry {
            timestamp: current,
            amount,
            category: entry.category.clone(),
        });
        let Some(step) = step else {
            break;
        };
        current = step
            .next_date(current)
            .ok_or(SolverError::RecurrenceStepFailure(current))?;
    }

    Ok(())
}

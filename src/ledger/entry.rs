use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Category, Interval, Step};
use crate::currency::Currency;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntryKind::Income => "Income",
            EntryKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

/// Inclusive window of calendar dates an entry is active for.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering a single day.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// A planned recurring or one-off cash movement.
///
/// The sign of `amount` carries direction; `kind` is informational.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub kind: EntryKind,
    pub description: String,
    pub amount: f64,
    pub currency: Currency,
    pub interval: Interval,
    pub category: Category,
    pub time_range: TimeRange,
}

impl Entry {
    pub fn new(
        kind: EntryKind,
        description: impl Into<String>,
        amount: f64,
        currency: Currency,
        interval: Interval,
        category: Category,
        time_range: TimeRange,
    ) -> Self {
        Self {
            kind,
            description: description.into(),
            amount,
            currency,
            interval,
            category,
            time_range,
        }
    }

    /// Distance between two occurrences, `None` for single-shot cadences.
    pub fn occurrence_step(&self) -> Option<Step> {
        self.interval.step()
    }

    /// The amount converted into the base currency.
    pub fn base_amount(&self) -> f64 {
        self.currency.to_base(self.amount)
    }
}

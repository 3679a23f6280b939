use chrono::NaiveDate;
use flowcast_core::{
    currency::Currency,
    ledger::{Category, Entry, EntryKind, Interval, TimeRange},
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Builds a base-currency entry for the given cadence and inclusive window.
/// Negative amounts are booked as expenses.
pub fn entry(
    description: &str,
    amount: f64,
    interval: Interval,
    category: Category,
    start: NaiveDate,
    end: NaiveDate,
) -> Entry {
    let kind = if amount < 0.0 {
        EntryKind::Expense
    } else {
        EntryKind::Income
    };
    Entry::new(
        kind,
        description,
        amount,
        Currency::base("DKK"),
        interval,
        category,
        TimeRange::new(start, end),
    )
}

pub fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-6
}

use std::fmt;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Recurrence cadence of an entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Interval {
    Never,
    Once,
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannually,
    Yearly,
    /// Any cadence this crate does not know about. Expansion stops after the
    /// first occurrence.
    #[serde(other)]
    Unrecognized,
}

/// How far a cursor moves between two occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Days(i64),
    Months(i32),
}

impl Interval {
    /// Returns the distance between occurrences, or `None` when the cadence
    /// produces at most a single occurrence.
    pub fn step(self) -> Option<Step> {
        match self {
            Interval::Daily => Some(Step::Days(1)),
            Interval::Weekly => Some(Step::Days(7)),
            Interval::Biweekly => Some(Step::Days(14)),
            Interval::Monthly => Some(Step::Months(1)),
            Interval::Quarterly => Some(Step::Months(3)),
            Interval::Semiannually => Some(Step::Months(6)),
            Interval::Yearly => Some(Step::Months(12)),
            Interval::Never | Interval::Once | Interval::Unrecognized => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interval::Never => "Never",
            Interval::Once => "Once",
            Interval::Daily => "Daily",
            Interval::Weekly => "Weekly",
            Interval::Biweekly => "Biweekly",
            Interval::Monthly => "Monthly",
            Interval::Quarterly => "Quarterly",
            Interval::Semiannually => "Semiannually",
            Interval::Yearly => "Yearly",
            Interval::Unrecognized => "Unrecognized",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Step {
    /// Advances `from` by one step. Month based steps clamp the day to the
    /// last day of the target month. Returns `None` on calendar overflow.
    pub fn next_date(self, from: NaiveDate) -> Option<NaiveDate> {
        match self {
            Step::Days(days) => from.checked_add_signed(Duration::days(days)),
            Step::Months(months) => shift_month(from, months),
        }
    }
}

/// Moves `date` by `months` calendar months, clamping the day of month.
pub fn shift_month(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let index = date.year().checked_mul(12)? + date.month0() as i32;
    let target = index.checked_add(months)?;
    let year = target.div_euclid(12);
    let month = target.rem_euclid(12) as u32 + 1;
    let day = date.day().min(days_in_month(year, month)?);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of whole calendar months between the months of `from` and `to`.
pub fn month_difference(from: NaiveDate, to: NaiveDate) -> i64 {
    let from_idx = from.year() as i64 * 12 + from.month0() as i64;
    let to_idx = to.year() as i64 * 12 + to.month0() as i64;
    to_idx - from_idx
}

pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if NaiveDate::from_ymd_opt(year, 2, 29).is_some() => Some(29),
        2 => Some(28),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_steps_clamp_to_month_end() {
        assert_eq!(shift_month(date(2023, 1, 31), 1), Some(date(2023, 2, 28)));
        assert_eq!(shift_month(date(2024, 1, 31), 1), Some(date(2024, 2, 29)));
        assert_eq!(shift_month(date(2024, 8, 31), 3), Some(date(2024, 11, 30)));
        assert_eq!(shift_month(date(2024, 12, 15), 1), Some(date(2025, 1, 15)));
    }

    #[test]
    fn yearly_step_from_leap_day() {
        let step = Interval::Yearly.step().unwrap();
        assert_eq!(step.next_date(date(2024, 2, 29)), Some(date(2025, 2, 28)));
        assert_eq!(step.next_date(date(2027, 2, 28)), Some(date(2028, 2, 28)));
    }

    #[test]
    fn negative_shift_crosses_year() {
        assert_eq!(shift_month(date(2024, 1, 31), -2), Some(date(2023, 11, 30)));
    }

    #[test]
    fn overflow_reports_none() {
        let step = Interval::Daily.step().unwrap();
        assert_eq!(step.next_date(NaiveDate::MAX), None);
        assert_eq!(shift_month(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn single_shot_intervals_have_no_step() {
        assert_eq!(Interval::Once.step(), None);
        assert_eq!(Interval::Never.step(), None);
        assert_eq!(Interval::Unrecognized.step(), None);
        assert_eq!(Interval::Biweekly.step(), Some(Step::Days(14)));
    }

    #[test]
    fn unknown_interval_deserializes_as_unrecognized() {
        let parsed: Interval = serde_json::from_str("\"fortnightly\"").unwrap();
        assert_eq!(parsed, Interval::Unrecognized);
        let parsed: Interval = serde_json::from_str("\"semiannually\"").unwrap();
        assert_eq!(parsed, Interval::Semiannually);
    }

    #[test]
    fn february_lengths_follow_leap_rules() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2100, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
        assert_eq!(days_in_month(2023, 13), None);
    }

    #[test]
    fn month_difference_spans_years() {
        assert_eq!(month_difference(date(2023, 11, 30), date(2024, 2, 1)), 3);
        assert_eq!(month_difference(date(2024, 2, 1), date(2024, 2, 29)), 0);
    }
}

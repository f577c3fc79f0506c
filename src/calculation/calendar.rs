//! Calendar arithmetic for month spans.
//!
//! This module provides the date helpers the proration engine is built on:
//! day counts within a month, month boundaries, and whole-month counting
//! between two dates. All dates are plain calendar values (Gregorian,
//! proleptic, no time-of-day, no timezone).

use chrono::{Datelike, NaiveDate};

/// Returns the number of calendar days in the month containing `date`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::days_in_month;
/// use chrono::NaiveDate;
///
/// let leap_feb = NaiveDate::from_ymd_opt(2020, 2, 10).unwrap();
/// assert_eq!(days_in_month(leap_feb), 29);
/// ```
pub fn days_in_month(date: NaiveDate) -> u32 {
    month_end(date).day()
}

/// Returns the inclusive day count from `start` to `end` (`end - start + 1`).
///
/// Precondition: `start <= end`.
pub fn day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    debug_assert!(start <= end, "day_count called with start after end");
    (end - start).num_days() + 1
}

/// Returns the first calendar day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("the first day of a month always exists")
}

/// Returns the last calendar day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("the first day of a month always exists")
        .pred_opt()
        .expect("the day before a month start always exists")
}

/// Returns true if `a` and `b` fall in the same calendar month.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Counts the calendar months lying entirely between `start`'s month and
/// `end`'s month, exclusive of both.
///
/// Dates in the same or in adjacent months yield 0.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::whole_months_between;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
/// let cutoff = NaiveDate::from_ymd_opt(2020, 7, 31).unwrap();
/// // April, May and June lie entirely between March and July.
/// assert_eq!(whole_months_between(hire, cutoff), 3);
/// ```
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let months = month_index(end) - month_index(start);
    (months - 1).max(0)
}

/// Returns the inclusive list of `(year, month)` pairs from `start`'s month
/// through `end`'s month, in calendar order.
///
/// Used by the month-by-month reporting loops upstream. Returns an empty
/// list if `end`'s month precedes `start`'s month.
pub fn month_sequence(start: NaiveDate, end: NaiveDate) -> Vec<(i32, u32)> {
    let mut months = Vec::new();
    let mut current = month_index(start);
    let last = month_index(end);
    while current <= last {
        let year = (current - 1).div_euclid(12);
        let month = (current - 1).rem_euclid(12) + 1;
        months.push((year as i32, month as u32));
        current += 1;
    }
    months
}

/// Maps a date to a linear month index so month distances are plain
/// subtraction, also across year boundaries.
fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month())
}

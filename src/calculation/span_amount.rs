//! Span pricing.
//!
//! This module prices an arbitrary inclusive date range against one
//! constant annual rate by slicing it into a leading partial month, a run
//! of whole calendar months, and a trailing partial month.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::calendar::{month_end, month_start, same_month, whole_months_between};
use super::monthly_amount::{full_months_amount, partial_month_amount};

/// Returns the amount disbursed for the inclusive range `[start, end]` at a
/// constant annual rate.
///
/// A range within one month is a single partial-month amount. A longer
/// range is the leading partial month, plus the whole months lying strictly
/// between the two boundary months, plus the trailing partial month. A
/// boundary month that happens to be fully covered prices the same as a
/// whole month, so no special casing is needed for ranges that begin or end
/// exactly on month boundaries.
///
/// Precondition: `start <= end`. `None` for the salary yields zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::span_amount;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // Six whole months at a monthly rate of 2,250,000.
/// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 6, 30).unwrap();
/// assert_eq!(span_amount(Some(2700), start, end), Decimal::from(13_500_000));
/// ```
pub fn span_amount(annual_salary: Option<u32>, start: NaiveDate, end: NaiveDate) -> Decimal {
    debug_assert!(start <= end, "span_amount called with start after end");
    if same_month(start, end) {
        return partial_month_amount(annual_salary, start, end);
    }
    let leading = partial_month_amount(annual_salary, start, month_end(start));
    let middle = full_months_amount(annual_salary, whole_months_between(start, end));
    let trailing = partial_month_amount(annual_salary, month_start(end), end);
    leading + middle + trailing
}

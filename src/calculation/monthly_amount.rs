//! Monthly salary amounts.
//!
//! This module turns an annual salary figure into monthly money: the
//! rounded monthly rate, the prorated amount for a day range within a
//! single month, and the amount for a number of whole months.
//!
//! Annual salary figures are stored integers in units of 10,000 of the
//! local currency. Every amount is rounded half-away-from-zero to whole
//! currency units at each step; reproducing the legacy figures exactly
//! depends on rounding at this granularity.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::calendar::{day_count, days_in_month, same_month};

/// Multiplier from the stored salary integer to the annual amount.
const SALARY_UNIT: u32 = 10_000;

/// Rounds an amount to whole currency units, half away from zero.
pub(crate) fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the rounded monthly rate for an annual salary figure.
///
/// `annual_salary` is the stored integer (units of 10,000); the monthly
/// rate is `round(annual_salary * 10000 / 12)`. `None` means no salary on
/// record for the year and yields zero, which is not an error.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::monthly_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(monthly_rate(Some(2400)), Decimal::from(2_000_000));
/// assert_eq!(monthly_rate(None), Decimal::ZERO);
/// ```
pub fn monthly_rate(annual_salary: Option<u32>) -> Decimal {
    let Some(units) = annual_salary else {
        return Decimal::ZERO;
    };
    round_currency(Decimal::from(units) * Decimal::from(SALARY_UNIT) / Decimal::from(12u32))
}

/// Returns the prorated amount for a day range within a single month.
///
/// `amount = round(monthly_rate / days_in_month * day_count(range_start, range_end))`.
///
/// Preconditions: `range_start` and `range_end` fall in the same calendar
/// month and `range_start <= range_end`.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::partial_month_amount;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// // 17 days of March 2020 at an annual rate of 2400 (monthly 2,000,000).
/// let start = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
/// let end = NaiveDate::from_ymd_opt(2020, 3, 31).unwrap();
/// assert_eq!(
///     partial_month_amount(Some(2400), start, end),
///     Decimal::from(1_096_774)
/// );
/// ```
pub fn partial_month_amount(
    annual_salary: Option<u32>,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> Decimal {
    debug_assert!(
        same_month(range_start, range_end),
        "partial month range crosses a month boundary"
    );
    let monthly = monthly_rate(annual_salary);
    if monthly.is_zero() {
        return Decimal::ZERO;
    }
    let days = Decimal::from(day_count(range_start, range_end));
    let month_days = Decimal::from(days_in_month(range_start));
    round_currency(monthly / month_days * days)
}

/// Returns the amount for a number of whole calendar months.
///
/// A count of 0 yields zero; the count is never negative (callers clamp).
pub fn full_months_amount(annual_salary: Option<u32>, whole_months: i64) -> Decimal {
    debug_assert!(whole_months >= 0, "whole month count must not be negative");
    monthly_rate(annual_salary) * Decimal::from(whole_months)
}

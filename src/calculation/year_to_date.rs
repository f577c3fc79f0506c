//! Year-to-date salary.
//!
//! The top-level proration entry point: resolves the employment timeline
//! and prices each rate span.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Artist, PayrollQuery};

use super::span_amount::span_amount;
use super::timeline::resolve_timeline;

/// Returns the salary actually disbursed for the artist within the query's
/// year, accumulated from January 1st through the query's cutoff date.
///
/// An artist with no hire date, an empty employment window, or no salary
/// on record for the year yields zero.
///
/// # Errors
///
/// Propagates the query's cutoff errors ([`crate::error::EngineError::InvalidMonth`],
/// [`crate::error::EngineError::RequestedYearInFuture`]) and the timeline
/// errors ([`crate::error::EngineError::InvalidHireYear`],
/// [`crate::error::EngineError::TerminatedBeforeRequestedYear`]).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::year_to_date_salary;
/// use payroll_engine::models::{Artist, PayrollQuery};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let artist = Artist {
///     id: "1001".to_string(),
///     name: "kim.west".to_string(),
///     dept: "VFX".to_string(),
///     team: "comp".to_string(),
///     hire_date: Some(NaiveDate::from_ymd_opt(2020, 3, 15).unwrap()),
///     termination_date: None,
///     annual_salary_by_year: BTreeMap::from([(2020, 2400)]),
///     salary_revision: None,
/// };
/// let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
/// assert_eq!(
///     year_to_date_salary(&artist, &query).unwrap(),
///     Decimal::from(1_096_774)
/// );
/// ```
pub fn year_to_date_salary(artist: &Artist, query: &PayrollQuery) -> EngineResult<Decimal> {
    let cutoff = query.cutoff_date()?;
    let Some(window) = resolve_timeline(artist, query.year(), cutoff)? else {
        return Ok(Decimal::ZERO);
    };
    Ok(window
        .spans
        .iter()
        .map(|span| span_amount(span.annual_salary, span.start, span.end))
        .sum())
}

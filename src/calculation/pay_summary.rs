//! Combined pay figures.
//!
//! Reporting pages display the year-to-date salary, the working-day count,
//! and the hourly wage together for every artist row; this module derives
//! the triple in one call.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Artist, PayrollQuery};

use super::hourly_wage::hourly_wage;
use super::working_days::working_days;
use super::year_to_date::year_to_date_salary;

/// The three derived pay figures for one artist and query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaySummary {
    /// Salary disbursed from January 1st through the cutoff date.
    pub year_to_date_salary: Decimal,
    /// Inclusive day count of the employment window.
    pub working_days: i64,
    /// Blended hourly wage, 0 when no days were worked.
    pub hourly_wage: Decimal,
}

/// Computes the artist's pay figures for the query in one call.
///
/// # Errors
///
/// Same error conditions as [`super::year_to_date_salary`].
pub fn pay_summary(artist: &Artist, query: &PayrollQuery) -> EngineResult<PaySummary> {
    Ok(PaySummary {
        year_to_date_salary: year_to_date_salary(artist, query)?,
        working_days: working_days(artist, query)?,
        hourly_wage: hourly_wage(artist, query)?,
    })
}

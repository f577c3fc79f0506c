//! Blended hourly wage.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Artist, PayrollQuery};

use super::monthly_amount::round_currency;
use super::working_days::working_days;
use super::year_to_date::year_to_date_salary;

/// Paid hours per working day.
const HOURS_PER_DAY: u32 = 8;

/// Returns the artist's blended hourly wage for the query's year:
/// `round((year_to_date_salary / working_days) / 8)`.
///
/// Both the numerator and the denominator are cumulative from January 1st,
/// so the figure is a year-to-date blend, not a single-month rate; it
/// drifts slightly from month to month even without a salary revision.
/// Yields 0 when the working-day count is 0.
///
/// # Errors
///
/// Same error conditions as [`super::year_to_date_salary`].
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::hourly_wage;
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
/// assert_eq!(hourly_wage(&artist, &query).unwrap(), Decimal::from(8065));
/// ```
pub fn hourly_wage(artist: &Artist, query: &PayrollQuery) -> EngineResult<Decimal> {
    let salary = year_to_date_salary(artist, query)?;
    let days = working_days(artist, query)?;
    if days == 0 {
        return Ok(Decimal::ZERO);
    }
    Ok(round_currency(
        salary / Decimal::from(days) / Decimal::from(HOURS_PER_DAY),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_test_artist(hire_date: Option<NaiveDate>) -> Artist {
        Artist {
            id: "1001".to_string(),
            name: "kim.west".to_string(),
            dept: "VFX".to_string(),
            team: "comp".to_string(),
            hire_date,
            termination_date: None,
            annual_salary_by_year: BTreeMap::from([(2020, 2400)]),
            salary_revision: None,
        }
    }

    /// HW-001: hired mid-month, queried for the hire month.
    #[test]
    fn test_mid_month_hire_wage() {
        let artist = create_test_artist(Some(date(2020, 3, 15)));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        // round((1,096,774 / 17) / 8)
        assert_eq!(hourly_wage(&artist, &query).unwrap(), Decimal::from(8065));
    }

    #[test]
    fn test_no_hire_date_wage_is_zero() {
        let artist = create_test_artist(None);
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        assert_eq!(hourly_wage(&artist, &query).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_hired_after_cutoff_wage_is_zero() {
        let artist = create_test_artist(Some(date(2020, 11, 5)));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        assert_eq!(hourly_wage(&artist, &query).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_wage_drifts_across_months_without_a_raise() {
        // Proration of the partial hire month blends into the average, so
        // the wage is not constant across cutoff months.
        let artist = create_test_artist(Some(date(2020, 3, 15)));
        let march = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        let april = PayrollQuery::MonthEnd { year: 2020, month: 4 };
        let march_wage = hourly_wage(&artist, &march).unwrap();
        let april_wage = hourly_wage(&artist, &april).unwrap();
        assert_ne!(march_wage, april_wage);
    }

    #[test]
    fn test_full_year_wage() {
        let artist = create_test_artist(Some(date(2018, 6, 1)));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 12 };
        // round((24,000,000 / 366) / 8) = round(8,196.72...)
        assert_eq!(hourly_wage(&artist, &query).unwrap(), Decimal::from(8197));
    }

    #[test]
    fn test_error_propagates() {
        let artist = create_test_artist(Some(date(2021, 1, 10)));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        assert!(hourly_wage(&artist, &query).is_err());
    }
}

//! Payroll query model.
//!
//! This module defines the [`PayrollQuery`] type, the tagged cutoff policy
//! that tells the engine how far into the requested year a computation
//! should accumulate.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The cutoff policy for a proration query.
///
/// Every computation accumulates from January 1st of the requested year up
/// to a cutoff date. Two policies exist in the system:
///
/// - [`PayrollQuery::MonthEnd`] accumulates through the last day of a
///   specific month, used when recomputing a month's labor cost.
/// - [`PayrollQuery::AsOf`] accumulates through today for the current year
///   and through December 31st for past years, used by the annual summary
///   report. `today` is passed explicitly so the engine stays a pure
///   function of its arguments.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayrollQuery;
/// use chrono::NaiveDate;
///
/// let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
/// assert_eq!(
///     query.cutoff_date().unwrap(),
///     NaiveDate::from_ymd_opt(2020, 3, 31).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayrollQuery {
    /// Accumulate through the last day of `(year, month)`.
    MonthEnd {
        /// The requested year.
        year: i32,
        /// The requested month, 1 through 12.
        month: u32,
    },
    /// Accumulate through `today` if `year` is the current year, or through
    /// December 31st if `year` is in the past.
    AsOf {
        /// The requested year.
        year: i32,
        /// The current date, supplied by the caller.
        today: NaiveDate,
    },
}

impl PayrollQuery {
    /// Returns the year this query accumulates over.
    pub fn year(&self) -> i32 {
        match *self {
            PayrollQuery::MonthEnd { year, .. } => year,
            PayrollQuery::AsOf { year, .. } => year,
        }
    }

    /// Resolves the query's cutoff date.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidMonth`] for a [`PayrollQuery::MonthEnd`]
    ///   query whose month lies outside `1..=12`.
    /// - [`EngineError::RequestedYearInFuture`] for an
    ///   [`PayrollQuery::AsOf`] query whose year is later than today's
    ///   year; nothing has been disbursed for such a year yet.
    pub fn cutoff_date(&self) -> EngineResult<NaiveDate> {
        match *self {
            PayrollQuery::MonthEnd { year, month } => {
                if !(1..=12).contains(&month) {
                    return Err(EngineError::InvalidMonth { month });
                }
                Ok(last_day_of_month(year, month))
            }
            PayrollQuery::AsOf { year, today } => {
                if year > today.year() {
                    Err(EngineError::RequestedYearInFuture { year })
                } else if year == today.year() {
                    Ok(today)
                } else {
                    Ok(last_day_of_month(year, 12))
                }
            }
        }
    }
}

/// Last calendar day of `(year, month)`, computed as the day before the
/// first of the following month. `month` must already be validated.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .expect("the first day of a month always exists")
        .pred_opt()
        .expect("the day before a month start always exists")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_end_cutoff_is_last_day_of_month() {
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        assert_eq!(query.cutoff_date().unwrap(), date(2020, 3, 31));
    }

    #[test]
    fn test_month_end_cutoff_handles_leap_february() {
        let query = PayrollQuery::MonthEnd { year: 2020, month: 2 };
        assert_eq!(query.cutoff_date().unwrap(), date(2020, 2, 29));

        let query = PayrollQuery::MonthEnd { year: 2021, month: 2 };
        assert_eq!(query.cutoff_date().unwrap(), date(2021, 2, 28));
    }

    #[test]
    fn test_month_end_cutoff_handles_december() {
        let query = PayrollQuery::MonthEnd { year: 2020, month: 12 };
        assert_eq!(query.cutoff_date().unwrap(), date(2020, 12, 31));
    }

    #[test]
    fn test_month_end_rejects_month_zero() {
        let query = PayrollQuery::MonthEnd { year: 2020, month: 0 };
        match query.cutoff_date().unwrap_err() {
            EngineError::InvalidMonth { month } => assert_eq!(month, 0),
            other => panic!("Expected InvalidMonth, got {:?}", other),
        }
    }

    #[test]
    fn test_month_end_rejects_month_thirteen() {
        let query = PayrollQuery::MonthEnd { year: 2020, month: 13 };
        assert!(query.cutoff_date().is_err());
    }

    #[test]
    fn test_as_of_current_year_cuts_off_today() {
        let query = PayrollQuery::AsOf {
            year: 2020,
            today: date(2020, 8, 14),
        };
        assert_eq!(query.cutoff_date().unwrap(), date(2020, 8, 14));
    }

    #[test]
    fn test_as_of_past_year_cuts_off_december_31() {
        let query = PayrollQuery::AsOf {
            year: 2019,
            today: date(2020, 8, 14),
        };
        assert_eq!(query.cutoff_date().unwrap(), date(2019, 12, 31));
    }

    #[test]
    fn test_as_of_future_year_errors() {
        let query = PayrollQuery::AsOf {
            year: 2021,
            today: date(2020, 8, 14),
        };
        match query.cutoff_date().unwrap_err() {
            EngineError::RequestedYearInFuture { year } => assert_eq!(year, 2021),
            other => panic!("Expected RequestedYearInFuture, got {:?}", other),
        }
    }

    #[test]
    fn test_year_accessor() {
        assert_eq!(PayrollQuery::MonthEnd { year: 2020, month: 3 }.year(), 2020);
        assert_eq!(
            PayrollQuery::AsOf {
                year: 2019,
                today: date(2020, 8, 14)
            }
            .year(),
            2019
        );
    }

    #[test]
    fn test_serialize_query_round_trip() {
        let query = PayrollQuery::AsOf {
            year: 2020,
            today: date(2020, 8, 14),
        };
        let json = serde_json::to_string(&query).unwrap();
        let deserialized: PayrollQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(query, deserialized);
    }
}

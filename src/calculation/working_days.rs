//! Working-day counts.

use crate::error::EngineResult;
use crate::models::{Artist, PayrollQuery};

use super::calendar::day_count;
use super::timeline::resolve_timeline;

/// Returns the inclusive day count of the artist's employment window within
/// the query's year.
///
/// This is a year-to-date figure even under a month-end cutoff: the count
/// runs from the later of January 1st and the hire date through the earlier
/// of the cutoff and the termination date, never restricted to a single
/// month. An artist with no hire date or an empty window yields 0.
///
/// # Errors
///
/// Same error conditions as [`super::year_to_date_salary`].
pub fn working_days(artist: &Artist, query: &PayrollQuery) -> EngineResult<i64> {
    let cutoff = query.cutoff_date()?;
    let Some(window) = resolve_timeline(artist, query.year(), cutoff)? else {
        return Ok(0);
    };
    Ok(day_count(window.start, window.end))
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

    /// WD-001: hired mid-month, queried for the hire month.
    #[test]
    fn test_mid_month_hire_counts_from_hire_date() {
        let artist = create_test_artist(Some(date(2020, 3, 15)));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        assert_eq!(working_days(&artist, &query).unwrap(), 17);
    }

    #[test]
    fn test_count_is_year_to_date_not_single_month() {
        let artist = create_test_artist(Some(date(2018, 6, 1)));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        // Jan 1 .. Mar 31 of a leap year.
        assert_eq!(working_days(&artist, &query).unwrap(), 91);
    }

    #[test]
    fn test_no_hire_date_counts_zero() {
        let artist = create_test_artist(None);
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        assert_eq!(working_days(&artist, &query).unwrap(), 0);
    }

    #[test]
    fn test_hired_after_cutoff_counts_zero() {
        let artist = create_test_artist(Some(date(2020, 11, 5)));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        assert_eq!(working_days(&artist, &query).unwrap(), 0);
    }

    #[test]
    fn test_termination_clips_count() {
        let mut artist = create_test_artist(Some(date(2018, 6, 1)));
        artist.termination_date = Some(date(2020, 2, 15));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 7 };
        // Jan 1 .. Feb 15.
        assert_eq!(working_days(&artist, &query).unwrap(), 46);
    }

    #[test]
    fn test_full_leap_year_counts_366() {
        let artist = create_test_artist(Some(date(2018, 6, 1)));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 12 };
        assert_eq!(working_days(&artist, &query).unwrap(), 366);
    }

    #[test]
    fn test_count_grows_with_later_cutoff_months() {
        let artist = create_test_artist(Some(date(2020, 3, 15)));
        let mut previous = 0;
        for month in 1..=12 {
            let query = PayrollQuery::MonthEnd { year: 2020, month };
            let days = working_days(&artist, &query).unwrap();
            assert!(days >= previous, "month {month} shrank the count");
            previous = days;
        }
        assert_eq!(previous, 292);
    }

    #[test]
    fn test_terminated_before_requested_year_errors() {
        let mut artist = create_test_artist(Some(date(2018, 6, 1)));
        artist.termination_date = Some(date(2019, 10, 31));
        let query = PayrollQuery::MonthEnd { year: 2020, month: 3 };
        assert!(working_days(&artist, &query).is_err());
    }
}

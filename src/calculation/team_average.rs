//! Team-average cost estimation.
//!
//! A deliberately coarse, forward-looking estimator used for budget
//! planning: it works from the rate effective today and a flat 30-day
//! month, without the day-level proration the disbursement figures use.
//! Its rounding and assumptions differ from the proration pipeline on
//! purpose; the two must not be unified.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::Artist;

use super::monthly_amount::round_currency;

/// Flat month length assumed for forward-looking estimates.
const ESTIMATE_MONTH_DAYS: u32 = 30;

/// Returns the average daily labor cost across a team of artists.
///
/// For each artist the annual rate effective today is picked: the
/// pre-revision rate while today precedes the revision's effective date,
/// the year's on-file rate otherwise. The unrounded monthly rates are
/// summed, divided by a flat 30-day month and by the artist head-count,
/// and rounded once. Artists with no salary on record for the current year
/// contribute nothing to the sum but still count toward the head-count.
/// An empty slice yields zero.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::team_average_cost;
/// use payroll_engine::models::Artist;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let artist = Artist {
///     id: "1001".to_string(),
///     name: "kim.west".to_string(),
///     dept: "VFX".to_string(),
///     team: "comp".to_string(),
///     hire_date: Some(NaiveDate::from_ymd_opt(2018, 6, 1).unwrap()),
///     termination_date: None,
///     annual_salary_by_year: BTreeMap::from([(2020, 2400)]),
///     salary_revision: None,
/// };
/// let today = NaiveDate::from_ymd_opt(2020, 8, 14).unwrap();
/// // round((2400 * 10000 / 12) / 30 / 1)
/// assert_eq!(team_average_cost(&[artist], today), Decimal::from(66_667));
/// ```
pub fn team_average_cost(artists: &[Artist], today: NaiveDate) -> Decimal {
    if artists.is_empty() {
        return Decimal::ZERO;
    }

    let mut total_monthly = Decimal::ZERO;
    for artist in artists {
        let mut annual_salary = artist.annual_salary_for(today.year());
        if let Some(revision) = artist.salary_revision {
            if today < revision.effective_date {
                annual_salary = Some(revision.previous_annual_salary);
            }
        }
        let Some(units) = annual_salary else {
            continue;
        };
        total_monthly += Decimal::from(units) * Decimal::from(10_000u32) / Decimal::from(12u32);
    }

    debug!(
        artists = artists.len(),
        %total_monthly,
        "estimated team monthly cost"
    );

    round_currency(
        total_monthly / Decimal::from(ESTIMATE_MONTH_DAYS) / Decimal::from(artists.len() as u64),
    )
}

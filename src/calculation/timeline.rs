//! Employment timeline resolution.
//!
//! This module derives the effective employment window for an artist within
//! a requested year: the hire date clipped to January 1st, the cutoff date
//! clipped to the termination date, and the window split at the salary
//! revision boundary when a same-year revision falls inside it.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::Artist;

/// A slice of the employment window paid at one constant annual rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateSpan {
    /// First day of the slice (inclusive).
    pub start: NaiveDate,
    /// Last day of the slice (inclusive).
    pub end: NaiveDate,
    /// The annual salary in effect over the slice, in units of 10,000 of
    /// the local currency. `None` means no salary on record for the year.
    pub annual_salary: Option<u32>,
}

/// The resolved employment window for one artist and year.
///
/// `spans` covers `[start, end]` without gaps or overlaps: one span when a
/// single rate applies throughout, two when a same-year salary revision
/// splits the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmploymentWindow {
    /// First employed day within the year (inclusive).
    pub start: NaiveDate,
    /// Last day the computation accumulates through (inclusive).
    pub end: NaiveDate,
    /// The window sliced by rate, in chronological order.
    pub spans: Vec<RateSpan>,
}

/// Resolves the employment window for `artist` within `year`, accumulating
/// through `cutoff`.
///
/// The window starts at the later of the hire date and January 1st, and
/// ends at the earlier of the cutoff date and the termination date. A
/// salary revision effective within the year splits the window at its
/// boundary: days before the effective date are paid at the pre-revision
/// rate, the effective date and everything after it at the year's on-file
/// rate. A revision effective after the window end leaves the whole window
/// at the pre-revision rate (it has not taken effect by the cutoff); one
/// effective on or before the window start leaves it at the on-file rate.
/// A revision recorded for a different year does not apply.
///
/// # Returns
///
/// - `Ok(None)` when the artist has no hire date, or when the clipped
///   window is empty (for example, hired after the cutoff month). All
///   downstream figures are zero in that case.
/// - `Ok(Some(window))` otherwise.
///
/// # Errors
///
/// - [`EngineError::InvalidHireYear`] when the hire date's year is later
///   than `year`.
/// - [`EngineError::TerminatedBeforeRequestedYear`] when the termination
///   date's year precedes `year`.
pub fn resolve_timeline(
    artist: &Artist,
    year: i32,
    cutoff: NaiveDate,
) -> EngineResult<Option<EmploymentWindow>> {
    let Some(hire_date) = artist.hire_date else {
        return Ok(None);
    };
    if hire_date.year() > year {
        return Err(EngineError::InvalidHireYear {
            id: artist.id.clone(),
            name: artist.name.clone(),
            hire_year: hire_date.year(),
        });
    }
    if let Some(termination_date) = artist.termination_date {
        if termination_date.year() < year {
            return Err(EngineError::TerminatedBeforeRequestedYear {
                id: artist.id.clone(),
                name: artist.name.clone(),
                termination_year: termination_date.year(),
            });
        }
    }

    let jan_1 = NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1st always exists");
    let window_start = hire_date.max(jan_1);
    let window_end = match artist.termination_date {
        Some(termination_date) => termination_date.min(cutoff),
        None => cutoff,
    };
    if window_start > window_end {
        debug!(
            artist = %artist.id,
            year,
            %window_start,
            %window_end,
            "employment window is empty"
        );
        return Ok(None);
    }

    let on_file_salary = artist.annual_salary_for(year);
    let spans = match artist.salary_revision {
        Some(revision) if revision.effective_date.year() == year => {
            let effective = revision.effective_date;
            if effective <= hire_date
                || artist
                    .termination_date
                    .is_some_and(|termination| effective > termination)
            {
                warn!(
                    artist = %artist.id,
                    %effective,
                    "salary revision date falls outside the employment window"
                );
            }
            if effective > window_end {
                vec![RateSpan {
                    start: window_start,
                    end: window_end,
                    annual_salary: Some(revision.previous_annual_salary),
                }]
            } else if effective <= window_start {
                vec![RateSpan {
                    start: window_start,
                    end: window_end,
                    annual_salary: on_file_salary,
                }]
            } else {
                let day_before = effective
                    .pred_opt()
                    .expect("a date strictly after the window start has a predecessor");
                vec![
                    RateSpan {
                        start: window_start,
                        end: day_before,
                        annual_salary: Some(revision.previous_annual_salary),
                    },
                    RateSpan {
                        start: effective,
                        end: window_end,
                        annual_salary: on_file_salary,
                    },
                ]
            }
        }
        _ => vec![RateSpan {
            start: window_start,
            end: window_end,
            annual_salary: on_file_salary,
        }],
    };

    debug!(
        artist = %artist.id,
        year,
        %window_start,
        %window_end,
        spans = spans.len(),
        "resolved employment window"
    );

    Ok(Some(EmploymentWindow {
        start: window_start,
        end: window_end,
        spans,
    }))
}

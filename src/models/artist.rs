//! Artist model and related types.
//!
//! This module defines the [`Artist`] struct consumed by the proration
//! engine, the [`SalaryRevision`] attached to it when the annual salary
//! changed within a calendar year, and the raw [`ArtistRecord`] shape in
//! which artists arrive from the document store.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The date format used by the document store, e.g. `2020-03-15`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single same-year salary change.
///
/// At most one revision is recorded per artist per year. The annual salary
/// table holds the rate that applies from the effective date onward;
/// `previous_annual_salary` is the rate that applied before it within the
/// same calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRevision {
    /// The first day paid at the new rate.
    pub effective_date: NaiveDate,
    /// The annual salary before the revision, in units of 10,000 of the
    /// local currency.
    pub previous_annual_salary: u32,
}

/// Represents an artist whose salary figures are being prorated.
///
/// Salary figures are stored as integers in units of 10,000 of the local
/// currency; multiply by 10,000 to obtain the true annual amount. Values
/// arrive already decrypted from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Unique identifier for the artist.
    pub id: String,
    /// The artist's name.
    pub name: String,
    /// The department the artist belongs to.
    pub dept: String,
    /// The team the artist belongs to.
    pub team: String,
    /// The date the artist was hired. Absent means no employment has been
    /// recorded yet; every derived figure is zero.
    pub hire_date: Option<NaiveDate>,
    /// The artist's last day of employment, present only for artists who
    /// have left.
    pub termination_date: Option<NaiveDate>,
    /// Annual salary per 4-digit year, in units of 10,000 of the local
    /// currency. A missing year means no salary on record for that year.
    #[serde(default)]
    pub annual_salary_by_year: BTreeMap<i32, u32>,
    /// The same-year salary change, if one was recorded.
    pub salary_revision: Option<SalaryRevision>,
}

impl Artist {
    /// Returns the annual salary on record for `year`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Artist;
    /// use std::collections::BTreeMap;
    ///
    /// let artist = Artist {
    ///     id: "1001".to_string(),
    ///     name: "kim.west".to_string(),
    ///     dept: "VFX".to_string(),
    ///     team: "comp".to_string(),
    ///     hire_date: None,
    ///     termination_date: None,
    ///     annual_salary_by_year: BTreeMap::from([(2020, 2400)]),
    ///     salary_revision: None,
    /// };
    /// assert_eq!(artist.annual_salary_for(2020), Some(2400));
    /// assert_eq!(artist.annual_salary_for(2019), None);
    /// ```
    pub fn annual_salary_for(&self, year: i32) -> Option<u32> {
        self.annual_salary_by_year.get(&year).copied()
    }

    /// Returns true if the artist has a recorded termination date.
    pub fn is_terminated(&self) -> bool {
        self.termination_date.is_some()
    }

    /// Parses a raw document-store record into an [`Artist`].
    ///
    /// Empty `start_day`/`end_day` strings mean the date is absent. The
    /// termination date is only honored when `resignation` is set, and the
    /// salary revision only when `changed` is set, matching how the store
    /// writes the flags. If `changed_salary` carries more than one entry
    /// (the store only ever writes one), the earliest-dated entry wins.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedDate`] naming the offending field
    /// when any date string fails to parse.
    pub fn from_record(record: &ArtistRecord) -> EngineResult<Self> {
        let hire_date = parse_optional_date("start_day", &record.start_day)?;
        let termination_date = if record.resignation {
            parse_optional_date("end_day", &record.end_day)?
        } else {
            None
        };

        let salary_revision = if record.changed {
            match record.changed_salary.iter().next() {
                Some((day, &previous_annual_salary)) => Some(SalaryRevision {
                    effective_date: parse_date("changed_salary", day)?,
                    previous_annual_salary,
                }),
                None => None,
            }
        } else {
            None
        };

        Ok(Artist {
            id: record.id.clone(),
            name: record.name.clone(),
            dept: record.dept.clone(),
            team: record.team.clone(),
            hire_date,
            termination_date,
            annual_salary_by_year: record.salary.clone(),
            salary_revision,
        })
    }
}

/// The raw artist document as stored, with string dates.
///
/// Salary values are plain integers in units of 10,000 of the local
/// currency; decryption of the stored fields happens upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    /// Unique identifier for the artist.
    pub id: String,
    /// The artist's name.
    pub name: String,
    /// The department the artist belongs to.
    pub dept: String,
    /// The team the artist belongs to.
    pub team: String,
    /// Hire date as `YYYY-MM-DD`, or empty when not yet recorded.
    pub start_day: String,
    /// Last day of employment as `YYYY-MM-DD`, or empty.
    pub end_day: String,
    /// Whether the artist has left.
    pub resignation: bool,
    /// Annual salary per 4-digit year.
    #[serde(default)]
    pub salary: BTreeMap<i32, u32>,
    /// Whether the salary changed within a calendar year.
    pub changed: bool,
    /// The pre-change annual salary keyed by the change date `YYYY-MM-DD`.
    #[serde(default)]
    pub changed_salary: BTreeMap<String, u32>,
}

fn parse_date(field: &str, value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| EngineError::MalformedDate {
        field: field.to_string(),
        value: value.to_string(),
    })
}

fn parse_optional_date(field: &str, value: &str) -> EngineResult<Option<NaiveDate>> {
    if value.is_empty() {
        return Ok(None);
    }
    parse_date(field, value).map(Some)
}

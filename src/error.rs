//! Error types for the payroll proration engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during proration.

use thiserror::Error;

/// The main error type for the payroll proration engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. Errors
/// about a specific artist carry the artist's id and name so a batch caller
/// can report which record was at fault without aborting the whole batch.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::RequestedYearInFuture { year: 2031 };
/// assert_eq!(error.to_string(), "Requested year 2031 is in the future");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date field from the upstream store could not be parsed.
    #[error("Malformed date in field '{field}': '{value}'")]
    MalformedDate {
        /// The record field holding the bad value.
        field: String,
        /// The value that failed to parse.
        value: String,
    },

    /// A month-end query was built with a month outside 1..=12.
    #[error("Invalid month: {month}")]
    InvalidMonth {
        /// The out-of-range month number.
        month: u32,
    },

    /// The artist's hire year is later than the requested year.
    #[error("Artist '{name}' (ID {id}) was hired in {hire_year}, after the requested year")]
    InvalidHireYear {
        /// The artist's id.
        id: String,
        /// The artist's name.
        name: String,
        /// The year of the hire date.
        hire_year: i32,
    },

    /// The artist's termination year precedes the requested year.
    #[error("Artist '{name}' (ID {id}) left in {termination_year}, before the requested year")]
    TerminatedBeforeRequestedYear {
        /// The artist's id.
        id: String,
        /// The artist's name.
        name: String,
        /// The year of the termination date.
        termination_year: i32,
    },

    /// An as-of-today query asked for a year later than today's year.
    #[error("Requested year {year} is in the future")]
    RequestedYearInFuture {
        /// The requested year.
        year: i32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

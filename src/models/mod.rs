//! Core data models for the payroll proration engine.
//!
//! This module contains all the domain models used throughout the engine.

mod artist;
mod query;

pub use artist::{Artist, ArtistRecord, SalaryRevision};
pub use query::PayrollQuery;

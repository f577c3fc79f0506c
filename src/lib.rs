//! Payroll proration engine for studio labor-cost reporting.
//!
//! This crate computes how much of an artist's annual salary was actually
//! disbursed for a given year up to a cutoff date, accounting for mid-month
//! hires, mid-month terminations, and at most one same-year salary revision.
//! It also derives the working-day count of the employment window and the
//! blended hourly wage used by labor-cost rollups.

#![warn(missing_docs)]

pub mod calculation;
pub mod error;
pub mod models;

//! Calculation logic for the payroll proration engine.
//!
//! This module contains all the calculation functions for deriving pay
//! figures: calendar arithmetic over month spans, monthly and partial-month
//! amounts, span pricing, employment timeline resolution, the year-to-date
//! salary, working-day and hourly-wage figures built on it, and the
//! separate team-average cost estimator.

mod calendar;
mod hourly_wage;
mod monthly_amount;
mod pay_summary;
mod span_amount;
mod team_average;
mod timeline;
mod working_days;
mod year_to_date;

pub use calendar::{
    day_count, days_in_month, month_end, month_sequence, month_start, same_month,
    whole_months_between,
};
pub use hourly_wage::hourly_wage;
pub use monthly_amount::{full_months_amount, monthly_rate, partial_month_amount};
pub use pay_summary::{PaySummary, pay_summary};
pub use span_amount::span_amount;
pub use team_average::team_average_cost;
pub use timeline::{EmploymentWindow, RateSpan, resolve_timeline};
pub use working_days::working_days;
pub use year_to_date::year_to_date_salary;

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod date_format;
mod date_range;
mod entitlement;
mod error;
mod holiday_index;
mod monthly_summary;
mod types;
mod vacation_days;
mod validation;

#[cfg(test)]
mod tests;

pub use date_format::{format_date, format_timestamp, parse_date, parse_timestamp};
pub use date_range::{DateRange, DateRangeIter};
pub use entitlement::{EntitlementBalance, calculate_entitlement_balance};
pub use error::DomainError;
pub use holiday_index::{HolidayEntry, HolidayIndex};
pub use monthly_summary::{
    MonthlyFactsSource, MonthlySummary, aggregate_monthly_summary, compute_monthly_summary,
};
pub use vacation_days::{
    VacationComputation, VacationDayCount, compute_vacation_rows, count_vacation_days,
    years_touched,
};

// Re-export public types
pub use types::{
    CalendarDay, CalendarDayKind, Report, ReportCategory, ReportPeriod, UserId,
    VacationEntitlement, VacationRequest, VacationStatus, WellKnownCategories, WorkStandard,
};
pub use validation::{
    validate_calendar_date, validate_category_name, validate_day, validate_identifier,
    validate_month, validate_report_hours, validate_standard_hours, validate_vacation_range,
    validate_year,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::{Date, Month};
use uuid::Uuid;

/// Validates that a year lies in the supported range (1900-2100).
///
/// # Errors
///
/// Returns `DomainError::InvalidYear` if the year is out of range.
pub fn validate_year(year: i32) -> Result<(), DomainError> {
    if !(1900..=2100).contains(&year) {
        return Err(DomainError::InvalidYear(year));
    }
    Ok(())
}

/// Validates a 1-based month number.
///
/// # Errors
///
/// Returns `DomainError::InvalidMonth` if the month is outside 1-12.
pub fn validate_month(month: u8) -> Result<(), DomainError> {
    if !(1..=12).contains(&month) {
        return Err(DomainError::InvalidMonth(month));
    }
    Ok(())
}

/// Validates a day of month.
///
/// Only the 1-31 bound is checked here; see [`validate_calendar_date`] for
/// the month-specific limit.
///
/// # Errors
///
/// Returns `DomainError::InvalidDay` if the day is outside 1-31.
pub fn validate_day(day: u8) -> Result<(), DomainError> {
    if !(1..=31).contains(&day) {
        return Err(DomainError::InvalidDay(day));
    }
    Ok(())
}

/// Validates a year/month/day triple and builds the date.
///
/// # Errors
///
/// Returns an error if any component is out of range or the combination
/// does not exist (e.g. February 30th).
pub fn validate_calendar_date(year: i32, month: u8, day: u8) -> Result<Date, DomainError> {
    validate_year(year)?;
    validate_month(month)?;
    validate_day(day)?;

    let month_value: Month = Month::try_from(month).map_err(|_| DomainError::InvalidMonth(month))?;
    Date::from_calendar_date(year, month_value, day)
        .map_err(|_| DomainError::InvalidCalendarDate { year, month, day })
}

/// Validates reported hours (0-24 inclusive).
///
/// # Errors
///
/// Returns `DomainError::InvalidReportHours` if the value is out of range
/// or not a finite number.
pub fn validate_report_hours(hours: f64) -> Result<(), DomainError> {
    if !hours.is_finite() || !(0.0..=24.0).contains(&hours) {
        return Err(DomainError::InvalidReportHours(hours.to_string()));
    }
    Ok(())
}

/// Validates the hours of a work standard and converts them to unsigned.
///
/// # Errors
///
/// Returns `DomainError::InvalidStandardHours` if the value is negative.
pub fn validate_standard_hours(hours: i32) -> Result<u32, DomainError> {
    u32::try_from(hours).map_err(|_| DomainError::InvalidStandardHours(hours))
}

/// Validates that a record identifier is a UUID.
///
/// Returns the identifier in canonical lowercase hyphenated form.
///
/// # Errors
///
/// Returns `DomainError::InvalidIdentifier` naming `field` if the value is
/// not a UUID.
pub fn validate_identifier(field: &'static str, value: &str) -> Result<String, DomainError> {
    Uuid::parse_str(value)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| DomainError::InvalidIdentifier {
            field,
            value: value.to_string(),
        })
}

/// Validates a category system name.
///
/// # Errors
///
/// Returns `DomainError::InvalidCategoryName` if the name is blank.
pub fn validate_category_name(system_name: &str) -> Result<(), DomainError> {
    if system_name.trim().is_empty() {
        return Err(DomainError::InvalidCategoryName(String::from(
            "Category system name cannot be empty",
        )));
    }
    Ok(())
}

/// Validates that a new vacation does not end before it starts.
///
/// Single-day vacations (start equals end) are allowed.
///
/// # Errors
///
/// Returns `DomainError::InvertedVacationRange` if `end_date` precedes
/// `start_date`.
pub fn validate_vacation_range(start_date: Date, end_date: Date) -> Result<(), DomainError> {
    if end_date < start_date {
        return Err(DomainError::InvertedVacationRange {
            start_date,
            end_date,
        });
    }
    Ok(())
}

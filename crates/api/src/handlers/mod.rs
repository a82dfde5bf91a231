// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions.
//!
//! Every handler validates its input, talks to persistence, and returns a
//! response DTO. Counting and balance arithmetic is delegated to the
//! domain crate.

pub mod calendar;
pub mod categories;
pub mod reports;
pub mod standards;
pub mod vacations;

use num_traits::cast::ToPrimitive;
use time::Date;
use timetrack_domain::{
    ReportPeriod, UserId, parse_date, validate_calendar_date, validate_month, validate_year,
};

use crate::error::{ApiError, translate_domain_error};

/// Parses a user identifier from a request.
pub(crate) fn parse_user(value: &str) -> Result<UserId, ApiError> {
    UserId::parse(value).map_err(translate_domain_error)
}

/// Narrows a wire integer to a month or day number.
fn narrow(field: &str, value: i32) -> Result<u8, ApiError> {
    value.to_u8().ok_or_else(|| ApiError::InvalidInput {
        field: field.to_string(),
        message: format!("Invalid {field}: {value}"),
    })
}

/// Validates a year taken from a path or body.
pub(crate) fn parse_year(year: i32) -> Result<i32, ApiError> {
    validate_year(year).map_err(translate_domain_error)?;
    Ok(year)
}

/// Validates a month number taken from a path or body.
pub(crate) fn parse_month(month: i32) -> Result<u8, ApiError> {
    let month: u8 = narrow("month", month)?;
    validate_month(month).map_err(translate_domain_error)?;
    Ok(month)
}

/// Builds a report period from wire values.
pub(crate) fn parse_period(year: i32, month: i32) -> Result<ReportPeriod, ApiError> {
    let year: i32 = parse_year(year)?;
    let month: u8 = parse_month(month)?;
    ReportPeriod::new(year, month).map_err(translate_domain_error)
}

/// Builds a calendar date from separate day, month and year values.
pub(crate) fn parse_date_parts(year: i32, month: i32, day: i32) -> Result<Date, ApiError> {
    let month: u8 = narrow("month", month)?;
    let day: u8 = narrow("day", day)?;
    validate_calendar_date(year, month, day).map_err(translate_domain_error)
}

/// Parses a `YYYY-MM-DD` date, reporting failures against `field`.
pub(crate) fn parse_wire_date(field: &str, value: &str) -> Result<Date, ApiError> {
    let date: Date = parse_date(value).map_err(|err| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })?;
    validate_year(date.year()).map_err(|err| ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    })?;
    Ok(date)
}

/// Generates the identifier of a new record.
pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

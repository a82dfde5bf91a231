// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Company calendar handlers.

use time::Date;
use timetrack_domain::{CalendarDay, CalendarDayKind, ReportPeriod};
use timetrack_persistence::{NewCalendarDay, Persistence};
use tracing::info;

use super::{parse_date_parts, parse_period, parse_year};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{CalendarDayInfo, CreateCalendarDayRequest};

/// Lists the marked days of one month.
///
/// # Errors
///
/// Returns an error if the month or year is invalid or the read fails.
pub fn list_calendar_month(
    persistence: &mut Persistence,
    month: i32,
    year: i32,
) -> Result<Vec<CalendarDayInfo>, ApiError> {
    let period: ReportPeriod = parse_period(year, month)?;

    let days: Vec<CalendarDay> = persistence
        .list_calendar_month(period)
        .map_err(|err| translate_persistence_error(err, "listing calendar month"))?;
    Ok(days.into_iter().map(CalendarDayInfo::from).collect())
}

/// Lists the marked days of one year.
///
/// # Errors
///
/// Returns an error if the year is invalid or the read fails.
pub fn list_calendar_year(
    persistence: &mut Persistence,
    year: i32,
) -> Result<Vec<CalendarDayInfo>, ApiError> {
    let year: i32 = parse_year(year)?;

    let days: Vec<CalendarDay> = persistence
        .list_calendar_year(year)
        .map_err(|err| translate_persistence_error(err, "listing calendar year"))?;
    Ok(days.into_iter().map(CalendarDayInfo::from).collect())
}

/// Marks a calendar day.
///
/// Marking a date that is already marked adds a second entry; for
/// holidays the later one wins when vacations are counted.
///
/// # Errors
///
/// Returns an error if the date or kind is invalid or the write fails.
pub fn create_calendar_day(
    persistence: &mut Persistence,
    request: CreateCalendarDayRequest,
) -> Result<CalendarDayInfo, ApiError> {
    let date: Date = parse_date_parts(request.year, request.month, request.day)?;
    let kind: CalendarDayKind = request
        .kind
        .parse::<CalendarDayKind>()
        .map_err(translate_domain_error)?;

    let day: NewCalendarDay = NewCalendarDay {
        date,
        kind,
        is_paid_vacation: request.is_paid_vacation,
        description: request.description.filter(|d| !d.trim().is_empty()),
    };
    let stored: CalendarDay = persistence
        .create_calendar_day(&day)
        .map_err(|err| translate_persistence_error(err, "creating calendar day"))?;
    info!(calendar_day_id = stored.id, %date, kind = kind.as_str(), "Created calendar day");

    Ok(CalendarDayInfo::from(stored))
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar day queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use std::str::FromStr;
use time::Date;
use timetrack_domain::{CalendarDay, CalendarDayKind, HolidayEntry, validate_calendar_date};
use tracing::debug;

use crate::diesel_schema::calendar_days;
use crate::error::PersistenceError;

/// Diesel Queryable struct for calendar day rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = calendar_days)]
struct CalendarDayRow {
    calendar_day_id: i64,
    day: i32,
    month: i32,
    year: i32,
    kind: String,
    is_paid_vacation: i32,
    description: Option<String>,
}

impl CalendarDayRow {
    fn date(&self) -> Result<Date, PersistenceError> {
        let invalid = || {
            PersistenceError::InvalidStoredValue(format!(
                "calendar day {} has date parts {}-{}-{}",
                self.calendar_day_id, self.year, self.month, self.day
            ))
        };
        let month: u8 = self.month.to_u8().ok_or_else(invalid)?;
        let day: u8 = self.day.to_u8().ok_or_else(invalid)?;
        Ok(validate_calendar_date(self.year, month, day)?)
    }
}

impl TryFrom<CalendarDayRow> for CalendarDay {
    type Error = PersistenceError;

    fn try_from(row: CalendarDayRow) -> Result<Self, Self::Error> {
        Ok(Self {
            date: row.date()?,
            kind: CalendarDayKind::from_str(&row.kind)?,
            id: row.calendar_day_id,
            is_paid_vacation: row.is_paid_vacation != 0,
            description: row.description,
        })
    }
}

impl TryFrom<CalendarDayRow> for HolidayEntry {
    type Error = PersistenceError;

    fn try_from(row: CalendarDayRow) -> Result<Self, Self::Error> {
        Ok(Self {
            date: row.date()?,
            id: Some(row.calendar_day_id),
            is_paid_vacation: row.is_paid_vacation != 0,
            description: row.description,
        })
    }
}

backend_fn! {
/// Lists the marked days of one month, ordered by day.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_calendar_month(
    conn: &mut _,
    year: i32,
    month: i32,
) -> Result<Vec<CalendarDay>, PersistenceError> {
    let rows: Vec<CalendarDayRow> = calendar_days::table
        .filter(calendar_days::year.eq(year))
        .filter(calendar_days::month.eq(month))
        .order((calendar_days::day.asc(), calendar_days::calendar_day_id.asc()))
        .select(CalendarDayRow::as_select())
        .load(conn)?;

    rows.into_iter().map(CalendarDay::try_from).collect()
}
}

backend_fn! {
/// Lists the marked days of one year in date order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_calendar_year(conn: &mut _, year: i32) -> Result<Vec<CalendarDay>, PersistenceError> {
    let rows: Vec<CalendarDayRow> = calendar_days::table
        .filter(calendar_days::year.eq(year))
        .order((
            calendar_days::month.asc(),
            calendar_days::day.asc(),
            calendar_days::calendar_day_id.asc(),
        ))
        .select(CalendarDayRow::as_select())
        .load(conn)?;

    rows.into_iter().map(CalendarDay::try_from).collect()
}
}

backend_fn! {
/// Retrieves one calendar day by identifier.
///
/// # Errors
///
/// Returns `PersistenceError::CalendarDayNotFound` if it does not exist.
pub fn get_calendar_day(conn: &mut _, calendar_day_id: i64) -> Result<CalendarDay, PersistenceError> {
    let result: Result<CalendarDayRow, diesel::result::Error> = calendar_days::table
        .filter(calendar_days::calendar_day_id.eq(calendar_day_id))
        .select(CalendarDayRow::as_select())
        .first(conn);

    match result {
        Ok(row) => CalendarDay::try_from(row),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::CalendarDayNotFound(calendar_day_id))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Fetches the holidays of one year in date order.
///
/// Rows for the same date come out in insertion order, so a holiday index
/// built from the result keeps the most recently stored one.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn fetch_holidays_for_year(
    conn: &mut _,
    year: i32,
) -> Result<Vec<HolidayEntry>, PersistenceError> {
    debug!(year, "Fetching holidays");

    let rows: Vec<CalendarDayRow> = calendar_days::table
        .filter(calendar_days::year.eq(year))
        .filter(calendar_days::kind.eq(CalendarDayKind::Holiday.as_str()))
        .order((
            calendar_days::month.asc(),
            calendar_days::day.asc(),
            calendar_days::calendar_day_id.asc(),
        ))
        .select(CalendarDayRow::as_select())
        .load(conn)?;

    rows.into_iter().map(HolidayEntry::try_from).collect()
}
}

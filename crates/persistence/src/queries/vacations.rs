// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation request queries.
//!
//! Dates are stored as `YYYY-MM-DD` text, which sorts chronologically.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use std::str::FromStr;
use timetrack_domain::{UserId, VacationRequest, VacationStatus, parse_date, parse_timestamp};
use tracing::debug;

use crate::diesel_schema::vacations;
use crate::error::PersistenceError;

/// Diesel Queryable struct for vacation rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = vacations)]
struct VacationRow {
    id: String,
    user_id: String,
    start_date: String,
    end_date: String,
    year: i32,
    description: String,
    status: String,
    created_at: String,
}

impl TryFrom<VacationRow> for VacationRequest {
    type Error = PersistenceError;

    fn try_from(row: VacationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: UserId::parse(&row.user_id)?,
            start_date: parse_date(&row.start_date)?,
            end_date: parse_date(&row.end_date)?,
            year: row.year,
            status: VacationStatus::from_str(&row.status)?,
            created_at: parse_timestamp(&row.created_at)?,
            description: row.description,
            id: row.id,
        })
    }
}

backend_fn! {
/// Lists one user's vacations booked against a year, ordered by start date.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_vacations(
    conn: &mut _,
    user_id: &str,
    year: i32,
) -> Result<Vec<VacationRequest>, PersistenceError> {
    debug!(user_id, year, "Listing vacations");

    let rows: Vec<VacationRow> = vacations::table
        .filter(vacations::user_id.eq(user_id))
        .filter(vacations::year.eq(year))
        .order((vacations::start_date.asc(), vacations::id.asc()))
        .select(VacationRow::as_select())
        .load(conn)?;

    rows.into_iter().map(VacationRequest::try_from).collect()
}
}

backend_fn! {
/// Lists every user's vacations booked against a year.
///
/// Ordered by start date, then user.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_all_vacations(
    conn: &mut _,
    year: i32,
) -> Result<Vec<VacationRequest>, PersistenceError> {
    debug!(year, "Listing vacations of all users");

    let rows: Vec<VacationRow> = vacations::table
        .filter(vacations::year.eq(year))
        .order((
            vacations::start_date.asc(),
            vacations::user_id.asc(),
            vacations::id.asc(),
        ))
        .select(VacationRow::as_select())
        .load(conn)?;

    rows.into_iter().map(VacationRequest::try_from).collect()
}
}

backend_fn! {
/// Retrieves one vacation by identifier.
///
/// # Errors
///
/// Returns `PersistenceError::VacationNotFound` if it does not exist.
pub fn get_vacation(conn: &mut _, vacation_id: &str) -> Result<VacationRequest, PersistenceError> {
    let result: Result<VacationRow, diesel::result::Error> = vacations::table
        .filter(vacations::id.eq(vacation_id))
        .select(VacationRow::as_select())
        .first(conn);

    match result {
        Ok(row) => VacationRequest::try_from(row),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::VacationNotFound(vacation_id.to_string()))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Lists the distinct years a user has vacations in, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn list_vacation_years(conn: &mut _, user_id: &str) -> Result<Vec<i32>, PersistenceError> {
    let years: Vec<i32> = vacations::table
        .filter(vacations::user_id.eq(user_id))
        .select(vacations::year)
        .distinct()
        .order(vacations::year.desc())
        .load(conn)?;

    Ok(years)
}
}

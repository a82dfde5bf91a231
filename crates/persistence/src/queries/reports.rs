// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time entry queries.
//!
//! Entries are stored with separate day, month and year columns so that the
//! monthly aggregates filter on plain integers.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use timetrack_domain::{Report, ReportCategory, UserId, validate_calendar_date};
use tracing::debug;

use crate::diesel_schema::{report_types, reports};
use crate::error::PersistenceError;
use crate::queries::categories::CategoryRow;

/// Diesel Queryable struct for report rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = reports)]
struct ReportRow {
    id: String,
    user_id: String,
    day: i32,
    month: i32,
    year: i32,
    hours: f64,
}

fn to_report(row: ReportRow, category: CategoryRow) -> Result<Report, PersistenceError> {
    let invalid = || {
        PersistenceError::InvalidStoredValue(format!(
            "report {} has date parts {}-{}-{}",
            row.id, row.year, row.month, row.day
        ))
    };
    let month: u8 = row.month.to_u8().ok_or_else(invalid)?;
    let day: u8 = row.day.to_u8().ok_or_else(invalid)?;

    Ok(Report {
        user_id: UserId::parse(&row.user_id)?,
        date: validate_calendar_date(row.year, month, day)?,
        hours: row.hours,
        category: ReportCategory::from(category),
        id: row.id,
    })
}

backend_fn! {
/// Lists a user's entries for one month, ordered by day.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_reports(
    conn: &mut _,
    user_id: &str,
    year: i32,
    month: i32,
) -> Result<Vec<Report>, PersistenceError> {
    debug!(user_id, year, month, "Listing reports");

    let rows: Vec<(ReportRow, CategoryRow)> = reports::table
        .inner_join(report_types::table)
        .filter(reports::user_id.eq(user_id))
        .filter(reports::year.eq(year))
        .filter(reports::month.eq(month))
        .order((reports::day.asc(), reports::id.asc()))
        .select((ReportRow::as_select(), CategoryRow::as_select()))
        .load(conn)?;

    rows.into_iter()
        .map(|(row, category)| to_report(row, category))
        .collect()
}
}

backend_fn! {
/// Retrieves one entry by identifier.
///
/// # Errors
///
/// Returns `PersistenceError::ReportNotFound` if the entry does not exist.
pub fn get_report(conn: &mut _, report_id: &str) -> Result<Report, PersistenceError> {
    let result: Result<(ReportRow, CategoryRow), diesel::result::Error> = reports::table
        .inner_join(report_types::table)
        .filter(reports::id.eq(report_id))
        .select((ReportRow::as_select(), CategoryRow::as_select()))
        .first(conn);

    match result {
        Ok((row, category)) => to_report(row, category),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::ReportNotFound(report_id.to_string()))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Sums the hours a user reported in one month.
///
/// A month without entries sums to zero.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn total_hours(
    conn: &mut _,
    user_id: &str,
    year: i32,
    month: i32,
) -> Result<f64, PersistenceError> {
    let total: Option<f64> = reports::table
        .filter(reports::user_id.eq(user_id))
        .filter(reports::year.eq(year))
        .filter(reports::month.eq(month))
        .select(diesel::dsl::sum(reports::hours))
        .first(conn)?;

    Ok(total.unwrap_or(0.0))
}
}

backend_fn! {
/// Counts a user's entries of one category in one month.
///
/// # Errors
///
/// Returns an error if the query fails or the count does not fit `u32`.
pub fn count_reports_in_category(
    conn: &mut _,
    user_id: &str,
    year: i32,
    month: i32,
    category_id: &str,
) -> Result<u32, PersistenceError> {
    let count: i64 = reports::table
        .filter(reports::user_id.eq(user_id))
        .filter(reports::year.eq(year))
        .filter(reports::month.eq(month))
        .filter(reports::type_id.eq(category_id))
        .count()
        .get_result(conn)?;

    count
        .to_u32()
        .ok_or_else(|| PersistenceError::DatabaseError("Count conversion failed".to_string()))
}
}

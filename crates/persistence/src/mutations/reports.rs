// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time entry mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use time::Date;
use tracing::{debug, info};

use crate::data_models::NewReport;
use crate::diesel_schema::reports;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a time entry.
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if the identifier is taken
/// or the category does not exist.
pub fn insert_report(conn: &mut _, report: &NewReport) -> Result<(), PersistenceError> {
    info!(report_id = %report.id, user_id = %report.user_id, "Creating report");

    diesel::insert_into(reports::table)
        .values((
            reports::id.eq(&report.id),
            reports::user_id.eq(report.user_id.as_str()),
            reports::day.eq(i32::from(report.date.day())),
            reports::month.eq(i32::from(u8::from(report.date.month()))),
            reports::year.eq(report.date.year()),
            reports::hours.eq(report.hours),
            reports::type_id.eq(&report.category_id),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Changes the hours and category of an entry.
///
/// # Errors
///
/// Returns `PersistenceError::ReportNotFound` if the entry does not exist.
pub fn update_report(
    conn: &mut _,
    report_id: &str,
    hours: f64,
    category_id: &str,
) -> Result<(), PersistenceError> {
    debug!(report_id, hours, category_id, "Updating report");

    let existing: i64 = reports::table
        .filter(reports::id.eq(report_id))
        .count()
        .get_result(conn)?;
    if existing == 0 {
        return Err(PersistenceError::ReportNotFound(report_id.to_string()));
    }

    diesel::update(reports::table.filter(reports::id.eq(report_id)))
        .set((reports::hours.eq(hours), reports::type_id.eq(category_id)))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes all of a user's entries on one date.
///
/// Returns the number of deleted entries.
///
/// # Errors
///
/// Returns `PersistenceError::ReportNotFound` if the user has no entry that day.
pub fn delete_reports_for_day(
    conn: &mut _,
    user_id: &str,
    date: Date,
) -> Result<usize, PersistenceError> {
    info!(user_id, %date, "Deleting reports");

    let deleted: usize = diesel::delete(
        reports::table
            .filter(reports::user_id.eq(user_id))
            .filter(reports::year.eq(date.year()))
            .filter(reports::month.eq(i32::from(u8::from(date.month()))))
            .filter(reports::day.eq(i32::from(date.day()))),
    )
    .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::ReportNotFound(format!(
            "user {user_id} on {date}"
        )));
    }

    Ok(deleted)
}
}

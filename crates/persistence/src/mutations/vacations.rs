// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation request mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use timetrack_domain::{VacationStatus, format_date, format_timestamp};
use tracing::info;

use crate::data_models::NewVacation;
use crate::diesel_schema::vacations;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a vacation request.
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if the identifier is taken.
pub fn insert_vacation(conn: &mut _, vacation: &NewVacation) -> Result<(), PersistenceError> {
    info!(
        vacation_id = %vacation.id,
        user_id = %vacation.user_id,
        start_date = %vacation.start_date,
        end_date = %vacation.end_date,
        "Creating vacation"
    );

    diesel::insert_into(vacations::table)
        .values((
            vacations::id.eq(&vacation.id),
            vacations::user_id.eq(vacation.user_id.as_str()),
            vacations::start_date.eq(format_date(vacation.start_date)),
            vacations::end_date.eq(format_date(vacation.end_date)),
            vacations::year.eq(vacation.year),
            vacations::description.eq(&vacation.description),
            vacations::status.eq(vacation.status.as_str()),
            vacations::created_at.eq(format_timestamp(vacation.created_at)),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Sets the approval state of a vacation.
///
/// # Errors
///
/// Returns `PersistenceError::VacationNotFound` if it does not exist.
pub fn update_vacation_status(
    conn: &mut _,
    vacation_id: &str,
    status: VacationStatus,
) -> Result<(), PersistenceError> {
    info!(vacation_id, %status, "Changing vacation status");

    let existing: i64 = vacations::table
        .filter(vacations::id.eq(vacation_id))
        .count()
        .get_result(conn)?;
    if existing == 0 {
        return Err(PersistenceError::VacationNotFound(vacation_id.to_string()));
    }

    diesel::update(vacations::table.filter(vacations::id.eq(vacation_id)))
        .set(vacations::status.eq(status.as_str()))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Deletes a vacation.
///
/// # Errors
///
/// Returns `PersistenceError::VacationNotFound` if it does not exist.
pub fn delete_vacation(conn: &mut _, vacation_id: &str) -> Result<(), PersistenceError> {
    info!(vacation_id, "Deleting vacation");

    let deleted: usize = diesel::delete(vacations::table.filter(vacations::id.eq(vacation_id)))
        .execute(conn)?;

    if deleted == 0 {
        return Err(PersistenceError::VacationNotFound(vacation_id.to_string()));
    }
    Ok(())
}
}

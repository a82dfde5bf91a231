// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Work standard mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use tracing::info;

use crate::data_models::NewWorkStandard;
use crate::diesel_schema::standards;
use crate::error::PersistenceError;

fn hours_column(hours: u32) -> Result<i32, PersistenceError> {
    hours
        .to_i32()
        .ok_or_else(|| PersistenceError::ConstraintViolation(format!("hours {hours} out of range")))
}

backend_fn! {
/// Inserts a work standard.
///
/// # Errors
///
/// Returns `PersistenceError::ConstraintViolation` if a standard already
/// exists for the same month, year and gender.
pub fn insert_standard(conn: &mut _, standard: &NewWorkStandard) -> Result<(), PersistenceError> {
    info!(
        standard_id = %standard.id,
        month = standard.month,
        year = standard.year,
        gender_id = standard.gender_id,
        "Creating work standard"
    );

    diesel::insert_into(standards::table)
        .values((
            standards::id.eq(&standard.id),
            standards::month.eq(i32::from(standard.month)),
            standards::year.eq(standard.year),
            standards::hours.eq(hours_column(standard.hours)?),
            standards::gender_id.eq(standard.gender_id),
        ))
        .execute(conn)?;

    Ok(())
}
}

backend_fn! {
/// Changes the hours of a standard.
///
/// # Errors
///
/// Returns `PersistenceError::StandardNotFound` if it does not exist.
pub fn update_standard_hours(
    conn: &mut _,
    standard_id: &str,
    hours: u32,
) -> Result<(), PersistenceError> {
    info!(standard_id, hours, "Updating work standard");

    let existing: i64 = standards::table
        .filter(standards::id.eq(standard_id))
        .count()
        .get_result(conn)?;
    if existing == 0 {
        return Err(PersistenceError::StandardNotFound(standard_id.to_string()));
    }

    diesel::update(standards::table.filter(standards::id.eq(standard_id)))
        .set(standards::hours.eq(hours_column(hours)?))
        .execute(conn)?;

    Ok(())
}
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Work standard queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use num_traits::ToPrimitive;
use timetrack_domain::WorkStandard;

use crate::diesel_schema::standards;
use crate::error::PersistenceError;

/// Diesel Queryable struct for standard rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = standards)]
struct StandardRow {
    id: String,
    month: i32,
    year: i32,
    hours: i32,
    gender_id: i32,
}

impl TryFrom<StandardRow> for WorkStandard {
    type Error = PersistenceError;

    fn try_from(row: StandardRow) -> Result<Self, Self::Error> {
        let month: u8 = row.month.to_u8().ok_or_else(|| {
            PersistenceError::InvalidStoredValue(format!(
                "standard {} has month {}",
                row.id, row.month
            ))
        })?;
        let hours: u32 = row.hours.to_u32().ok_or_else(|| {
            PersistenceError::InvalidStoredValue(format!(
                "standard {} has hours {}",
                row.id, row.hours
            ))
        })?;

        Ok(Self {
            id: row.id,
            month,
            year: row.year,
            hours,
            gender_id: row.gender_id,
        })
    }
}

backend_fn! {
/// Lists the standards of one year ordered by month, then gender.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn list_standards(conn: &mut _, year: i32) -> Result<Vec<WorkStandard>, PersistenceError> {
    let rows: Vec<StandardRow> = standards::table
        .filter(standards::year.eq(year))
        .order((standards::month.asc(), standards::gender_id.asc()))
        .select(StandardRow::as_select())
        .load(conn)?;

    rows.into_iter().map(WorkStandard::try_from).collect()
}
}

backend_fn! {
/// Retrieves the standard of one month for one gender group.
///
/// # Errors
///
/// Returns `PersistenceError::StandardNotFound` if none is stored.
pub fn get_standard(
    conn: &mut _,
    month: i32,
    year: i32,
    gender_id: i32,
) -> Result<WorkStandard, PersistenceError> {
    let result: Result<StandardRow, diesel::result::Error> = standards::table
        .filter(standards::month.eq(month))
        .filter(standards::year.eq(year))
        .filter(standards::gender_id.eq(gender_id))
        .select(StandardRow::as_select())
        .first(conn);

    match result {
        Ok(row) => WorkStandard::try_from(row),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::StandardNotFound(format!(
            "month={month}, year={year}, gender={gender_id}"
        ))),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

backend_fn! {
/// Retrieves one standard by identifier.
///
/// # Errors
///
/// Returns `PersistenceError::StandardNotFound` if it does not exist.
pub fn get_standard_by_id(conn: &mut _, standard_id: &str) -> Result<WorkStandard, PersistenceError> {
    let result: Result<StandardRow, diesel::result::Error> = standards::table
        .filter(standards::id.eq(standard_id))
        .select(StandardRow::as_select())
        .first(conn);

    match result {
        Ok(row) => WorkStandard::try_from(row),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::StandardNotFound(standard_id.to_string()))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

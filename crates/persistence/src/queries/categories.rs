// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report category queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use timetrack_domain::ReportCategory;
use tracing::debug;

use crate::diesel_schema::report_types;
use crate::error::PersistenceError;

/// Diesel Queryable struct for category rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = report_types)]
pub(crate) struct CategoryRow {
    id: String,
    name: String,
    system_name: String,
}

impl From<CategoryRow> for ReportCategory {
    fn from(row: CategoryRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            system_name: row.system_name,
        }
    }
}

backend_fn! {
/// Lists all report categories ordered by name.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn list_categories(conn: &mut _) -> Result<Vec<ReportCategory>, PersistenceError> {
    let rows: Vec<CategoryRow> = report_types::table
        .order(report_types::name.asc())
        .select(CategoryRow::as_select())
        .load(conn)?;

    Ok(rows.into_iter().map(ReportCategory::from).collect())
}
}

backend_fn! {
/// Looks up a category by its system name.
///
/// # Errors
///
/// Returns `PersistenceError::CategoryNotFound` if no category has the name.
pub fn get_category_by_system_name(
    conn: &mut _,
    system_name: &str,
) -> Result<ReportCategory, PersistenceError> {
    debug!(system_name, "Looking up report category");

    let result: Result<CategoryRow, diesel::result::Error> = report_types::table
        .filter(report_types::system_name.eq(system_name))
        .select(CategoryRow::as_select())
        .first(conn);

    match result {
        Ok(row) => Ok(ReportCategory::from(row)),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::CategoryNotFound(system_name.to_string()))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

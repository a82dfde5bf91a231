// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar day mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::backend::PersistenceBackend;
use crate::data_models::NewCalendarDay;
use crate::diesel_schema::calendar_days;
use crate::error::PersistenceError;

backend_fn! {
/// Inserts a calendar day and returns its identifier.
///
/// Several rows may exist for the same date.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn insert_calendar_day(conn: &mut _, day: &NewCalendarDay) -> Result<i64, PersistenceError> {
    diesel::insert_into(calendar_days::table)
        .values((
            calendar_days::day.eq(i32::from(day.date.day())),
            calendar_days::month.eq(i32::from(u8::from(day.date.month()))),
            calendar_days::year.eq(day.date.year()),
            calendar_days::kind.eq(day.kind.as_str()),
            calendar_days::is_paid_vacation.eq(i32::from(day.is_paid_vacation)),
            calendar_days::description.eq(day.description.as_deref()),
        ))
        .execute(conn)?;

    let calendar_day_id: i64 = conn.get_last_insert_rowid()?;

    info!(calendar_day_id, date = %day.date, kind = day.kind.as_str(), "Created calendar day");

    Ok(calendar_day_id)
}
}

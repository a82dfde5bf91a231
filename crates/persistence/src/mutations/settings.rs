// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Global setting mutations.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};
use tracing::info;

use crate::diesel_schema::settings;
use crate::error::PersistenceError;

backend_fn! {
/// Stores a setting, replacing any previous value.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn upsert_setting(conn: &mut _, key: &str, value: &str) -> Result<(), PersistenceError> {
    info!(key, value, "Storing setting");

    conn.transaction::<_, PersistenceError, _>(|conn| {
        let updated: usize = diesel::update(settings::table.filter(settings::setting_key.eq(key)))
            .set(settings::setting_value.eq(value))
            .execute(conn)?;

        if updated == 0 {
            let existing: i64 = settings::table
                .filter(settings::setting_key.eq(key))
                .count()
                .get_result(conn)?;
            // MySQL reports zero affected rows when the value is unchanged
            if existing == 0 {
                diesel::insert_into(settings::table)
                    .values((settings::setting_key.eq(key), settings::setting_value.eq(value)))
                    .execute(conn)?;
            }
        }
        Ok(())
    })
}
}

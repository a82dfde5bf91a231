// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Global setting queries.

use diesel::prelude::*;
use diesel::{MysqlConnection, SqliteConnection};

use crate::diesel_schema::settings;
use crate::error::PersistenceError;

backend_fn! {
/// Reads the raw value of a setting.
///
/// # Errors
///
/// Returns `PersistenceError::SettingNotFound` if the key has no value.
pub fn get_setting(conn: &mut _, key: &str) -> Result<String, PersistenceError> {
    let result: Result<String, diesel::result::Error> = settings::table
        .filter(settings::setting_key.eq(key))
        .select(settings::setting_value)
        .first(conn);

    match result {
        Ok(value) => Ok(value),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::SettingNotFound(key.to_string())),
        Err(e) => Err(PersistenceError::from(e)),
    }
}
}

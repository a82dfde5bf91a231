// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Updates and deletes that match no row report the addressed record as
//! not found instead of succeeding silently.

pub mod calendar;
pub mod reports;
pub mod settings;
pub mod standards;
pub mod vacations;

pub use calendar::{insert_calendar_day_mysql, insert_calendar_day_sqlite};
pub use reports::{
    delete_reports_for_day_mysql, delete_reports_for_day_sqlite, insert_report_mysql,
    insert_report_sqlite, update_report_mysql, update_report_sqlite,
};
pub use settings::{upsert_setting_mysql, upsert_setting_sqlite};
pub use standards::{
    insert_standard_mysql, insert_standard_sqlite, update_standard_hours_mysql,
    update_standard_hours_sqlite,
};
pub use vacations::{
    delete_vacation_mysql, delete_vacation_sqlite, insert_vacation_mysql, insert_vacation_sqlite,
    update_vacation_status_mysql, update_vacation_status_sqlite,
};

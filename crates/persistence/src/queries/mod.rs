// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries.
//!
//! - `categories`: report categories
//! - `reports`: time entries and their monthly aggregates
//! - `vacations`: vacation requests
//! - `calendar`: calendar days and holidays
//! - `standards`: monthly working-hour norms
//! - `settings`: global settings
//!
//! Every query exists as a `_sqlite` and a `_mysql` function generated by
//! `backend_fn!`; the `Persistence` adapter picks one per connection.

pub mod calendar;
pub mod categories;
pub mod reports;
pub mod settings;
pub mod standards;
pub mod vacations;

pub use calendar::{
    fetch_holidays_for_year_mysql, fetch_holidays_for_year_sqlite, get_calendar_day_mysql,
    get_calendar_day_sqlite, list_calendar_month_mysql, list_calendar_month_sqlite,
    list_calendar_year_mysql, list_calendar_year_sqlite,
};
pub use categories::{
    get_category_by_system_name_mysql, get_category_by_system_name_sqlite, list_categories_mysql,
    list_categories_sqlite,
};
pub use reports::{
    count_reports_in_category_mysql, count_reports_in_category_sqlite, get_report_mysql,
    get_report_sqlite, list_reports_mysql, list_reports_sqlite, total_hours_mysql,
    total_hours_sqlite,
};
pub use settings::{get_setting_mysql, get_setting_sqlite};
pub use standards::{
    get_standard_by_id_mysql, get_standard_by_id_sqlite, get_standard_mysql, get_standard_sqlite,
    list_standards_mysql, list_standards_sqlite,
};
pub use vacations::{
    get_vacation_mysql, get_vacation_sqlite, list_all_vacations_mysql, list_all_vacations_sqlite,
    list_vacation_years_mysql, list_vacation_years_sqlite, list_vacations_mysql,
    list_vacations_sqlite,
};

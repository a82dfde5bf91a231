// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service layer of TimeTrack.
//!
//! Handlers validate wire input, read and write through
//! [`timetrack_persistence::Persistence`], and hand counting and balance
//! arithmetic to [`timetrack_domain`]. Errors from lower layers are
//! translated into [`ApiError`] explicitly.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_domain_error, translate_persistence_error};
pub use handlers::calendar::{create_calendar_day, list_calendar_month, list_calendar_year};
pub use handlers::categories::{list_categories, resolve_well_known_categories};
pub use handlers::reports::{
    create_report, delete_report, get_month_stats, list_reports, update_report,
};
pub use handlers::standards::{create_standard, list_standards, update_standard};
pub use handlers::vacations::{
    VacationSnapshot, change_vacation_status, create_vacation, delete_vacation,
    get_vacation_stats, list_all_vacations, list_vacation_years, list_vacations, load_vacations,
    vacation_stats,
};
pub use request_response::{
    CalendarDayInfo, CategoryInfo, ChangeVacationStatusRequest, CreateCalendarDayRequest,
    CreateReportRequest, CreateStandardRequest, CreateVacationRequest, HolidayInfo,
    MessageResponse, MonthStatsResponse, ReportInfo, StandardInfo, UpdateReportRequest,
    UpdateStandardRequest, VacationInfo, VacationStatsResponse,
};

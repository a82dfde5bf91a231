// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time report handlers.

use time::Date;
use timetrack_domain::{
    MonthlySummary, Report, ReportCategory, ReportPeriod, UserId, WellKnownCategories,
    aggregate_monthly_summary, validate_category_name, validate_identifier, validate_report_hours,
};
use timetrack_persistence::{NewReport, Persistence, PersistenceError};
use tracing::{debug, info};

use super::{new_record_id, parse_date_parts, parse_period, parse_user};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    CreateReportRequest, MessageResponse, MonthStatsResponse, ReportInfo, UpdateReportRequest,
};

/// Looks up a category by the system name a client sent.
///
/// An unknown name is the client's mistake, not a missing resource.
fn resolve_category(
    persistence: &mut Persistence,
    system_name: &str,
) -> Result<ReportCategory, ApiError> {
    validate_category_name(system_name).map_err(translate_domain_error)?;
    persistence
        .get_category_by_system_name(system_name)
        .map_err(|err| match err {
            PersistenceError::CategoryNotFound(name) => ApiError::InvalidInput {
                field: String::from("typeSystemName"),
                message: format!("Unknown report category '{name}'"),
            },
            other => translate_persistence_error(other, "loading report category"),
        })
}

/// Lists a user's entries for one month, ordered by day.
///
/// # Errors
///
/// Returns an error if the input is invalid or the read fails.
pub fn list_reports(
    persistence: &mut Persistence,
    user_id: &str,
    month: i32,
    year: i32,
) -> Result<Vec<ReportInfo>, ApiError> {
    let user_id: UserId = parse_user(user_id)?;
    let period: ReportPeriod = parse_period(year, month)?;

    let reports: Vec<Report> = persistence
        .list_reports(&user_id, period)
        .map_err(|err| translate_persistence_error(err, "listing reports"))?;
    Ok(reports.into_iter().map(ReportInfo::from).collect())
}

/// Computes a user's monthly statistics.
///
/// Total hours, work entries and medical entries are read one after the
/// other; the first failed read aborts the request.
///
/// # Errors
///
/// Returns an error if the input is invalid or any read fails.
pub fn get_month_stats(
    persistence: &mut Persistence,
    categories: &WellKnownCategories,
    user_id: &str,
    month: i32,
    year: i32,
) -> Result<MonthStatsResponse, ApiError> {
    let user_id: UserId = parse_user(user_id)?;
    let period: ReportPeriod = parse_period(year, month)?;

    let summary: MonthlySummary =
        aggregate_monthly_summary(persistence, categories, &user_id, period)
            .map_err(|err| translate_persistence_error(err, "aggregating monthly statistics"))?;
    debug!(
        user_id = %user_id,
        year,
        month,
        total_hours = summary.total_hours,
        "Computed monthly statistics"
    );

    Ok(MonthStatsResponse::from(summary))
}

/// Logs hours for one day.
///
/// # Errors
///
/// Returns an error if any field is invalid, the category is unknown, or
/// the write fails.
pub fn create_report(
    persistence: &mut Persistence,
    request: &CreateReportRequest,
) -> Result<ReportInfo, ApiError> {
    let user_id: UserId = parse_user(&request.user_id)?;
    let date: Date = parse_date_parts(request.year, request.month, request.day)?;
    validate_report_hours(request.hours).map_err(translate_domain_error)?;
    let category: ReportCategory = resolve_category(persistence, &request.type_system_name)?;

    let report: NewReport = NewReport {
        id: new_record_id(),
        user_id,
        date,
        hours: request.hours,
        category_id: category.id,
    };
    let stored: Report = persistence
        .create_report(&report)
        .map_err(|err| translate_persistence_error(err, "creating report"))?;
    info!(report_id = %stored.id, user_id = %stored.user_id, "Created report");

    Ok(ReportInfo::from(stored))
}

/// Changes the hours and category of an entry.
///
/// # Errors
///
/// Returns an error if any field is invalid, the category is unknown, or
/// the report does not exist.
pub fn update_report(
    persistence: &mut Persistence,
    request: &UpdateReportRequest,
) -> Result<ReportInfo, ApiError> {
    let report_id: String =
        validate_identifier("id", &request.id).map_err(translate_domain_error)?;
    validate_report_hours(request.hours).map_err(translate_domain_error)?;
    let category: ReportCategory = resolve_category(persistence, &request.type_system_name)?;

    let stored: Report = persistence
        .update_report(&report_id, request.hours, &category.id)
        .map_err(|err| translate_persistence_error(err, "updating report"))?;
    info!(report_id = %stored.id, "Updated report");

    Ok(ReportInfo::from(stored))
}

/// Deletes a user's entries for one day.
///
/// # Errors
///
/// Returns an error if the input is invalid or there is nothing to delete.
pub fn delete_report(
    persistence: &mut Persistence,
    user_id: &str,
    day: i32,
    month: i32,
    year: i32,
) -> Result<MessageResponse, ApiError> {
    let user_id: UserId = parse_user(user_id)?;
    let date: Date = parse_date_parts(year, month, day)?;

    let deleted: usize = persistence
        .delete_reports_for_day(&user_id, date)
        .map_err(|err| translate_persistence_error(err, "deleting report"))?;
    info!(user_id = %user_id, %date, deleted, "Deleted reports");

    Ok(MessageResponse {
        message: String::from("Report deleted successfully"),
    })
}

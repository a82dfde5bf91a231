// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Field names are camelCase on the wire. Dates travel as `YYYY-MM-DD`
//! strings and timestamps as `YYYY-MM-DD HH:MM:SS`.

use serde::{Deserialize, Serialize};
use timetrack_domain::{
    CalendarDay, EntitlementBalance, HolidayEntry, MonthlySummary, Report, ReportCategory,
    VacationComputation, WorkStandard, format_date, format_timestamp,
};

// ========================================================================
// Reports
// ========================================================================

/// API request to log hours for one day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    /// The reporting user (UUID).
    pub user_id: String,
    /// Day of month.
    pub day: i32,
    /// Month number, 1-12.
    pub month: i32,
    /// Year.
    pub year: i32,
    /// Hours logged, 0-24.
    pub hours: f64,
    /// System name of the report category.
    pub type_system_name: String,
}

/// API request to change the hours or category of an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateReportRequest {
    /// The report identifier (UUID).
    pub id: String,
    /// New hours, 0-24.
    pub hours: f64,
    /// System name of the new category.
    pub type_system_name: String,
}

/// A time entry as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportInfo {
    /// The report identifier.
    pub id: String,
    /// The reporting user.
    pub user_id: String,
    /// Day of month.
    pub day: u8,
    /// Month number.
    pub month: u8,
    /// Year.
    pub year: i32,
    /// Hours logged.
    pub hours: f64,
    /// Category identifier.
    pub type_id: String,
    /// Category display name.
    pub type_name: String,
    /// Category system name.
    pub type_system_name: String,
}

impl From<Report> for ReportInfo {
    fn from(report: Report) -> Self {
        Self {
            id: report.id,
            user_id: report.user_id.to_string(),
            day: report.date.day(),
            month: u8::from(report.date.month()),
            year: report.date.year(),
            hours: report.hours,
            type_id: report.category.id,
            type_name: report.category.name,
            type_system_name: report.category.system_name,
        }
    }
}

/// Monthly statistics of one user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthStatsResponse {
    /// Sum of reported hours.
    pub total_hours: f64,
    /// Number of work entries.
    pub work_days: u32,
    /// Number of medical entries.
    pub medical_days: u32,
}

impl From<MonthlySummary> for MonthStatsResponse {
    fn from(summary: MonthlySummary) -> Self {
        Self {
            total_hours: summary.total_hours,
            work_days: summary.work_days,
            medical_days: summary.medical_days,
        }
    }
}

/// Generic confirmation for operations without a payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    /// A success message.
    pub message: String,
}

// ========================================================================
// Vacations
// ========================================================================

/// API request to file a vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVacationRequest {
    /// The requesting user (UUID).
    pub user_id: String,
    /// First day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day, `YYYY-MM-DD`.
    pub end_date: String,
    /// Entitlement year the request is booked against.
    pub year: i32,
    /// Optional free text.
    #[serde(default)]
    pub description: String,
    /// Initial status.
    pub status: String,
}

/// API request to approve, reject or reopen a vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeVacationStatusRequest {
    /// The vacation identifier (UUID).
    pub id: String,
    /// The new status.
    pub status: String,
}

/// A holiday overlapping a vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayInfo {
    /// Calendar day identifier, when stored.
    pub id: Option<i64>,
    /// Day of month.
    pub day: u8,
    /// Month number.
    pub month: u8,
    /// Year.
    pub year: i32,
    /// Whether the holiday still counts as a vacation day.
    pub is_paid_vacation: bool,
    /// Optional label.
    pub description: Option<String>,
}

impl From<HolidayEntry> for HolidayInfo {
    fn from(holiday: HolidayEntry) -> Self {
        Self {
            id: holiday.id,
            day: holiday.day(),
            month: u8::from(holiday.month()),
            year: holiday.date.year(),
            is_paid_vacation: holiday.is_paid_vacation,
            description: holiday.description,
        }
    }
}

/// A vacation together with its counted days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationInfo {
    /// The vacation identifier.
    pub id: String,
    /// The requesting user.
    pub user_id: String,
    /// First day, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day, `YYYY-MM-DD`.
    pub end_date: String,
    /// Entitlement year.
    pub year: i32,
    /// Free text.
    pub description: String,
    /// Current status.
    pub status: String,
    /// Days charged against the entitlement.
    pub count_day: u32,
    /// Holidays inside the range, in date order.
    pub holidays: Vec<HolidayInfo>,
    /// Creation timestamp.
    pub create_at: String,
}

impl From<VacationComputation> for VacationInfo {
    fn from(row: VacationComputation) -> Self {
        let request = row.request;
        Self {
            id: request.id,
            user_id: request.user_id.to_string(),
            start_date: format_date(request.start_date),
            end_date: format_date(request.end_date),
            year: request.year,
            description: request.description,
            status: request.status.as_str().to_string(),
            count_day: row.chargeable_days,
            holidays: row.holidays.into_iter().map(HolidayInfo::from).collect(),
            create_at: format_timestamp(request.created_at),
        }
    }
}

/// Entitlement balance of one user for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationStatsResponse {
    /// Days of approved vacations.
    pub approved: u32,
    /// Days of vacations awaiting a decision.
    pub consideration: u32,
    /// Days still available.
    pub free: u32,
    /// Yearly entitlement.
    pub all: u32,
}

impl From<EntitlementBalance> for VacationStatsResponse {
    fn from(balance: EntitlementBalance) -> Self {
        Self {
            approved: balance.approved,
            consideration: balance.consideration,
            free: balance.free,
            all: balance.all,
        }
    }
}

// ========================================================================
// Calendar
// ========================================================================

/// API request to mark a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarDayRequest {
    /// Day of month.
    pub day: i32,
    /// Month number, 1-12.
    pub month: i32,
    /// Year.
    pub year: i32,
    /// `holiday`, `pre_holiday` or `workday`.
    pub kind: String,
    /// Whether a holiday still counts as a vacation day.
    #[serde(default)]
    pub is_paid_vacation: bool,
    /// Optional label.
    #[serde(default)]
    pub description: Option<String>,
}

/// A marked calendar day as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDayInfo {
    /// Calendar day identifier.
    pub id: i64,
    /// Day of month.
    pub day: u8,
    /// Month number.
    pub month: u8,
    /// Year.
    pub year: i32,
    /// Kind of day.
    pub kind: String,
    /// Whether a holiday still counts as a vacation day.
    pub is_paid_vacation: bool,
    /// Optional label.
    pub description: Option<String>,
}

impl From<CalendarDay> for CalendarDayInfo {
    fn from(day: CalendarDay) -> Self {
        Self {
            id: day.id,
            day: day.date.day(),
            month: u8::from(day.date.month()),
            year: day.date.year(),
            kind: day.kind.as_str().to_string(),
            is_paid_vacation: day.is_paid_vacation,
            description: day.description,
        }
    }
}

// ========================================================================
// Categories
// ========================================================================

/// A report category as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    /// Category identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Stable machine name.
    pub system_name: String,
}

impl From<ReportCategory> for CategoryInfo {
    fn from(category: ReportCategory) -> Self {
        Self {
            id: category.id,
            name: category.name,
            system_name: category.system_name,
        }
    }
}

// ========================================================================
// Work standards
// ========================================================================

/// API request to define a monthly norm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateStandardRequest {
    /// Month number, 1-12.
    pub month: i32,
    /// Year.
    pub year: i32,
    /// Norm in hours.
    pub hours: i32,
    /// Gender group.
    pub gender_id: i32,
}

/// API request to change the hours of a norm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStandardRequest {
    /// The standard identifier (UUID).
    pub id: String,
    /// New norm in hours.
    pub hours: i32,
}

/// A work standard as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardInfo {
    /// Standard identifier.
    pub id: String,
    /// Month number.
    pub month: u8,
    /// Year.
    pub year: i32,
    /// Norm in hours.
    pub hours: u32,
    /// Gender group.
    pub gender_id: i32,
}

impl From<WorkStandard> for StandardInfo {
    fn from(standard: WorkStandard) -> Self {
        Self {
            id: standard.id,
            month: standard.month,
            year: standard.year,
            hours: standard.hours,
            gender_id: standard.gender_id,
        }
    }
}

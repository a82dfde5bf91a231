// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::{Date, Month, PrimitiveDateTime};
use uuid::Uuid;

/// Identifier of an employee.
///
/// Users live in an external identity system; this crate only requires the
/// identifier to be a UUID. The value is stored in canonical hyphenated,
/// lowercase form so equality is textual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Parses a user identifier.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a UUID.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        Uuid::parse_str(value)
            .map(|uuid| Self(uuid.hyphenated().to_string()))
            .map_err(|_| DomainError::InvalidIdentifier {
                field: "userId",
                value: value.to_string(),
            })
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar month of a specific year.
///
/// Reports and monthly statistics are always scoped to one period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportPeriod {
    year: i32,
    month: Month,
}

impl ReportPeriod {
    /// Creates a period from a year and a 1-based month number.
    ///
    /// # Errors
    ///
    /// Returns an error if the month is outside 1-12.
    pub fn new(year: i32, month: u8) -> Result<Self, DomainError> {
        let month: Month = Month::try_from(month).map_err(|_| DomainError::InvalidMonth(month))?;
        Ok(Self { year, month })
    }

    /// The year of the period.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// The month of the period.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// The month as a 1-based number.
    #[must_use]
    pub fn month_number(&self) -> u8 {
        u8::from(self.month)
    }
}

/// Approval state of a vacation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VacationStatus {
    /// Approved; counts against the entitlement.
    Approved,
    /// Awaiting a decision; reserves entitlement.
    Consideration,
    /// Rejected; does not affect the balance.
    Rejected,
}

impl VacationStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Consideration => "consideration",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for VacationStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "consideration" => Ok(Self::Consideration),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidVacationStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A report category ("type" of a time entry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCategory {
    /// Persisted identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Stable machine name, e.g. `work` or `medical`.
    pub system_name: String,
}

/// Categories the monthly statistics depend on.
///
/// Resolved once at startup so that aggregation never depends on a string
/// lookup at request time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WellKnownCategories {
    work: ReportCategory,
    medical: ReportCategory,
}

impl WellKnownCategories {
    /// System name of the work category.
    pub const WORK: &'static str = "work";
    /// System name of the medical (sick leave) category.
    pub const MEDICAL: &'static str = "medical";

    /// Resolves the well-known categories from the full category list.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::MissingCategory` naming the first category
    /// that is absent.
    pub fn resolve(categories: &[ReportCategory]) -> Result<Self, DomainError> {
        let find = |system_name: &str| -> Result<ReportCategory, DomainError> {
            categories
                .iter()
                .find(|c| c.system_name == system_name)
                .cloned()
                .ok_or_else(|| DomainError::MissingCategory {
                    system_name: system_name.to_string(),
                })
        };

        Ok(Self {
            work: find(Self::WORK)?,
            medical: find(Self::MEDICAL)?,
        })
    }

    /// The work category.
    #[must_use]
    pub const fn work(&self) -> &ReportCategory {
        &self.work
    }

    /// The medical category.
    #[must_use]
    pub const fn medical(&self) -> &ReportCategory {
        &self.medical
    }
}

/// A single time entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Persisted identifier.
    pub id: String,
    /// The reporting user.
    pub user_id: UserId,
    /// The calendar date of the entry.
    pub date: Date,
    /// Hours logged, 0-24.
    pub hours: f64,
    /// The entry's category.
    pub category: ReportCategory,
}

/// Kind of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarDayKind {
    /// A public holiday.
    Holiday,
    /// The shortened working day before a holiday.
    PreHoliday,
    /// A working day moved onto a weekend.
    Workday,
}

impl CalendarDayKind {
    /// Converts this kind to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Holiday => "holiday",
            Self::PreHoliday => "pre_holiday",
            Self::Workday => "workday",
        }
    }
}

impl FromStr for CalendarDayKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "holiday" => Ok(Self::Holiday),
            "pre_holiday" => Ok(Self::PreHoliday),
            "workday" => Ok(Self::Workday),
            _ => Err(DomainError::InvalidCalendarDayKind(s.to_string())),
        }
    }
}

/// A marked day in the company calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Persisted identifier.
    pub id: i64,
    /// The date.
    pub date: Date,
    /// What kind of day this is.
    pub kind: CalendarDayKind,
    /// Whether a holiday still counts as a chargeable vacation day.
    pub is_paid_vacation: bool,
    /// Optional label, e.g. the holiday's name.
    pub description: Option<String>,
}

/// Monthly working-hour norm for a gender group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkStandard {
    /// Persisted identifier.
    pub id: String,
    /// Month number, 1-12.
    pub month: u8,
    /// Year.
    pub year: i32,
    /// Norm in hours.
    pub hours: u32,
    /// Gender group the norm applies to.
    pub gender_id: i32,
}

/// A vacation request as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRequest {
    /// Persisted identifier.
    pub id: String,
    /// The requesting user.
    pub user_id: UserId,
    /// First day of the vacation, inclusive.
    pub start_date: Date,
    /// Last day of the vacation, inclusive.
    pub end_date: Date,
    /// Entitlement year the request is booked against.
    pub year: i32,
    /// Free-text description, empty when none was given.
    pub description: String,
    /// Current approval state.
    pub status: VacationStatus,
    /// Creation timestamp (UTC).
    pub created_at: PrimitiveDateTime,
}

/// Yearly vacation entitlement in days.
///
/// A single global value in this system; injected explicitly into the
/// balance calculation rather than looked up inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VacationEntitlement(u32);

impl VacationEntitlement {
    /// Creates an entitlement of `days` days.
    #[must_use]
    pub const fn new(days: u32) -> Self {
        Self(days)
    }

    /// The number of days.
    #[must_use]
    pub const fn days(&self) -> u32 {
        self.0
    }
}

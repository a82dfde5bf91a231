// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Year is outside the supported range.
    InvalidYear(i32),
    /// Month is outside 1-12.
    InvalidMonth(u8),
    /// Day is outside 1-31.
    InvalidDay(u8),
    /// The day/month/year combination is not a real calendar date.
    InvalidCalendarDate {
        /// The year.
        year: i32,
        /// The month number.
        month: u8,
        /// The day of month.
        day: u8,
    },
    /// Reported hours are outside 0-24.
    InvalidReportHours(String),
    /// Standard hours are negative.
    InvalidStandardHours(i32),
    /// A user or record identifier is not a valid UUID.
    InvalidIdentifier {
        /// The field holding the identifier.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A category system name is empty.
    InvalidCategoryName(String),
    /// Vacation status string is not recognised.
    InvalidVacationStatus(String),
    /// Calendar day kind string is not recognised.
    InvalidCalendarDayKind(String),
    /// Vacation end date precedes its start date.
    InvertedVacationRange {
        /// The requested start date.
        start_date: time::Date,
        /// The requested end date.
        end_date: time::Date,
    },
    /// A well-known report category could not be resolved.
    MissingCategory {
        /// The system name that was looked up.
        system_name: String,
    },
    /// Failed to parse a date or timestamp from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidYear(year) => {
                write!(f, "Invalid year: {year}. Must be between 1900 and 2100")
            }
            Self::InvalidMonth(month) => {
                write!(f, "Invalid month: {month}. Must be between 1 and 12")
            }
            Self::InvalidDay(day) => write!(f, "Invalid day: {day}. Must be between 1 and 31"),
            Self::InvalidCalendarDate { year, month, day } => {
                write!(f, "{year:04}-{month:02}-{day:02} is not a valid calendar date")
            }
            Self::InvalidReportHours(hours) => {
                write!(f, "Invalid hours: {hours}. Must be between 0 and 24")
            }
            Self::InvalidStandardHours(hours) => {
                write!(f, "Invalid standard hours: {hours}. Must not be negative")
            }
            Self::InvalidIdentifier { field, value } => {
                write!(f, "Invalid {field}: '{value}' is not a valid UUID")
            }
            Self::InvalidCategoryName(msg) => write!(f, "Invalid category: {msg}"),
            Self::InvalidVacationStatus(status) => {
                write!(
                    f,
                    "Invalid vacation status: '{status}'. Must be 'approved', 'consideration' or 'rejected'"
                )
            }
            Self::InvalidCalendarDayKind(kind) => {
                write!(
                    f,
                    "Invalid calendar day kind: '{kind}'. Must be 'holiday', 'pre_holiday' or 'workday'"
                )
            }
            Self::InvertedVacationRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "Vacation end date {end_date} is before its start date {start_date}"
                )
            }
            Self::MissingCategory { system_name } => {
                write!(f, "Report category '{system_name}' does not exist")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}

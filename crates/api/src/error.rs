// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use timetrack_domain::{DomainError, format_date};
use timetrack_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain and persistence errors and represent the
/// API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// The operation that failed.
        operation: String,
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { operation, message } => {
                write!(f, "Internal error while {operation}: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

fn invalid(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::InvalidYear(_) => invalid("year", &err),
        DomainError::InvalidMonth(_) => invalid("month", &err),
        DomainError::InvalidDay(_) | DomainError::InvalidCalendarDate { .. } => {
            invalid("day", &err)
        }
        DomainError::InvalidReportHours(_) | DomainError::InvalidStandardHours(_) => {
            invalid("hours", &err)
        }
        DomainError::InvalidIdentifier { field, .. } => invalid(field, &err),
        DomainError::InvalidCategoryName(_) => invalid("typeSystemName", &err),
        DomainError::InvalidVacationStatus(_) => invalid("status", &err),
        DomainError::InvalidCalendarDayKind(_) => invalid("kind", &err),
        DomainError::DateParseError { .. } => invalid("date", &err),
        DomainError::InvertedVacationRange {
            start_date,
            end_date,
        } => ApiError::InvalidInput {
            field: String::from("endDate"),
            message: format!(
                "End date {} is before start date {}",
                format_date(*end_date),
                format_date(*start_date)
            ),
        },
        DomainError::MissingCategory { system_name } => ApiError::DomainRuleViolation {
            rule: String::from("well_known_category"),
            message: format!("Report category '{system_name}' must exist"),
        },
    }
}

/// Translates a persistence error into an API error.
///
/// Missing rows become `ResourceNotFound`, constraint violations become
/// `DomainRuleViolation`, and everything else is an `Internal` error tagged
/// with `operation`.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError, operation: &str) -> ApiError {
    match err {
        PersistenceError::CategoryNotFound(name) => ApiError::ResourceNotFound {
            resource_type: String::from("Category"),
            message: format!("Category '{name}' does not exist"),
        },
        PersistenceError::ReportNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Report"),
            message: format!("Report '{id}' does not exist"),
        },
        PersistenceError::VacationNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Vacation"),
            message: format!("Vacation '{id}' does not exist"),
        },
        PersistenceError::CalendarDayNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Calendar day"),
            message: format!("Calendar day {id} does not exist"),
        },
        PersistenceError::StandardNotFound(id) => ApiError::ResourceNotFound {
            resource_type: String::from("Standard"),
            message: format!("Standard '{id}' does not exist"),
        },
        PersistenceError::SettingNotFound(key) => ApiError::ResourceNotFound {
            resource_type: String::from("Setting"),
            message: format!("Setting '{key}' is not configured"),
        },
        PersistenceError::NotFound(message) => ApiError::ResourceNotFound {
            resource_type: String::from("Record"),
            message,
        },
        PersistenceError::ConstraintViolation(message) => ApiError::DomainRuleViolation {
            rule: String::from("storage_constraint"),
            message,
        },
        other => ApiError::Internal {
            operation: operation.to_string(),
            message: other.to_string(),
        },
    }
}

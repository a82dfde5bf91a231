// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timetrack_domain::DomainError;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// A database error occurred.
    DatabaseError(String),
    /// Database connection failed.
    DatabaseConnectionFailed(String),
    /// Database migration failed.
    MigrationFailed(String),
    /// Query execution failed.
    QueryFailed(String),
    /// Initialization error.
    InitializationError(String),
    /// Foreign key enforcement is not enabled.
    ForeignKeyEnforcementNotEnabled,
    /// A uniqueness or foreign key constraint rejected the write.
    ConstraintViolation(String),
    /// A stored value could not be converted into its domain type.
    InvalidStoredValue(String),
    /// No report category has the given system name.
    CategoryNotFound(String),
    /// The requested report was not found.
    ReportNotFound(String),
    /// The requested vacation was not found.
    VacationNotFound(String),
    /// The requested calendar day was not found.
    CalendarDayNotFound(i64),
    /// The requested work standard was not found.
    StandardNotFound(String),
    /// The requested setting has no stored value.
    SettingNotFound(String),
    /// The requested resource was not found.
    NotFound(String),
}

impl PersistenceError {
    /// Whether this error means the addressed record does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CategoryNotFound(_)
                | Self::ReportNotFound(_)
                | Self::VacationNotFound(_)
                | Self::CalendarDayNotFound(_)
                | Self::StandardNotFound(_)
                | Self::SettingNotFound(_)
                | Self::NotFound(_)
        )
    }
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DatabaseError(msg) => write!(f, "Database error: {msg}"),
            Self::DatabaseConnectionFailed(msg) => {
                write!(f, "Database connection failed: {msg}")
            }
            Self::MigrationFailed(msg) => write!(f, "Migration failed: {msg}"),
            Self::QueryFailed(msg) => write!(f, "Query failed: {msg}"),
            Self::InitializationError(msg) => write!(f, "Initialization error: {msg}"),
            Self::ForeignKeyEnforcementNotEnabled => {
                write!(f, "Foreign key enforcement is not enabled")
            }
            Self::ConstraintViolation(msg) => write!(f, "Constraint violation: {msg}"),
            Self::InvalidStoredValue(msg) => write!(f, "Invalid stored value: {msg}"),
            Self::CategoryNotFound(system_name) => {
                write!(f, "Report category '{system_name}' not found")
            }
            Self::ReportNotFound(id) => write!(f, "Report not found: {id}"),
            Self::VacationNotFound(id) => write!(f, "Vacation not found: {id}"),
            Self::CalendarDayNotFound(id) => write!(f, "Calendar day not found: {id}"),
            Self::StandardNotFound(msg) => write!(f, "Work standard not found: {msg}"),
            Self::SettingNotFound(key) => write!(f, "Setting '{key}' is not set"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<diesel::result::Error> for PersistenceError {
    fn from(err: diesel::result::Error) -> Self {
        use diesel::result::DatabaseErrorKind;

        match &err {
            diesel::result::Error::NotFound => Self::NotFound("Record not found".to_string()),
            diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::CheckViolation,
                info,
            ) => Self::ConstraintViolation(info.message().to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<diesel::ConnectionError> for PersistenceError {
    fn from(err: diesel::ConnectionError) -> Self {
        Self::DatabaseConnectionFailed(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::InvalidStoredValue(err.to_string())
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Work standard handlers.

use timetrack_domain::{WorkStandard, validate_identifier, validate_standard_hours};
use timetrack_persistence::{NewWorkStandard, Persistence};
use tracing::info;

use super::{new_record_id, parse_month, parse_year};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{CreateStandardRequest, StandardInfo, UpdateStandardRequest};

/// Lists the standards of a year.
///
/// # Errors
///
/// Returns an error if the year is invalid or the read fails.
pub fn list_standards(
    persistence: &mut Persistence,
    year: i32,
) -> Result<Vec<StandardInfo>, ApiError> {
    let year: i32 = parse_year(year)?;

    let standards: Vec<WorkStandard> = persistence
        .list_standards(year)
        .map_err(|err| translate_persistence_error(err, "listing standards"))?;
    Ok(standards.into_iter().map(StandardInfo::from).collect())
}

/// Defines the norm of one month for one gender group.
///
/// # Errors
///
/// Returns an error if any field is invalid or a norm already exists for
/// that month and group.
pub fn create_standard(
    persistence: &mut Persistence,
    request: &CreateStandardRequest,
) -> Result<StandardInfo, ApiError> {
    let hours: u32 = validate_standard_hours(request.hours).map_err(translate_domain_error)?;
    let month: u8 = parse_month(request.month)?;
    let year: i32 = parse_year(request.year)?;

    let standard: NewWorkStandard = NewWorkStandard {
        id: new_record_id(),
        month,
        year,
        hours,
        gender_id: request.gender_id,
    };
    let stored: WorkStandard = persistence
        .create_standard(&standard)
        .map_err(|err| translate_persistence_error(err, "creating standard"))?;
    info!(standard_id = %stored.id, month, year, "Created work standard");

    Ok(StandardInfo::from(stored))
}

/// Changes the hours of a norm.
///
/// # Errors
///
/// Returns an error if the id or hours are invalid or the standard does
/// not exist.
pub fn update_standard(
    persistence: &mut Persistence,
    request: &UpdateStandardRequest,
) -> Result<StandardInfo, ApiError> {
    let standard_id: String =
        validate_identifier("id", &request.id).map_err(translate_domain_error)?;
    let hours: u32 = validate_standard_hours(request.hours).map_err(translate_domain_error)?;

    let stored: WorkStandard = persistence
        .update_standard(&standard_id, hours)
        .map_err(|err| translate_persistence_error(err, "updating standard"))?;
    info!(standard_id = %stored.id, hours, "Updated work standard");

    Ok(StandardInfo::from(stored))
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation handlers.
//!
//! Reads happen in two steps. A [`VacationSnapshot`] is loaded from
//! persistence first, then the day counts and balances are computed from
//! the snapshot alone. The entitlement and the vacation list are separate
//! reads; a vacation stored between them is not reflected in the balance
//! computed from the earlier snapshot.

use std::slice;

use time::{Date, OffsetDateTime, PrimitiveDateTime};
use timetrack_domain::{
    EntitlementBalance, HolidayEntry, HolidayIndex, UserId, VacationComputation,
    VacationEntitlement, VacationRequest, VacationStatus, calculate_entitlement_balance,
    compute_vacation_rows, validate_identifier, validate_vacation_range, years_touched,
};
use timetrack_persistence::{NewVacation, Persistence};
use tracing::{debug, info, warn};

use super::{new_record_id, parse_user, parse_wire_date, parse_year};
use crate::error::{ApiError, translate_domain_error, translate_persistence_error};
use crate::request_response::{
    ChangeVacationStatusRequest, CreateVacationRequest, MessageResponse, VacationInfo,
    VacationStatsResponse,
};

/// Vacations of one year together with the holidays of every year they touch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacationSnapshot {
    /// The vacations as stored.
    pub requests: Vec<VacationRequest>,
    /// Holidays of every year the vacations touch.
    pub holidays: HolidayIndex,
}

impl VacationSnapshot {
    /// Runs the day counter over every vacation, preserving order.
    #[must_use]
    pub fn compute_rows(&self) -> Vec<VacationComputation> {
        compute_vacation_rows(self.requests.iter().cloned(), &self.holidays)
    }
}

fn load_holidays(
    persistence: &mut Persistence,
    requests: &[VacationRequest],
) -> Result<HolidayIndex, ApiError> {
    let mut index: HolidayIndex = HolidayIndex::default();
    for year in years_touched(requests) {
        let holidays: Vec<HolidayEntry> = persistence
            .fetch_holidays_for_year(year)
            .map_err(|err| translate_persistence_error(err, "loading holidays"))?;
        index.extend(holidays);
    }

    if index.overwritten() > 0 {
        warn!(
            overwritten = index.overwritten(),
            "Calendar lists the same holiday date more than once; later entries win"
        );
    }
    Ok(index)
}

/// Loads the vacations of `year` and the holidays they need.
///
/// With `user_id` set only that user's vacations are loaded, otherwise
/// every user's.
///
/// # Errors
///
/// Returns an internal error if any read fails.
pub fn load_vacations(
    persistence: &mut Persistence,
    user_id: Option<&UserId>,
    year: i32,
) -> Result<VacationSnapshot, ApiError> {
    let requests: Vec<VacationRequest> = match user_id {
        Some(user_id) => persistence.list_vacations(user_id, year),
        None => persistence.list_all_vacations(year),
    }
    .map_err(|err| translate_persistence_error(err, "loading vacations"))?;

    let holidays: HolidayIndex = load_holidays(persistence, &requests)?;
    debug!(
        year,
        vacations = requests.len(),
        holidays = holidays.len(),
        "Loaded vacation snapshot"
    );

    Ok(VacationSnapshot { requests, holidays })
}

/// Computes the entitlement balance from an already loaded snapshot.
#[must_use]
pub fn vacation_stats(
    entitlement: VacationEntitlement,
    snapshot: &VacationSnapshot,
) -> VacationStatsResponse {
    let rows: Vec<VacationComputation> = snapshot.compute_rows();
    let balance: EntitlementBalance = calculate_entitlement_balance(entitlement, &rows);
    VacationStatsResponse::from(balance)
}

/// Lists one user's vacations of a year with their counted days.
///
/// # Errors
///
/// Returns an error if the user or year is invalid, or a read fails.
pub fn list_vacations(
    persistence: &mut Persistence,
    user_id: &str,
    year: i32,
) -> Result<Vec<VacationInfo>, ApiError> {
    let user_id: UserId = parse_user(user_id)?;
    let year: i32 = parse_year(year)?;

    let snapshot: VacationSnapshot = load_vacations(persistence, Some(&user_id), year)?;
    Ok(snapshot
        .compute_rows()
        .into_iter()
        .map(VacationInfo::from)
        .collect())
}

/// Lists every user's vacations of a year with their counted days.
///
/// # Errors
///
/// Returns an error if the year is invalid or a read fails.
pub fn list_all_vacations(
    persistence: &mut Persistence,
    year: i32,
) -> Result<Vec<VacationInfo>, ApiError> {
    let year: i32 = parse_year(year)?;

    let snapshot: VacationSnapshot = load_vacations(persistence, None, year)?;
    Ok(snapshot
        .compute_rows()
        .into_iter()
        .map(VacationInfo::from)
        .collect())
}

/// Computes a user's entitlement balance for a year.
///
/// `entitlement` overrides the stored yearly entitlement when set.
///
/// # Errors
///
/// Returns an error if the input is invalid, the entitlement setting is
/// missing, or a read fails.
pub fn get_vacation_stats(
    persistence: &mut Persistence,
    entitlement: Option<VacationEntitlement>,
    user_id: &str,
    year: i32,
) -> Result<VacationStatsResponse, ApiError> {
    let user_id: UserId = parse_user(user_id)?;
    let year: i32 = parse_year(year)?;

    let entitlement: VacationEntitlement = match entitlement {
        Some(entitlement) => entitlement,
        None => persistence
            .get_yearly_entitlement()
            .map_err(|err| translate_persistence_error(err, "loading vacation entitlement"))?,
    };
    let snapshot: VacationSnapshot = load_vacations(persistence, Some(&user_id), year)?;

    Ok(vacation_stats(entitlement, &snapshot))
}

/// Files a new vacation.
///
/// The stored vacation is returned with its counted days.
///
/// # Errors
///
/// Returns an error if any field is invalid, the range is inverted, or the
/// write fails.
pub fn create_vacation(
    persistence: &mut Persistence,
    request: CreateVacationRequest,
) -> Result<VacationInfo, ApiError> {
    let user_id: UserId = parse_user(&request.user_id)?;
    let start_date: Date = parse_wire_date("startDate", &request.start_date)?;
    let end_date: Date = parse_wire_date("endDate", &request.end_date)?;
    validate_vacation_range(start_date, end_date).map_err(translate_domain_error)?;
    let year: i32 = parse_year(request.year)?;
    let status: VacationStatus = request
        .status
        .parse::<VacationStatus>()
        .map_err(translate_domain_error)?;

    let now: OffsetDateTime = OffsetDateTime::now_utc();
    let vacation: NewVacation = NewVacation {
        id: new_record_id(),
        user_id,
        start_date,
        end_date,
        year,
        description: request.description,
        status,
        created_at: PrimitiveDateTime::new(now.date(), now.time()),
    };

    let stored: VacationRequest = persistence
        .create_vacation(&vacation)
        .map_err(|err| translate_persistence_error(err, "creating vacation"))?;
    info!(vacation_id = %stored.id, user_id = %stored.user_id, "Created vacation");

    let holidays: HolidayIndex = load_holidays(persistence, slice::from_ref(&stored))?;
    let row: Option<VacationComputation> =
        compute_vacation_rows([stored], &holidays).into_iter().next();
    row.map(VacationInfo::from).ok_or_else(|| ApiError::Internal {
        operation: String::from("creating vacation"),
        message: String::from("Stored vacation produced no computation"),
    })
}

/// Changes the status of a vacation.
///
/// # Errors
///
/// Returns an error if the id or status is invalid or the vacation does
/// not exist.
pub fn change_vacation_status(
    persistence: &mut Persistence,
    request: &ChangeVacationStatusRequest,
) -> Result<MessageResponse, ApiError> {
    let vacation_id: String =
        validate_identifier("id", &request.id).map_err(translate_domain_error)?;
    let status: VacationStatus = request
        .status
        .parse::<VacationStatus>()
        .map_err(translate_domain_error)?;

    persistence
        .update_vacation_status(&vacation_id, status)
        .map_err(|err| translate_persistence_error(err, "changing vacation status"))?;
    info!(vacation_id = %vacation_id, status = %status, "Changed vacation status");

    Ok(MessageResponse {
        message: format!("Vacation status changed to {status}"),
    })
}

/// Lists the years in which a user has vacations, newest first.
///
/// # Errors
///
/// Returns an error if the user id is invalid or the read fails.
pub fn list_vacation_years(
    persistence: &mut Persistence,
    user_id: &str,
) -> Result<Vec<i32>, ApiError> {
    let user_id: UserId = parse_user(user_id)?;
    persistence
        .list_vacation_years(&user_id)
        .map_err(|err| translate_persistence_error(err, "listing vacation years"))
}

/// Deletes a vacation.
///
/// # Errors
///
/// Returns an error if the id is invalid or the vacation does not exist.
pub fn delete_vacation(
    persistence: &mut Persistence,
    vacation_id: &str,
) -> Result<MessageResponse, ApiError> {
    let vacation_id: String =
        validate_identifier("id", vacation_id).map_err(translate_domain_error)?;

    persistence
        .delete_vacation(&vacation_id)
        .map_err(|err| translate_persistence_error(err, "deleting vacation"))?;
    info!(vacation_id = %vacation_id, "Deleted vacation");

    Ok(MessageResponse {
        message: String::from("Vacation deleted successfully"),
    })
}

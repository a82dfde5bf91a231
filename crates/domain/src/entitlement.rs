// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vacation entitlement balance.
//!
//! This module aggregates counted vacation requests against the yearly
//! entitlement. Unlike leave accrual elsewhere, the free balance is clamped
//! at zero and never reported as overdrawn.

use crate::types::{VacationEntitlement, VacationStatus};
use crate::vacation_days::VacationComputation;
use serde::{Deserialize, Serialize};

/// Vacation balance of one user for one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementBalance {
    /// Total yearly entitlement in days.
    pub all: u32,
    /// Days of approved requests.
    pub approved: u32,
    /// Days of requests awaiting a decision.
    pub consideration: u32,
    /// Days still available, never negative.
    pub free: u32,
}

/// Calculates the entitlement balance.
///
/// Approved and pending requests both reduce the free balance; requests in
/// any other status are ignored. The result does not depend on the order
/// of `rows`.
///
/// # Arguments
///
/// * `entitlement` - The yearly entitlement
/// * `rows` - The user's counted vacation requests for the year
#[must_use]
pub fn calculate_entitlement_balance<'a, I>(
    entitlement: VacationEntitlement,
    rows: I,
) -> EntitlementBalance
where
    I: IntoIterator<Item = &'a VacationComputation>,
{
    let (approved, consideration): (u32, u32) =
        rows.into_iter()
            .fold((0_u32, 0_u32), |(approved, consideration), row| {
                match row.request.status {
                    VacationStatus::Approved => {
                        (approved.saturating_add(row.chargeable_days), consideration)
                    }
                    VacationStatus::Consideration => {
                        (approved, consideration.saturating_add(row.chargeable_days))
                    }
                    VacationStatus::Rejected => (approved, consideration),
                }
            });

    let all: u32 = entitlement.days();
    let free: u32 = all
        .saturating_sub(approved)
        .saturating_sub(consideration);

    EntitlementBalance {
        all,
        approved,
        consideration,
        free,
    }
}

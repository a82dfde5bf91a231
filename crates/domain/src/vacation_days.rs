// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Chargeable vacation day counting.
//!
//! Every day of a vacation counts against the entitlement except holidays
//! that are not flagged as paid vacation. Holidays flagged as paid vacation
//! are still charged.

use crate::date_range::DateRange;
use crate::holiday_index::{HolidayEntry, HolidayIndex};
use crate::types::VacationRequest;
use serde::{Deserialize, Serialize};
use time::Date;

/// Chargeable days and overlapping holidays of one date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationDayCount {
    /// Days charged against the entitlement.
    pub chargeable_days: u32,
    /// Holidays inside the range, in date order.
    pub holidays: Vec<HolidayEntry>,
}

/// A vacation request annotated with its computed day count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationComputation {
    /// The request as stored.
    pub request: VacationRequest,
    /// Days charged against the entitlement.
    pub chargeable_days: u32,
    /// Holidays inside the request's range, in date order.
    pub holidays: Vec<HolidayEntry>,
}

/// Counts the chargeable days of `[start_date, end_date]`.
///
/// An inverted range yields zero days and no holidays. The index must
/// cover every year the range touches; dates of years missing from it are
/// treated as ordinary days.
#[must_use]
pub fn count_vacation_days(
    start_date: Date,
    end_date: Date,
    holidays: &HolidayIndex,
) -> VacationDayCount {
    let mut chargeable_days: u32 = 0;
    let mut overlapping: Vec<HolidayEntry> = Vec::new();

    for date in DateRange::new(start_date, end_date) {
        match holidays.lookup(date) {
            Some(holiday) => {
                if holiday.is_paid_vacation {
                    chargeable_days = chargeable_days.saturating_add(1);
                }
                overlapping.push(holiday.clone());
            }
            None => chargeable_days = chargeable_days.saturating_add(1),
        }
    }

    VacationDayCount {
        chargeable_days,
        holidays: overlapping,
    }
}

/// Computes the day count of every request, preserving input order.
#[must_use]
pub fn compute_vacation_rows<I>(requests: I, holidays: &HolidayIndex) -> Vec<VacationComputation>
where
    I: IntoIterator<Item = VacationRequest>,
{
    requests
        .into_iter()
        .map(|request| {
            let count: VacationDayCount =
                count_vacation_days(request.start_date, request.end_date, holidays);
            VacationComputation {
                request,
                chargeable_days: count.chargeable_days,
                holidays: count.holidays,
            }
        })
        .collect()
}

/// Years a set of requests touches, ascending and without duplicates.
///
/// Callers load the holiday calendar of each returned year before counting.
#[must_use]
pub fn years_touched<'a, I>(requests: I) -> Vec<i32>
where
    I: IntoIterator<Item = &'a VacationRequest>,
{
    let mut years: Vec<i32> = requests
        .into_iter()
        .flat_map(|r| DateRange::new(r.start_date, r.end_date).years())
        .collect();
    years.sort_unstable();
    years.dedup();
    years
}

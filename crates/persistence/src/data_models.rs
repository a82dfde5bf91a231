// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, PrimitiveDateTime};
use timetrack_domain::{CalendarDayKind, UserId, VacationStatus};

/// A time entry to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub id: String,
    pub user_id: UserId,
    pub date: Date,
    pub hours: f64,
    pub category_id: String,
}

/// A vacation request to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVacation {
    pub id: String,
    pub user_id: UserId,
    pub start_date: Date,
    pub end_date: Date,
    pub year: i32,
    pub description: String,
    pub status: VacationStatus,
    pub created_at: PrimitiveDateTime,
}

/// A calendar day to insert; the identifier is assigned by the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCalendarDay {
    pub date: Date,
    pub kind: CalendarDayKind,
    pub is_paid_vacation: bool,
    pub description: Option<String>,
}

/// A monthly working-hour norm to insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkStandard {
    pub id: String,
    pub month: u8,
    pub year: i32,
    pub hours: u32,
    pub gender_id: i32,
}

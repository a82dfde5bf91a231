// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod backend_validation_tests;
mod initialization_tests;
mod report_tests;

use time::macros::datetime;
use time::{Date, Month};
use timetrack_domain::{CalendarDayKind, UserId, VacationStatus};

use crate::{NewCalendarDay, NewReport, NewVacation, Persistence};

pub const ALICE: &str = "0b6e4c8e-2f1d-4c55-9d0c-3a7f1e2b9c44";
pub const BOB: &str = "a3d5f7b9-1c2e-4f60-8a9b-c0d1e2f3a4b5";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn user(id: &str) -> UserId {
    UserId::parse(id).expect("Valid test user id")
}

pub fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("Valid test date")
}

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

pub fn category_id(persistence: &mut Persistence, system_name: &str) -> String {
    persistence
        .get_category_by_system_name(system_name)
        .expect("Seeded category")
        .id
}

pub fn new_report(
    persistence: &mut Persistence,
    user_id: &str,
    date: Date,
    hours: f64,
    system_name: &str,
) -> NewReport {
    NewReport {
        id: new_id(),
        user_id: user(user_id),
        date,
        hours,
        category_id: category_id(persistence, system_name),
    }
}

pub fn new_vacation(user_id: &str, start_date: Date, end_date: Date, status: VacationStatus) -> NewVacation {
    NewVacation {
        id: new_id(),
        user_id: user(user_id),
        start_date,
        end_date,
        year: start_date.year(),
        description: String::from("Summer"),
        status,
        created_at: datetime!(2024-05-20 10:15:00),
    }
}

pub fn new_holiday(date: Date, is_paid_vacation: bool) -> NewCalendarDay {
    NewCalendarDay {
        date,
        kind: CalendarDayKind::Holiday,
        is_paid_vacation,
        description: Some(String::from("Holiday")),
    }
}

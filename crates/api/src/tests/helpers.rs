// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use timetrack_persistence::Persistence;

use crate::{
    CalendarDayInfo, CreateCalendarDayRequest, CreateReportRequest, CreateVacationRequest,
    ReportInfo, VacationInfo, create_calendar_day, create_report, create_vacation,
};

pub const ALICE: &str = "0b6e4c8e-2f1d-4c55-9d0c-3a7f1e2b9c44";
pub const BOB: &str = "a3d5f7b9-1c2e-4f60-8a9b-c0d1e2f3a4b5";
pub const UNKNOWN_ID: &str = "9e8d7c6b-5a49-4382-9170-6f5e4d3c2b1a";

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

pub fn add_holiday(
    persistence: &mut Persistence,
    year: i32,
    month: i32,
    day: i32,
    is_paid_vacation: bool,
) -> CalendarDayInfo {
    create_calendar_day(
        persistence,
        CreateCalendarDayRequest {
            day,
            month,
            year,
            kind: String::from("holiday"),
            is_paid_vacation,
            description: Some(String::from("Public holiday")),
        },
    )
    .expect("Failed to create holiday")
}

pub fn vacation_request(
    user_id: &str,
    start_date: &str,
    end_date: &str,
    status: &str,
) -> CreateVacationRequest {
    CreateVacationRequest {
        user_id: user_id.to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        year: start_date[..4].parse().expect("Year prefix"),
        description: String::from("Trip"),
        status: status.to_string(),
    }
}

pub fn add_vacation(
    persistence: &mut Persistence,
    user_id: &str,
    start_date: &str,
    end_date: &str,
    status: &str,
) -> VacationInfo {
    create_vacation(
        persistence,
        vacation_request(user_id, start_date, end_date, status),
    )
    .expect("Failed to create vacation")
}

pub fn report_request(day: i32, hours: f64, type_system_name: &str) -> CreateReportRequest {
    CreateReportRequest {
        user_id: ALICE.to_string(),
        day,
        month: 3,
        year: 2024,
        hours,
        type_system_name: type_system_name.to_string(),
    }
}

pub fn add_report(
    persistence: &mut Persistence,
    day: i32,
    hours: f64,
    type_system_name: &str,
) -> ReportInfo {
    create_report(persistence, &report_request(day, hours, type_system_name))
        .expect("Failed to create report")
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timetrack_persistence::Persistence;

use super::helpers::{add_holiday, create_test_persistence};
use crate::{
    ApiError, CalendarDayInfo, CreateCalendarDayRequest, create_calendar_day, list_calendar_month,
    list_calendar_year,
};

fn marked_day(day: i32, month: i32, kind: &str) -> CreateCalendarDayRequest {
    CreateCalendarDayRequest {
        day,
        month,
        year: 2024,
        kind: kind.to_string(),
        is_paid_vacation: false,
        description: Some(String::from("  ")),
    }
}

#[test]
fn test_create_calendar_day_round_trip() {
    let mut persistence: Persistence = create_test_persistence();

    let created: CalendarDayInfo = add_holiday(&mut persistence, 2024, 5, 9, true);

    assert_eq!((created.day, created.month, created.year), (9, 5, 2024));
    assert_eq!(created.kind, "holiday");
    assert!(created.is_paid_vacation);
    assert_eq!(created.description.as_deref(), Some("Public holiday"));
}

#[test]
fn test_blank_description_is_dropped() {
    let mut persistence: Persistence = create_test_persistence();

    let created: CalendarDayInfo =
        create_calendar_day(&mut persistence, marked_day(8, 3, "pre_holiday")).unwrap();

    assert_eq!(created.kind, "pre_holiday");
    assert_eq!(created.description, None);
}

#[test]
fn test_unknown_kind_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<CalendarDayInfo, ApiError> =
        create_calendar_day(&mut persistence, marked_day(8, 3, "festival"));

    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "kind"));
}

#[test]
fn test_invalid_date_is_rejected() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<CalendarDayInfo, ApiError> =
        create_calendar_day(&mut persistence, marked_day(31, 4, "holiday"));

    assert!(matches!(result, Err(ApiError::InvalidInput { .. })));
}

#[test]
fn test_list_month_and_year() {
    let mut persistence: Persistence = create_test_persistence();
    add_holiday(&mut persistence, 2024, 1, 1, false);
    add_holiday(&mut persistence, 2024, 5, 9, false);
    create_calendar_day(&mut persistence, marked_day(8, 5, "pre_holiday")).unwrap();
    add_holiday(&mut persistence, 2025, 1, 1, false);

    let may: Vec<CalendarDayInfo> = list_calendar_month(&mut persistence, 5, 2024).unwrap();
    let year: Vec<CalendarDayInfo> = list_calendar_year(&mut persistence, 2024).unwrap();

    assert_eq!(may.iter().map(|d| d.day).collect::<Vec<u8>>(), vec![8, 9]);
    assert_eq!(year.len(), 3);
    assert!(matches!(
        list_calendar_month(&mut persistence, 13, 2024),
        Err(ApiError::InvalidInput { .. })
    ));
}

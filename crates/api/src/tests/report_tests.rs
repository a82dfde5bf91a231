// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timetrack_domain::{DomainError, ReportCategory, WellKnownCategories};
use timetrack_persistence::Persistence;

use super::helpers::{ALICE, UNKNOWN_ID, add_report, create_test_persistence, report_request};
use crate::{
    ApiError, MonthStatsResponse, ReportInfo, UpdateReportRequest, create_report, delete_report,
    get_month_stats, list_reports, resolve_well_known_categories, translate_domain_error,
    update_report,
};

#[test]
fn test_create_report_returns_category_details() {
    let mut persistence: Persistence = create_test_persistence();

    let report: ReportInfo = add_report(&mut persistence, 4, 7.5, "work");

    assert_eq!(report.user_id, ALICE);
    assert_eq!((report.day, report.month, report.year), (4, 3, 2024));
    assert!((report.hours - 7.5).abs() < f64::EPSILON);
    assert_eq!(report.type_system_name, "work");
}

#[test]
fn test_list_reports_is_ordered_by_day() {
    let mut persistence: Persistence = create_test_persistence();
    add_report(&mut persistence, 15, 8.0, "work");
    add_report(&mut persistence, 2, 8.0, "work");
    add_report(&mut persistence, 9, 8.0, "medical");

    let days: Vec<u8> = list_reports(&mut persistence, ALICE, 3, 2024)
        .unwrap()
        .into_iter()
        .map(|r| r.day)
        .collect();

    assert_eq!(days, vec![2, 9, 15]);
}

#[test]
fn test_create_report_rejects_unknown_category() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<ReportInfo, ApiError> =
        create_report(&mut persistence, &report_request(4, 8.0, "gardening"));

    assert!(
        matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "typeSystemName")
    );
}

#[test]
fn test_create_report_validates_fields() {
    let mut persistence: Persistence = create_test_persistence();

    let too_many_hours = create_report(&mut persistence, &report_request(4, 24.5, "work"));
    assert!(
        matches!(too_many_hours, Err(ApiError::InvalidInput { ref field, .. }) if field == "hours")
    );

    let mut bad_date = report_request(30, 8.0, "work");
    bad_date.month = 2;
    let result = create_report(&mut persistence, &bad_date);
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "day"));

    let mut bad_user = report_request(4, 8.0, "work");
    bad_user.user_id = String::from("not-a-uuid");
    let result = create_report(&mut persistence, &bad_user);
    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "userId"));

    let blank_category = create_report(&mut persistence, &report_request(4, 8.0, "  "));
    assert!(matches!(
        blank_category,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "typeSystemName"
    ));
}

#[test]
fn test_month_stats_counts_work_and_medical_entries() {
    let mut persistence: Persistence = create_test_persistence();
    let categories: WellKnownCategories = resolve_well_known_categories(&mut persistence).unwrap();
    add_report(&mut persistence, 4, 8.0, "work");
    add_report(&mut persistence, 5, 6.5, "work");
    add_report(&mut persistence, 6, 8.0, "medical");
    add_report(&mut persistence, 7, 8.0, "vacation");

    let stats: MonthStatsResponse =
        get_month_stats(&mut persistence, &categories, ALICE, 3, 2024).unwrap();

    assert!((stats.total_hours - 30.5).abs() < f64::EPSILON);
    assert_eq!(stats.work_days, 2);
    assert_eq!(stats.medical_days, 1);
}

#[test]
fn test_month_stats_of_empty_month_are_zero() {
    let mut persistence: Persistence = create_test_persistence();
    let categories: WellKnownCategories = resolve_well_known_categories(&mut persistence).unwrap();
    add_report(&mut persistence, 4, 8.0, "work");

    let stats: MonthStatsResponse =
        get_month_stats(&mut persistence, &categories, ALICE, 4, 2024).unwrap();

    assert_eq!(
        stats,
        MonthStatsResponse {
            total_hours: 0.0,
            work_days: 0,
            medical_days: 0,
        }
    );
}

#[test]
fn test_missing_medical_category_prevents_statistics() {
    let mut persistence: Persistence = create_test_persistence();
    let without_medical: Vec<ReportCategory> = persistence
        .list_categories()
        .unwrap()
        .into_iter()
        .filter(|c| c.system_name != "medical")
        .collect();

    let result: Result<WellKnownCategories, DomainError> =
        WellKnownCategories::resolve(&without_medical);
    let err: ApiError = translate_domain_error(result.unwrap_err());

    assert!(matches!(err, ApiError::DomainRuleViolation { ref rule, .. } if rule == "well_known_category"));
}

#[test]
fn test_update_report_changes_hours_and_category() {
    let mut persistence: Persistence = create_test_persistence();
    let created: ReportInfo = add_report(&mut persistence, 4, 8.0, "work");

    let updated: ReportInfo = update_report(
        &mut persistence,
        &UpdateReportRequest {
            id: created.id.clone(),
            hours: 4.0,
            type_system_name: String::from("medical"),
        },
    )
    .unwrap();

    assert_eq!(updated.id, created.id);
    assert!((updated.hours - 4.0).abs() < f64::EPSILON);
    assert_eq!(updated.type_system_name, "medical");
}

#[test]
fn test_update_missing_report_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result = update_report(
        &mut persistence,
        &UpdateReportRequest {
            id: UNKNOWN_ID.to_string(),
            hours: 4.0,
            type_system_name: String::from("work"),
        },
    );

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_delete_report_removes_the_day() {
    let mut persistence: Persistence = create_test_persistence();
    add_report(&mut persistence, 4, 8.0, "work");
    add_report(&mut persistence, 5, 8.0, "work");

    delete_report(&mut persistence, ALICE, 4, 3, 2024).unwrap();

    let remaining: Vec<ReportInfo> = list_reports(&mut persistence, ALICE, 3, 2024).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].day, 5);
    assert!(matches!(
        delete_report(&mut persistence, ALICE, 4, 3, 2024),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

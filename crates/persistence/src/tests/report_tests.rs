// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Month;
use timetrack_domain::{
    MonthlySummary, Report, ReportPeriod, WellKnownCategories, aggregate_monthly_summary,
};

use super::{ALICE, BOB, category_id, create_test_persistence, date, new_id, new_report, user};
use crate::{NewReport, Persistence, PersistenceError};

fn march_2024() -> ReportPeriod {
    ReportPeriod::new(2024, 3).unwrap()
}

fn seed_march(persistence: &mut Persistence) {
    let entries: [(u8, f64, &str); 5] = [
        (4, 8.0, "work"),
        (5, 7.5, "work"),
        (6, 8.0, "medical"),
        (1, 8.0, "work"),
        (7, 8.0, "vacation"),
    ];
    for (day, hours, system_name) in entries {
        let report: NewReport = new_report(
            persistence,
            ALICE,
            date(2024, Month::March, day),
            hours,
            system_name,
        );
        persistence.create_report(&report).unwrap();
    }

    // Other month and other user must not leak into March totals
    let other_month: NewReport =
        new_report(persistence, ALICE, date(2024, Month::April, 1), 8.0, "work");
    persistence.create_report(&other_month).unwrap();
    let other_user: NewReport =
        new_report(persistence, BOB, date(2024, Month::March, 4), 6.0, "work");
    persistence.create_report(&other_user).unwrap();
}

#[test]
fn test_create_report_returns_stored_entry() {
    let mut persistence: Persistence = create_test_persistence();
    let report: NewReport = new_report(
        &mut persistence,
        ALICE,
        date(2024, Month::March, 4),
        7.5,
        "work",
    );

    let stored: Report = persistence.create_report(&report).unwrap();

    assert_eq!(stored.id, report.id);
    assert_eq!(stored.user_id, user(ALICE));
    assert_eq!(stored.date, date(2024, Month::March, 4));
    assert!((stored.hours - 7.5).abs() < f64::EPSILON);
    assert_eq!(stored.category.system_name, "work");
}

#[test]
fn test_create_report_with_unknown_category_fails() {
    let mut persistence: Persistence = create_test_persistence();
    let report: NewReport = NewReport {
        id: new_id(),
        user_id: user(ALICE),
        date: date(2024, Month::March, 4),
        hours: 8.0,
        category_id: new_id(),
    };

    let result: Result<Report, PersistenceError> = persistence.create_report(&report);
    assert!(matches!(
        result,
        Err(PersistenceError::ConstraintViolation(_))
    ));
}

#[test]
fn test_list_reports_is_scoped_and_ordered_by_day() {
    let mut persistence: Persistence = create_test_persistence();
    seed_march(&mut persistence);

    let reports: Vec<Report> = persistence
        .list_reports(&user(ALICE), march_2024())
        .unwrap();

    let days: Vec<u8> = reports.iter().map(|r| r.date.day()).collect();
    assert_eq!(days, vec![1, 4, 5, 6, 7]);
    assert!(reports.iter().all(|r| r.user_id == user(ALICE)));
}

#[test]
fn test_total_hours_sums_one_month() {
    let mut persistence: Persistence = create_test_persistence();
    seed_march(&mut persistence);

    let total: f64 = persistence
        .total_hours(&user(ALICE), march_2024())
        .unwrap();
    assert!((total - 39.5).abs() < f64::EPSILON);
}

#[test]
fn test_total_hours_of_empty_month_is_zero() {
    let mut persistence: Persistence = create_test_persistence();
    let total: f64 = persistence
        .total_hours(&user(ALICE), march_2024())
        .unwrap();
    assert!(total.abs() < f64::EPSILON);
}

#[test]
fn test_count_reports_in_category() {
    let mut persistence: Persistence = create_test_persistence();
    seed_march(&mut persistence);
    let work: String = category_id(&mut persistence, "work");
    let medical: String = category_id(&mut persistence, "medical");

    assert_eq!(
        persistence
            .count_reports_in_category(&user(ALICE), march_2024(), &work)
            .unwrap(),
        3
    );
    assert_eq!(
        persistence
            .count_reports_in_category(&user(ALICE), march_2024(), &medical)
            .unwrap(),
        1
    );
}

#[test]
fn test_monthly_summary_from_persistence() {
    let mut persistence: Persistence = create_test_persistence();
    seed_march(&mut persistence);
    let categories: WellKnownCategories =
        WellKnownCategories::resolve(&persistence.list_categories().unwrap()).unwrap();

    let summary: MonthlySummary =
        aggregate_monthly_summary(&mut persistence, &categories, &user(ALICE), march_2024())
            .unwrap();

    assert!((summary.total_hours - 39.5).abs() < f64::EPSILON);
    assert_eq!(summary.work_days, 3);
    assert_eq!(summary.medical_days, 1);
}

#[test]
fn test_update_report_changes_hours_and_category() {
    let mut persistence: Persistence = create_test_persistence();
    let report: NewReport = new_report(
        &mut persistence,
        ALICE,
        date(2024, Month::March, 4),
        8.0,
        "work",
    );
    persistence.create_report(&report).unwrap();
    let medical: String = category_id(&mut persistence, "medical");

    let updated: Report = persistence
        .update_report(&report.id, 4.0, &medical)
        .unwrap();

    assert!((updated.hours - 4.0).abs() < f64::EPSILON);
    assert_eq!(updated.category.system_name, "medical");
}

#[test]
fn test_update_missing_report_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let work: String = category_id(&mut persistence, "work");
    let missing: String = new_id();

    let result: Result<Report, PersistenceError> = persistence.update_report(&missing, 4.0, &work);
    assert_eq!(result, Err(PersistenceError::ReportNotFound(missing)));
}

#[test]
fn test_delete_reports_for_day_removes_only_that_day() {
    let mut persistence: Persistence = create_test_persistence();
    seed_march(&mut persistence);

    let deleted: usize = persistence
        .delete_reports_for_day(&user(ALICE), date(2024, Month::March, 4))
        .unwrap();
    assert_eq!(deleted, 1);

    let remaining: Vec<Report> = persistence
        .list_reports(&user(ALICE), march_2024())
        .unwrap();
    assert_eq!(remaining.len(), 4);

    // Bob's entry on the same day survives
    let bob: Vec<Report> = persistence.list_reports(&user(BOB), march_2024()).unwrap();
    assert_eq!(bob.len(), 1);
}

#[test]
fn test_delete_reports_for_empty_day_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<usize, PersistenceError> =
        persistence.delete_reports_for_day(&user(ALICE), date(2024, Month::March, 4));
    assert!(matches!(result, Err(PersistenceError::ReportNotFound(_))));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timetrack_persistence::Persistence;

use super::helpers::{UNKNOWN_ID, create_test_persistence};
use crate::{
    ApiError, CreateStandardRequest, StandardInfo, UpdateStandardRequest, create_standard,
    list_categories, list_standards, update_standard,
};

fn standard(month: i32, hours: i32, gender_id: i32) -> CreateStandardRequest {
    CreateStandardRequest {
        month,
        year: 2024,
        hours,
        gender_id,
    }
}

#[test]
fn test_create_and_list_standards() {
    let mut persistence: Persistence = create_test_persistence();
    create_standard(&mut persistence, &standard(2, 159, 1)).unwrap();
    create_standard(&mut persistence, &standard(1, 136, 1)).unwrap();

    let listed: Vec<StandardInfo> = list_standards(&mut persistence, 2024).unwrap();

    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].month, 1);
    assert_eq!(listed[0].hours, 136);
}

#[test]
fn test_duplicate_standard_is_rule_violation() {
    let mut persistence: Persistence = create_test_persistence();
    create_standard(&mut persistence, &standard(2, 159, 1)).unwrap();

    let result: Result<StandardInfo, ApiError> =
        create_standard(&mut persistence, &standard(2, 160, 1));

    assert!(matches!(result, Err(ApiError::DomainRuleViolation { .. })));
}

#[test]
fn test_negative_hours_are_rejected() {
    let mut persistence: Persistence = create_test_persistence();

    let result: Result<StandardInfo, ApiError> =
        create_standard(&mut persistence, &standard(2, -1, 1));

    assert!(matches!(result, Err(ApiError::InvalidInput { ref field, .. }) if field == "hours"));
}

#[test]
fn test_update_standard() {
    let mut persistence: Persistence = create_test_persistence();
    let created: StandardInfo = create_standard(&mut persistence, &standard(2, 159, 1)).unwrap();

    let updated: StandardInfo = update_standard(
        &mut persistence,
        &UpdateStandardRequest {
            id: created.id.clone(),
            hours: 151,
        },
    )
    .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.hours, 151);

    let missing = update_standard(
        &mut persistence,
        &UpdateStandardRequest {
            id: UNKNOWN_ID.to_string(),
            hours: 151,
        },
    );
    assert!(matches!(missing, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_seeded_categories_are_listed() {
    let mut persistence: Persistence = create_test_persistence();

    let names: Vec<String> = list_categories(&mut persistence)
        .unwrap()
        .into_iter()
        .map(|c| c.system_name)
        .collect();

    assert!(names.iter().any(|n| n == "work"));
    assert!(names.iter().any(|n| n == "medical"));
}

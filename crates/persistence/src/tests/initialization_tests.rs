// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use timetrack_domain::{ReportCategory, VacationEntitlement, WellKnownCategories};

use super::create_test_persistence;
use crate::{Persistence, PersistenceError};

#[test]
fn test_persistence_initialization() {
    let result: Result<Persistence, PersistenceError> = Persistence::new_in_memory();
    assert!(result.is_ok());
}

#[test]
fn test_foreign_key_enforcement_is_active() {
    let mut persistence: Persistence = create_test_persistence();
    assert!(persistence.verify_foreign_key_enforcement().is_ok());
}

#[test]
fn test_migrations_seed_well_known_categories() {
    let mut persistence: Persistence = create_test_persistence();
    let categories: Vec<ReportCategory> = persistence.list_categories().unwrap();

    assert!(categories.len() >= 2);
    assert!(WellKnownCategories::resolve(&categories).is_ok());
}

#[test]
fn test_categories_are_ordered_by_name() {
    let mut persistence: Persistence = create_test_persistence();
    let names: Vec<String> = persistence
        .list_categories()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    let mut sorted: Vec<String> = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_unknown_category_is_not_found() {
    let mut persistence: Persistence = create_test_persistence();
    let result: Result<ReportCategory, PersistenceError> =
        persistence.get_category_by_system_name("overtime");

    assert_eq!(
        result,
        Err(PersistenceError::CategoryNotFound(String::from("overtime")))
    );
}

#[test]
fn test_migrations_seed_default_entitlement() {
    let mut persistence: Persistence = create_test_persistence();
    assert_eq!(
        persistence.get_yearly_entitlement().unwrap(),
        VacationEntitlement::new(28)
    );
}

#[test]
fn test_entitlement_can_be_changed() {
    let mut persistence: Persistence = create_test_persistence();

    persistence
        .set_yearly_entitlement(VacationEntitlement::new(31))
        .unwrap();
    assert_eq!(
        persistence.get_yearly_entitlement().unwrap(),
        VacationEntitlement::new(31)
    );

    // Writing the same value again is not an error
    persistence
        .set_yearly_entitlement(VacationEntitlement::new(31))
        .unwrap();
    assert_eq!(persistence.get_yearly_entitlement().unwrap().days(), 31);
}

#[test]
fn test_multiple_in_memory_instances_are_isolated() {
    let mut db1: Persistence = create_test_persistence();
    let mut db2: Persistence = create_test_persistence();

    db1.set_yearly_entitlement(VacationEntitlement::new(10))
        .unwrap();

    assert_eq!(db1.get_yearly_entitlement().unwrap().days(), 10);
    assert_eq!(db2.get_yearly_entitlement().unwrap().days(), 28);
}

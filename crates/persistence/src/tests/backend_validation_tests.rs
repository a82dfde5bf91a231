// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend validation tests for multi-database support.
//!
//! These tests check that the schema and the persistence layer behave the
//! same on `SQLite` and MariaDB/MySQL.
//!
//! ## Test Execution
//!
//! - `SQLite` tests run normally via `cargo test`
//! - MariaDB/MySQL tests are marked `#[ignore]` and run only via `cargo xtask test-mariadb`
//!
//! ## Infrastructure Requirements
//!
//! `MariaDB` tests require:
//! - `DATABASE_URL` environment variable (set by xtask)
//! - `TIMETRACK_TEST_BACKEND=mariadb` environment variable
//! - Running `MariaDB` instance (provisioned by xtask)
//!
//! Tests fail fast if required infrastructure is missing.
//!
//! Only schema-level behavior is covered here: migrations, FK, UNIQUE and
//! CHECK enforcement, and transaction semantics. Business rules are covered
//! by the `SQLite` suite.

use diesel::MysqlConnection;
use diesel::QueryableByName;
use diesel::prelude::*;
use diesel::sql_types::BigInt;
use std::env;
use time::Month;
use timetrack_domain::{CalendarDay, VacationEntitlement, VacationStatus};

use super::{ALICE, date, new_holiday, new_vacation};
use crate::Persistence;
use crate::backend::mysql;

/// Result type for COUNT queries.
#[derive(QueryableByName)]
struct CountResult {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Helper to get the `MariaDB` connection URL from environment.
///
/// # Panics
///
/// Panics if `DATABASE_URL` is not set, indicating missing infrastructure.
fn get_mariadb_url() -> String {
    env::var("DATABASE_URL")
        .expect("DATABASE_URL not set - MariaDB tests must be run via `cargo xtask test-mariadb`")
}

/// Helper to verify we're running in the `MariaDB` test environment.
///
/// # Panics
///
/// Panics if `TIMETRACK_TEST_BACKEND` is not set to `mariadb`.
fn verify_mariadb_test_environment() {
    let backend = env::var("TIMETRACK_TEST_BACKEND").expect(
        "TIMETRACK_TEST_BACKEND not set - MariaDB tests must be run via `cargo xtask test-mariadb`",
    );
    assert_eq!(backend, "mariadb", "TIMETRACK_TEST_BACKEND must be 'mariadb'");
}

fn mariadb_connection() -> MysqlConnection {
    verify_mariadb_test_environment();
    mysql::initialize_database(&get_mariadb_url()).expect("Failed to initialize MariaDB database")
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_connection() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = MysqlConnection::establish(&url);
    assert!(
        result.is_ok(),
        "Failed to connect to MariaDB: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_migrations_apply_cleanly() {
    verify_mariadb_test_environment();
    let url = get_mariadb_url();

    let result = mysql::initialize_database(&url);
    assert!(
        result.is_ok(),
        "Failed to initialize MariaDB and run migrations: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_foreign_key_enforcement() {
    let mut conn = mariadb_connection();

    let result = mysql::verify_foreign_key_enforcement(&mut conn);
    assert!(
        result.is_ok(),
        "Foreign key enforcement verification failed: {:?}",
        result.err()
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_seeded_categories_present() {
    let mut conn = mariadb_connection();

    let count: i64 = diesel::sql_query(
        "SELECT COUNT(*) as count FROM report_types WHERE system_name IN ('work', 'medical')",
    )
    .get_result::<CountResult>(&mut conn)
    .map(|r| r.count)
    .expect("Failed to count categories");

    assert_eq!(count, 2, "Work and medical categories must be seeded");
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_category_system_name_unique() {
    let mut conn = mariadb_connection();

    let duplicate_result = diesel::sql_query(
        "INSERT INTO report_types (id, name, system_name)
         VALUES ('5e4a3b2c-1d0e-4f9a-8b7c-6d5e4f3a2b10', 'Work again', 'work')",
    )
    .execute(&mut conn);

    assert!(
        duplicate_result.is_err(),
        "Duplicate system_name should fail due to UNIQUE constraint"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_report_category_foreign_key() {
    let mut conn = mariadb_connection();

    let result = diesel::sql_query(
        "INSERT INTO reports (id, user_id, day, month, year, hours, type_id)
         VALUES ('6f5e4d3c-2b1a-4098-8776-5a4b3c2d1e0f', '0b6e4c8e-2f1d-4c55-9d0c-3a7f1e2b9c44',
                 1, 1, 2024, 8.0, 'no-such-category')",
    )
    .execute(&mut conn);

    assert!(
        result.is_err(),
        "Report with non-existent category should fail due to foreign key constraint"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_vacation_status_check() {
    let mut conn = mariadb_connection();

    let result = diesel::sql_query(
        "INSERT INTO vacations (id, user_id, start_date, end_date, year, description, status, created_at)
         VALUES ('7a6b5c4d-3e2f-4a1b-9c8d-7e6f5a4b3c2d', '0b6e4c8e-2f1d-4c55-9d0c-3a7f1e2b9c44',
                 '2024-07-01', '2024-07-05', 2024, '', 'cancelled', '2024-05-01 08:00:00')",
    )
    .execute(&mut conn);

    assert!(
        result.is_err(),
        "Unknown vacation status should fail due to CHECK constraint"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_transaction_rollback() {
    let mut conn = mariadb_connection();

    conn.begin_test_transaction()
        .expect("Failed to begin transaction");

    diesel::sql_query(
        "INSERT INTO settings (setting_key, setting_value) VALUES ('rollback_test', '1')",
    )
    .execute(&mut conn)
    .expect("Failed to insert setting");

    let count: i64 = diesel::sql_query(
        "SELECT COUNT(*) as count FROM settings WHERE setting_key = 'rollback_test'",
    )
    .get_result::<CountResult>(&mut conn)
    .map(|r| r.count)
    .expect("Failed to count settings");

    assert_eq!(count, 1, "Setting should exist within transaction");

    // Test transactions roll back when the connection is dropped
    drop(conn);

    let mut new_conn = mariadb_connection();
    let count_after: i64 = diesel::sql_query(
        "SELECT COUNT(*) as count FROM settings WHERE setting_key = 'rollback_test'",
    )
    .get_result::<CountResult>(&mut new_conn)
    .map(|r| r.count)
    .expect("Failed to count settings after rollback");

    assert_eq!(
        count_after, 0,
        "Setting should not exist after transaction rollback"
    );
}

#[test]
#[ignore = "requires MariaDB via cargo xtask test-mariadb"]
fn test_mariadb_persistence_round_trip() {
    verify_mariadb_test_environment();
    let mut persistence =
        Persistence::new_with_mysql(&get_mariadb_url()).expect("Failed to open MariaDB persistence");

    let holiday: CalendarDay = persistence
        .create_calendar_day(&new_holiday(date(2031, Month::July, 4), false))
        .expect("Failed to insert calendar day");
    assert!(holiday.id > 0);

    let vacation = new_vacation(
        ALICE,
        date(2031, Month::July, 1),
        date(2031, Month::July, 10),
        VacationStatus::Consideration,
    );
    persistence
        .create_vacation(&vacation)
        .expect("Failed to insert vacation");
    let stored = persistence
        .get_vacation(&vacation.id)
        .expect("Failed to read vacation back");
    assert_eq!(stored.start_date, vacation.start_date);
    assert_eq!(stored.created_at, vacation.created_at);

    persistence
        .set_yearly_entitlement(VacationEntitlement::new(30))
        .expect("Failed to store entitlement");
    assert_eq!(
        persistence.get_yearly_entitlement().expect("Failed to read entitlement"),
        VacationEntitlement::new(30)
    );
    persistence
        .set_yearly_entitlement(VacationEntitlement::new(28))
        .expect("Failed to restore entitlement");

    persistence
        .delete_vacation(&vacation.id)
        .expect("Failed to clean up vacation");
}

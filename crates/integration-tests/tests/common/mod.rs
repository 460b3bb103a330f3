// Shared fixtures for integration tests
//
// Every test runs against a fresh in-memory SQLite database with the
// real repositories and services wired together; only the clock is
// fixed so "today" is deterministic.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};
use sqlx::SqlitePool;

use antrean_core::domain::QueueStatus;
use antrean_core::port::clock::Clock;
use antrean_infra_sqlite::{create_pool, run_migrations};

/// Fixed reference instant: 2026-08-28 09:00 UTC
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 28, 9, 0, 0).unwrap()
}

/// Clinic-local "today" when the clinic runs at UTC
pub fn today() -> NaiveDate {
    test_now().date_naive()
}

pub fn utc_offset() -> FixedOffset {
    FixedOffset::east_opt(0).unwrap()
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub async fn setup_db() -> SqlitePool {
    let pool = create_pool("sqlite::memory:").await.unwrap();
    run_migrations(&pool).await.unwrap();
    pool
}

pub async fn seed_user(pool: &SqlitePool, uuid: &str, username: &str, full_name: &str, role: &str) {
    sqlx::query(
        "INSERT INTO users (uuid, username, password_hash, full_name, role) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(uuid)
    .bind(username)
    .bind("not-a-real-hash")
    .bind(full_name)
    .bind(role)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn seed_department(pool: &SqlitePool, name: &str, doctor_uuid: &str) -> i64 {
    sqlx::query("INSERT INTO departments (name, doctor_uuid) VALUES (?, ?)")
        .bind(name)
        .bind(doctor_uuid)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_unassigned_department(pool: &SqlitePool, name: &str) -> i64 {
    sqlx::query("INSERT INTO departments (name, doctor_uuid) VALUES (?, NULL)")
        .bind(name)
        .execute(pool)
        .await
        .unwrap()
        .last_insert_rowid()
}

pub async fn seed_patient(
    pool: &SqlitePool,
    insurance_number: &str,
    name: &str,
    department_id: i64,
) -> i64 {
    sqlx::query(
        "INSERT INTO patients (insurance_number, name, birth_date, department_id) VALUES (?, ?, ?, ?)",
    )
    .bind(insurance_number)
    .bind(name)
    .bind(NaiveDate::from_ymd_opt(1990, 1, 1).unwrap())
    .bind(department_id)
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn seed_queue_entry(
    pool: &SqlitePool,
    patient_id: i64,
    department_id: i64,
    date: NaiveDate,
    status: QueueStatus,
) -> i64 {
    sqlx::query(
        "INSERT INTO queue_entries (patient_id, department_id, scheduled_date, status) VALUES (?, ?, ?, ?)",
    )
    .bind(patient_id)
    .bind(department_id)
    .bind(date)
    .bind(status.to_string())
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn seed_prescription(
    pool: &SqlitePool,
    patient_id: i64,
    diagnosis: &str,
    notes: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO prescriptions (patient_id, diagnosis, notes, issued_on) VALUES (?, ?, ?, ?)",
    )
    .bind(patient_id)
    .bind(diagnosis)
    .bind(notes)
    .bind(today())
    .execute(pool)
    .await
    .unwrap()
    .last_insert_rowid()
}

pub async fn raw_status(pool: &SqlitePool, entry_id: i64) -> String {
    sqlx::query_scalar("SELECT status FROM queue_entries WHERE id = ?")
        .bind(entry_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .unwrap()
}

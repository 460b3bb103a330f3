// Doctor and pickup queue listings: pagination metadata and the data
// page must always agree on one filter set.

mod common;

use std::sync::Arc;

use chrono::{Duration, FixedOffset, TimeZone, Utc};

use antrean_core::application::QueueService;
use antrean_core::domain::{PageRequest, QueueStatus};
use antrean_infra_sqlite::SqliteQueueEntryRepository;

use common::*;

fn service(pool: &sqlx::SqlitePool) -> QueueService {
    QueueService::new(
        Arc::new(SqliteQueueEntryRepository::new(pool.clone())),
        Arc::new(FixedClock(test_now())),
        utc_offset(),
    )
}

/// 12 WAITING/CHECKING entries out of 15 scheduled today: the filtered
/// count is authoritative for count AND fetch.
#[tokio::test]
async fn test_doctor_listing_uses_one_filter_set() {
    let pool = setup_db().await;
    seed_user(&pool, "doc-1", "dr.budi", "Budi Santoso", "DOCTOR").await;
    let dept = seed_department(&pool, "Poli Umum", "doc-1").await;
    let patient = seed_patient(&pool, "0001234567890", "Siti Rahma", dept).await;

    for _ in 0..8 {
        seed_queue_entry(&pool, patient, dept, today(), QueueStatus::Waiting).await;
    }
    for _ in 0..4 {
        seed_queue_entry(&pool, patient, dept, today(), QueueStatus::Checking).await;
    }
    for _ in 0..2 {
        seed_queue_entry(&pool, patient, dept, today(), QueueStatus::Done).await;
    }
    seed_queue_entry(&pool, patient, dept, today(), QueueStatus::Cancelled).await;

    let svc = service(&pool);
    let page1 = PageRequest::new(1, 10).unwrap();
    let (rows, info) = svc.list_for_doctor(page1, "doc-1").await.unwrap();

    assert_eq!(info.total_data, 12);
    assert_eq!(info.total_page, 2);
    assert_eq!(rows.len(), 10);
    assert!(rows
        .iter()
        .all(|r| matches!(r.status, QueueStatus::Waiting | QueueStatus::Checking)));

    let page2 = PageRequest::new(2, 10).unwrap();
    let (rows, info) = svc.list_for_doctor(page2, "doc-1").await.unwrap();
    assert_eq!(info.total_data, 12);
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_doctor_listing_projects_joined_fields() {
    let pool = setup_db().await;
    seed_user(&pool, "doc-1", "dr.budi", "Budi Santoso", "DOCTOR").await;
    let dept = seed_department(&pool, "Poli Anak", "doc-1").await;
    let patient = seed_patient(&pool, "0009876543210", "Agus Wijaya", dept).await;
    seed_queue_entry(&pool, patient, dept, today(), QueueStatus::Waiting).await;

    let svc = service(&pool);
    let (rows, _) = svc
        .list_for_doctor(PageRequest::default(), "doc-1")
        .await
        .unwrap();

    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.insurance_number, "0009876543210");
    assert_eq!(row.patient_name, "Agus Wijaya");
    assert_eq!(row.doctor, "dr.budi");
    assert_eq!(row.department, "Poli Anak");
    assert_eq!(row.status, QueueStatus::Waiting);
}

#[tokio::test]
async fn test_doctor_listing_scoped_to_today_and_doctor() {
    let pool = setup_db().await;
    seed_user(&pool, "doc-1", "dr.budi", "Budi Santoso", "DOCTOR").await;
    seed_user(&pool, "doc-2", "dr.sari", "Sari Dewi", "DOCTOR").await;
    let dept1 = seed_department(&pool, "Poli Umum", "doc-1").await;
    let dept2 = seed_department(&pool, "Poli Gigi", "doc-2").await;
    let patient = seed_patient(&pool, "0001112223334", "Siti Rahma", dept1).await;

    // Only this one should be visible to doc-1 today
    seed_queue_entry(&pool, patient, dept1, today(), QueueStatus::Waiting).await;
    seed_queue_entry(
        &pool,
        patient,
        dept1,
        today() - Duration::days(1),
        QueueStatus::Waiting,
    )
    .await;
    seed_queue_entry(
        &pool,
        patient,
        dept1,
        today() + Duration::days(1),
        QueueStatus::Waiting,
    )
    .await;
    seed_queue_entry(&pool, patient, dept2, today(), QueueStatus::Waiting).await;

    let svc = service(&pool);
    let (rows, info) = svc
        .list_for_doctor(PageRequest::default(), "doc-1")
        .await
        .unwrap();

    assert_eq!(info.total_data, 1);
    assert_eq!(rows.len(), 1);
}

/// The clinic offset decides which calendar day "today" is.
#[tokio::test]
async fn test_today_follows_clinic_offset() {
    let pool = setup_db().await;
    seed_user(&pool, "doc-1", "dr.budi", "Budi Santoso", "DOCTOR").await;
    let dept = seed_department(&pool, "Poli Umum", "doc-1").await;
    let patient = seed_patient(&pool, "0001234567890", "Siti Rahma", dept).await;
    seed_queue_entry(&pool, patient, dept, today(), QueueStatus::Waiting).await;

    // 20:00 UTC on the 27th is already the 28th at UTC+7
    let evening = Utc.with_ymd_and_hms(2026, 8, 27, 20, 0, 0).unwrap();
    let wib = FixedOffset::east_opt(7 * 3600).unwrap();

    let svc = QueueService::new(
        Arc::new(SqliteQueueEntryRepository::new(pool.clone())),
        Arc::new(FixedClock(evening)),
        wib,
    );
    let (rows, _) = svc
        .list_for_doctor(PageRequest::default(), "doc-1")
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);

    // Same instant at UTC is still the 27th: nothing listed
    let svc_utc = QueueService::new(
        Arc::new(SqliteQueueEntryRepository::new(pool.clone())),
        Arc::new(FixedClock(evening)),
        utc_offset(),
    );
    let (rows, info) = svc_utc
        .list_for_doctor(PageRequest::default(), "doc-1")
        .await
        .unwrap();
    assert!(rows.is_empty());
    assert_eq!(info.total_data, 0);
}

/// One row per (prescription, PICKUP entry) pair; count and page share
/// the join predicate.
#[tokio::test]
async fn test_pickup_listing_joins_prescriptions() {
    let pool = setup_db().await;
    seed_user(&pool, "doc-1", "dr.budi", "Budi Santoso", "DOCTOR").await;
    let dept = seed_department(&pool, "Poli Umum", "doc-1").await;

    // Two prescriptions, one PICKUP slot -> two rows
    let ready = seed_patient(&pool, "0001111111111", "Siti Rahma", dept).await;
    seed_prescription(&pool, ready, "ISPA", "3x1 after meals").await;
    seed_prescription(&pool, ready, "ISPA", "continue previous course").await;
    seed_queue_entry(&pool, ready, dept, today(), QueueStatus::Pickup).await;

    // Prescription but still WAITING -> excluded
    let waiting = seed_patient(&pool, "0002222222222", "Agus Wijaya", dept).await;
    seed_prescription(&pool, waiting, "Gastritis", "before sleep").await;
    seed_queue_entry(&pool, waiting, dept, today(), QueueStatus::Waiting).await;

    // PICKUP slot yesterday -> excluded
    let stale = seed_patient(&pool, "0003333333333", "Rina Putri", dept).await;
    seed_prescription(&pool, stale, "Myalgia", "as needed").await;
    seed_queue_entry(
        &pool,
        stale,
        dept,
        today() - Duration::days(1),
        QueueStatus::Pickup,
    )
    .await;

    let svc = service(&pool);
    let (rows, info) = svc.list_pickup(PageRequest::default()).await.unwrap();

    assert_eq!(info.total_data, 2);
    assert_eq!(info.total_page, 1);
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.insurance_number == "0001111111111"));
    assert!(rows.iter().all(|r| r.status == QueueStatus::Pickup));
    assert!(rows.iter().all(|r| r.diagnosis == "ISPA"));
    assert_eq!(rows[0].prescription_notes, "3x1 after meals");
}

/// A PICKUP slot in a department with no assigned doctor must not
/// split the count from the page: both sides of the listing apply the
/// full join chain.
#[tokio::test]
async fn test_pickup_count_matches_page_for_unassigned_department() {
    let pool = setup_db().await;
    seed_user(&pool, "doc-1", "dr.budi", "Budi Santoso", "DOCTOR").await;
    let staffed = seed_department(&pool, "Poli Umum", "doc-1").await;
    let unstaffed = seed_unassigned_department(&pool, "Poli Baru").await;

    let covered = seed_patient(&pool, "0001111111111", "Siti Rahma", staffed).await;
    seed_prescription(&pool, covered, "ISPA", "3x1 after meals").await;
    seed_queue_entry(&pool, covered, staffed, today(), QueueStatus::Pickup).await;

    let orphaned = seed_patient(&pool, "0002222222222", "Agus Wijaya", unstaffed).await;
    seed_prescription(&pool, orphaned, "Gastritis", "before sleep").await;
    seed_queue_entry(&pool, orphaned, unstaffed, today(), QueueStatus::Pickup).await;

    let svc = service(&pool);
    let (rows, info) = svc.list_pickup(PageRequest::default()).await.unwrap();

    assert_eq!(info.total_data as usize, rows.len());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].insurance_number, "0001111111111");
}

#[tokio::test]
async fn test_pickup_listing_empty() {
    let pool = setup_db().await;
    let svc = service(&pool);
    let (rows, info) = svc.list_pickup(PageRequest::default()).await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(info.total_data, 0);
    assert_eq!(info.total_page, 0);
}

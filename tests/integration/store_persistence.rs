use std::fs;

use tempfile::TempDir;
use wayfare::booking::BookingStatus;
use wayfare::error::StoreError;
use wayfare::store::{ListQuery, StatusFilter, StoreManifest, SCHEMA_VERSION};

use super::support::{booking, open_store};

#[tokio::test]
async fn document_is_a_camel_case_json_array() {
    let temp = TempDir::new().unwrap();
    let store = open_store(temp.path());
    store.create(booking("Disk Shape", 75.0)).await.unwrap();

    let raw = fs::read_to_string(temp.path().join("bookings.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value.as_array().unwrap()[0];
    assert!(entry.get("sequenceCode").is_some());
    assert!(entry.get("createdAt").is_some());
    assert_eq!(entry.get("status").unwrap(), "Pending");
    assert_eq!(entry.get("name").unwrap(), "Disk Shape");
    // no temp file left behind
    assert!(!temp.path().join("bookings.json.tmp").exists());
}

#[tokio::test]
async fn manifest_tracks_the_last_sequence() {
    let temp = TempDir::new().unwrap();
    let store = open_store(temp.path());
    let first = store.create(booking("M1", 1.0)).await.unwrap();
    store.create(booking("M2", 2.0)).await.unwrap();
    store.delete(&first.id).await.unwrap();

    let raw = fs::read(temp.path().join("bookings.json.manifest.json")).unwrap();
    let manifest: StoreManifest = serde_json::from_slice(&raw).unwrap();
    assert_eq!(manifest.schema_version, SCHEMA_VERSION);
    assert_eq!(manifest.last_sequence, 2);
}

#[tokio::test]
async fn corrupt_document_is_reported_and_left_intact() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bookings.json");
    fs::write(&path, "{ this is not a list").unwrap();
    let store = open_store(temp.path());

    assert!(matches!(
        store.find_all(&ListQuery::new()).await,
        Err(StoreError::Corrupt { .. })
    ));
    assert!(matches!(
        store.create(booking("Blocked", 1.0)).await,
        Err(StoreError::Corrupt { .. })
    ));
    assert!(matches!(
        store.stats().await,
        Err(StoreError::Corrupt { .. })
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ this is not a list");
}

#[tokio::test]
async fn blank_document_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("bookings.json"), "  \n").unwrap();
    let store = open_store(temp.path());

    assert_eq!(store.count(StatusFilter::All).await.unwrap(), 0);
    let created = store.create(booking("After Blank", 5.0)).await.unwrap();
    assert_eq!(created.sequence_code, "DLB000001");
}

#[tokio::test]
async fn document_without_manifest_continues_numbering() {
    let temp = TempDir::new().unwrap();
    let legacy = r#"[
  {
    "id": "1700000000000-abcdefghi",
    "sequenceCode": "DLB000007",
    "status": "Confirmed",
    "name": "Legacy Guest",
    "email": "legacy@example.com",
    "phone": "17000000",
    "guests": 1,
    "amount": 250.0,
    "createdAt": "2024-03-01T08:00:00Z",
    "updatedAt": "2024-03-02T08:00:00Z"
  }
]"#;
    fs::write(temp.path().join("bookings.json"), legacy).unwrap();
    let store = open_store(temp.path());

    let existing = store
        .find_by_id("1700000000000-abcdefghi")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(existing.status, BookingStatus::Confirmed);
    assert_eq!(existing.fields.country, None);

    let created = store.create(booking("New Guest", 10.0)).await.unwrap();
    assert_eq!(created.sequence_code, "DLB000008");
}

#[tokio::test]
async fn newer_manifest_schema_is_refused() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("bookings.json.manifest.json"),
        r#"{"schemaVersion": 99, "lastSequence": 3}"#,
    )
    .unwrap();
    let store = open_store(temp.path());

    assert!(matches!(
        store.create(booking("Too New", 1.0)).await,
        Err(StoreError::UnsupportedSchema { found: 99, .. })
    ));
}

#[tokio::test]
async fn directory_in_place_of_the_document_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("bookings.json")).unwrap();
    let store = open_store(temp.path());

    assert!(matches!(
        store.find_all(&ListQuery::new()).await,
        Err(StoreError::Io { .. })
    ));
    assert!(matches!(
        store.create(booking("Blocked", 1.0)).await,
        Err(StoreError::Io { .. })
    ));
    assert!(temp.path().join("bookings.json").is_dir());
}

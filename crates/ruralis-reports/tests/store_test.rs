//! Storage collaborator contract: ownership, ordering, file round trip.

use ruralis_reports::{
    JsonFileReportStore, MemoryReportStore, ReportData, ReportError, ReportPatch, ReportStore,
};
use std::time::Duration;
use uuid::Uuid;

async fn seed(store: &dyn ReportStore, owner: &str, title: &str) -> Uuid {
    store
        .save(owner, "liming", title, ReportData::default(), None)
        .await
        .unwrap()
}

#[tokio::test]
async fn update_and_delete_are_owner_checked() {
    let store = MemoryReportStore::new();
    let id = seed(&store, "owner-a", "meu relatório").await;

    let err = store
        .update(id, "owner-b", ReportPatch { title: Some("roubado".to_string()), ..Default::default() })
        .await
        .unwrap_err();
    assert!(matches!(err, ReportError::Forbidden { .. }));

    let err = store.delete(id, "owner-b").await.unwrap_err();
    assert!(matches!(err, ReportError::Forbidden { .. }));

    // The owner can do both.
    store
        .update(id, "owner-a", ReportPatch { title: Some("renomeado".to_string()), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(store.get_by_id(id).await.unwrap().unwrap().title, "renomeado");
    store.delete(id, "owner-a").await.unwrap();
    assert!(store.get_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn missing_report_is_not_found() {
    let store = MemoryReportStore::new();
    let ghost = Uuid::new_v4();
    assert!(matches!(
        store.update(ghost, "a", ReportPatch::default()).await.unwrap_err(),
        ReportError::NotFound { .. }
    ));
    assert!(matches!(
        store.delete(ghost, "a").await.unwrap_err(),
        ReportError::NotFound { .. }
    ));
    assert!(store.get_by_id(ghost).await.unwrap().is_none());
}

#[tokio::test]
async fn list_recent_sorts_by_update_time_and_truncates() {
    let store = MemoryReportStore::new();
    let first = seed(&store, "owner-a", "primeiro").await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let _second = seed(&store, "owner-a", "segundo").await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    seed(&store, "owner-b", "de outro dono").await;

    // Touching the oldest report moves it to the front.
    store
        .update(first, "owner-a", ReportPatch { title: Some("primeiro, revisado".to_string()), ..Default::default() })
        .await
        .unwrap();

    let recent = store.list_recent("owner-a", 10).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].id, first);

    let limited = store.list_recent("owner-a", 1).await.unwrap();
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].id, first);
}

#[tokio::test]
async fn json_file_store_round_trips_across_instances() {
    let path = std::env::temp_dir().join(format!("ruralis-store-{}.json", Uuid::new_v4()));

    let store = JsonFileReportStore::new(&path);
    let id = seed(&store, "owner-a", "persistido").await;
    drop(store);

    // A fresh handle over the same file sees the report.
    let reopened = JsonFileReportStore::new(&path);
    let record = reopened.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(record.title, "persistido");
    assert_eq!(reopened.list_recent("owner-a", 10).await.unwrap().len(), 1);

    reopened.delete(id, "owner-a").await.unwrap();
    assert!(reopened.get_by_id(id).await.unwrap().is_none());

    let _ = std::fs::remove_file(&path);
}

#[tokio::test]
async fn json_file_store_starts_empty_when_file_is_absent() {
    let path = std::env::temp_dir().join(format!("ruralis-missing-{}.json", Uuid::new_v4()));
    let store = JsonFileReportStore::new(&path);
    assert!(store.list_recent("anyone", 10).await.unwrap().is_empty());
}

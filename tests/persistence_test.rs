#![cfg(feature = "storage-rocksdb")]

mod common;

use chrono::Duration;
use common::{note, reference_day};
use iou::application::service::DebtService;
use iou::domain::note::{NoteId, OwnerId, Status};
use iou::infrastructure::rocksdb::RocksDbDebtStore;
use rust_decimal_macros::dec;
use tempfile::tempdir;

#[tokio::test]
async fn test_overdue_transition_survives_reopen() {
    let dir = tempdir().unwrap();
    let owner = OwnerId::from("user_1");

    {
        let store = RocksDbDebtStore::open(dir.path()).unwrap();
        let service = DebtService::new(Box::new(store));
        service
            .create_note(note(1, "user_1", dec!(100), reference_day() - Duration::days(5)))
            .await
            .unwrap();

        // Listing derives and persists the overdue transition.
        let listed = service.list_notes(&owner, reference_day()).await.unwrap();
        assert_eq!(listed[0].status, Status::Overdue);
    }

    // A fresh handle over the same database sees the persisted status.
    let store = RocksDbDebtStore::open(dir.path()).unwrap();
    let service = DebtService::new(Box::new(store));
    let reopened = service.get_note(&owner, NoteId(1)).await.unwrap();
    assert_eq!(reopened.status, Status::Overdue);
}

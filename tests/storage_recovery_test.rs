#![allow(clippy::indexing_slicing)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use common::{create_test_dir, open_store};
use std::sync::Arc;
use wishlist::store::{FileStorage, Storage, StorageError, WishStore, DEFAULT_STORAGE_KEY};
use wishlist::{WishDraft, WishId};

#[tokio::test]
async fn test_corrupt_file_loads_as_empty_list() {
    let temp_dir = create_test_dir();
    std::fs::write(temp_dir.path().join("wishlist_items_v1.json"), "{not json").unwrap();

    let store = open_store(temp_dir.path()).await;

    assert!(store.items().is_empty());
    assert!(matches!(
        store.try_load().await,
        Err(StorageError::CorruptData(_))
    ));
}

#[tokio::test]
async fn test_corrupt_file_is_replaced_on_next_save() {
    let temp_dir = create_test_dir();
    let path = temp_dir.path().join("wishlist_items_v1.json");
    std::fs::write(&path, "[[[").unwrap();
    let mut store = open_store(temp_dir.path()).await;

    let item = WishDraft::new("Kettle", "").unwrap().into_item();
    store.insert(item.clone()).await.unwrap();

    let reloaded = open_store(temp_dir.path()).await;
    assert_eq!(reloaded.items().items(), std::slice::from_ref(&item));
}

#[tokio::test]
async fn test_legacy_document_with_missing_fields_loads() {
    let temp_dir = create_test_dir();
    std::fs::write(
        temp_dir.path().join("wishlist_items_v1.json"),
        r#"[{"id":"1718000000000","name":"Old wish"},{"id":"1718000000000","name":"Copy"}]"#,
    )
    .unwrap();

    let store = open_store(temp_dir.path()).await;

    assert_eq!(store.items().len(), 1);
    let item = store.items().get(&WishId::from("1718000000000")).unwrap();
    assert_eq!(item.name, "Old wish");
    assert_eq!(item.link, "");
    assert!(item.image.is_none());
}

#[tokio::test]
async fn test_quota_failure_leaves_previous_document_intact() {
    let temp_dir = create_test_dir();
    let storage: Arc<dyn Storage> = Arc::new(FileStorage::new(temp_dir.path()).with_quota(200));
    let mut store = WishStore::open(storage.clone(), DEFAULT_STORAGE_KEY).await;
    store
        .insert(WishDraft::new("Tea", "").unwrap().into_item())
        .await
        .unwrap();
    let before = storage.get(DEFAULT_STORAGE_KEY).await.unwrap();

    let long_name = "x".repeat(500);
    let err = store
        .insert(WishDraft::new(&long_name, "").unwrap().into_item())
        .await
        .unwrap_err();

    assert!(matches!(err, StorageError::QuotaExceeded { .. }));
    assert_eq!(store.items().len(), 2);
    assert_eq!(storage.get(DEFAULT_STORAGE_KEY).await.unwrap(), before);
}

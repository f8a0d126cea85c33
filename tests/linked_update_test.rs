mod common;

use common::setup_test_store;
use stockroom_backend::errors::internal::ItemStoreError;
use stockroom_backend::stores::item_store::NewItem;

fn new_item(title: &str, price: f64) -> NewItem {
    NewItem {
        title: title.to_string(),
        description: Some("desc".to_string()),
        price,
    }
}

#[tokio::test]
async fn linked_update_commits_both_writes() {
    let store = setup_test_store().await;

    let original = store
        .create(new_item("Original", 5.0))
        .await
        .expect("Failed to create item");

    let created = store
        .create_with_linked_update(
            new_item("Transaction Item", 12.5),
            Some((original.id, "Updated Title".to_string())),
        )
        .await
        .expect("Linked create failed");

    // The new item exists
    let fetched = store.get(created.id).await.expect("Failed to get item");
    assert_eq!(fetched.title, "Transaction Item");

    // And the existing item carries the new title in the same post-commit read
    let retitled = store.get(original.id).await.expect("Failed to get item");
    assert_eq!(retitled.title, "Updated Title");
}

#[tokio::test]
async fn linked_update_rolls_back_when_target_is_missing() {
    let store = setup_test_store().await;

    store
        .create(new_item("Rollback Item", 8.0))
        .await
        .expect("Failed to create item");

    let result = store
        .create_with_linked_update(
            new_item("Should Fail", 15.0),
            Some((9999, "Does Not Exist".to_string())),
        )
        .await;

    assert!(matches!(result, Err(ItemStoreError::NotFound(9999))));

    // Nothing was committed: the attempted item must not be visible
    let items = store.list(100, 0, None).await.expect("Failed to list items");
    let titles: Vec<&str> = items.iter().map(|item| item.title.as_str()).collect();
    assert!(!titles.contains(&"Should Fail"));
    assert!(titles.contains(&"Rollback Item"));
}

#[tokio::test]
async fn linked_update_without_target_commits_the_insert() {
    let store = setup_test_store().await;

    let created = store
        .create_with_linked_update(new_item("Solo", 3.0), None)
        .await
        .expect("Linked create failed");

    let fetched = store.get(created.id).await.expect("Failed to get item");
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn linked_update_failure_leaves_prior_state_intact() {
    let store = setup_test_store().await;

    let original = store
        .create(new_item("Keep Title", 2.0))
        .await
        .expect("Failed to create item");

    let result = store
        .create_with_linked_update(
            new_item("Another Attempt", 4.0),
            Some((original.id + 100, "Never Applied".to_string())),
        )
        .await;
    assert!(result.is_err());

    // The pre-existing item is untouched
    let fetched = store.get(original.id).await.expect("Failed to get item");
    assert_eq!(fetched.title, "Keep Title");
}

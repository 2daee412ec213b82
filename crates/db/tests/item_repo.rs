//! Integration tests for the `items` repository and the PostgreSQL store.
//!
//! Exercises the full repository layer against a real database:
//! - Insert defaults and timestamps
//! - Descending creation order
//! - Delete semantics
//! - Validation before persistence

use assert_matches::assert_matches;
use sqlx::PgPool;
use yapp_core::error::CoreError;
use yapp_db::models::item::CreateItem;
use yapp_db::repositories::ItemRepo;
use yapp_db::store::{ItemStore, PgItemStore, StoreError};

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_row_with_generated_fields(pool: PgPool) {
    let item = ItemRepo::create(&pool, "Quarterly planning", "Outline priorities")
        .await
        .unwrap();

    assert!(item.id > 0);
    assert_eq!(item.title, "Quarterly planning");
    assert_eq!(item.description, "Outline priorities");
    assert_eq!(item.created_at, item.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_orders_newest_first(pool: PgPool) {
    let first = ItemRepo::create(&pool, "first", "").await.unwrap();
    let second = ItemRepo::create(&pool, "second", "").await.unwrap();

    let items = ItemRepo::list(&pool).await.unwrap();
    let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_empty_table(pool: PgPool) {
    let items = ItemRepo::list(&pool).await.unwrap();
    assert!(items.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_reports_whether_row_existed(pool: PgPool) {
    let item = ItemRepo::create(&pool, "Delete Me", "").await.unwrap();

    assert!(ItemRepo::delete(&pool, item.id).await.unwrap());
    assert!(!ItemRepo::delete(&pool, item.id).await.unwrap());
    assert_eq!(ItemRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_title_violates_check_constraint(pool: PgPool) {
    let result = ItemRepo::create(&pool, "", "").await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

// ---------------------------------------------------------------------------
// PgItemStore
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_store_insert_defaults_description(pool: PgPool) {
    let store = PgItemStore::new(pool);
    let item = store.insert(&CreateItem::new("A", None)).await.unwrap();

    assert_eq!(item.title, "A");
    assert_eq!(item.description, "");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_store_rejects_missing_title_without_writing(pool: PgPool) {
    let store = PgItemStore::new(pool.clone());

    let result = store.insert(&CreateItem::default()).await;
    assert_matches!(result, Err(StoreError::Core(CoreError::Validation(_))));
    assert_eq!(ItemRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_store_ping(pool: PgPool) {
    let store = PgItemStore::new(pool);
    store.ping().await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_item_serializes_camel_case(pool: PgPool) {
    let item = ItemRepo::create(&pool, "Wire", "").await.unwrap();
    let json = serde_json::to_value(&item).unwrap();

    assert!(json["createdAt"].is_string());
    assert!(json["updatedAt"].is_string());
    assert!(json.get("created_at").is_none());
}

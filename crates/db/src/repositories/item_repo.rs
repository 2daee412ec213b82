//! Repository for the `items` table.

use sqlx::PgPool;
use yapp_core::types::DbId;

use crate::models::item::Item;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, created_at, updated_at";

/// Provides insert, list and delete operations for items.
pub struct ItemRepo;

impl ItemRepo {
    /// Insert a new item, returning the created row.
    ///
    /// Callers validate the title first; the table's CHECK constraint is
    /// the last line against an empty one.
    pub async fn create(
        pool: &PgPool,
        title: &str,
        description: &str,
    ) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items (title, description)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(title)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// List all items, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Item>(&query).fetch_all(pool).await
    }

    /// Permanently delete an item by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count stored items.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}

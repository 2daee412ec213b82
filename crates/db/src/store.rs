//! The [`ItemStore`] seam and its two backends.
//!
//! The API service holds an `Arc<dyn ItemStore>` so it can run against
//! PostgreSQL in production and a process-local store in development and
//! tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use yapp_core::error::CoreError;
use yapp_core::item::validate_title;
use yapp_core::types::DbId;

use crate::models::item::{CreateItem, Item};
use crate::repositories::ItemRepo;
use crate::DbPool;

/// Errors surfaced by an [`ItemStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A domain rule rejected the input (e.g. missing title).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The backing database failed.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Persistent collection of items.
///
/// Each operation is atomic on its own; no operation spans several records.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Validate and persist a new item, returning it with its generated id
    /// and timestamps.
    async fn insert(&self, input: &CreateItem) -> Result<Item, StoreError>;

    /// All items ordered by creation time, most recent first.
    async fn list_all(&self) -> Result<Vec<Item>, StoreError>;

    /// Remove the item with `id`. Returns whether a record was removed.
    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError>;

    /// Confirm the backing storage is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// Resolve the validated `(title, description)` pair for an insert.
fn prepare(input: &CreateItem) -> Result<(&str, &str), CoreError> {
    let title = validate_title(input.title.as_deref())?;
    let description = input.description.as_deref().unwrap_or("");
    Ok((title, description))
}

// ---------------------------------------------------------------------------
// PostgreSQL
// ---------------------------------------------------------------------------

/// [`ItemStore`] backed by the `items` table.
#[derive(Clone)]
pub struct PgItemStore {
    pool: DbPool,
}

impl PgItemStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl ItemStore for PgItemStore {
    async fn insert(&self, input: &CreateItem) -> Result<Item, StoreError> {
        let (title, description) = prepare(input)?;
        Ok(ItemRepo::create(&self.pool, title, description).await?)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        Ok(ItemRepo::list(&self.pool).await?)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(ItemRepo::delete(&self.pool, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}

// ---------------------------------------------------------------------------
// In-memory
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct MemoryState {
    next_id: DbId,
    items: Vec<Item>,
}

/// Volatile [`ItemStore`] living inside the process.
///
/// Ids are assigned from a counter starting at 1, so they never repeat for
/// the lifetime of the store, even after deletes.
#[derive(Debug)]
pub struct MemoryItemStore {
    state: RwLock<MemoryState>,
}

impl MemoryItemStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                next_id: 1,
                items: Vec::new(),
            }),
        }
    }
}

impl Default for MemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    async fn insert(&self, input: &CreateItem) -> Result<Item, StoreError> {
        let (title, description) = prepare(input)?;

        // Stamp under the lock so id order and created_at order agree.
        let mut state = self.state.write().await;
        let now = Utc::now();
        let item = Item {
            id: state.next_id,
            title: title.to_string(),
            description: description.to_string(),
            created_at: now,
            updated_at: now,
        };
        state.next_id += 1;
        state.items.push(item.clone());
        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let state = self.state.read().await;
        let mut items = state.items.clone();
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(items)
    }

    async fn delete_by_id(&self, id: DbId) -> Result<bool, StoreError> {
        let mut state = self.state.write().await;
        match state.items.iter().position(|item| item.id == id) {
            Some(index) => {
                state.items.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

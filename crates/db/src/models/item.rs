//! Item entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use yapp_core::types::{DbId, Timestamp};

/// A row from the `items` table.
///
/// Serialized in camelCase (`createdAt`, `updatedAt`) to match the wire
/// shape clients consume.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new item.
///
/// Both fields are optional at the deserialization level so a missing
/// title reaches validation instead of failing as a malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateItem {
    #[serde(default)]
    pub title: Option<String>,
    /// Defaults to the empty string if omitted.
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateItem {
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: Some(title.into()),
            description,
        }
    }
}

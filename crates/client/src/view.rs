//! Client-side view of the item list.
//!
//! [`ItemsView`] owns the only mutable client state: the cached list from
//! the last successful fetch, a loading flag, the current error banner, the
//! API health tri-state and the create-form fields. Every operation talks
//! to the server first and changes the cache only from a server answer.

use std::fmt::Write as _;

use yapp_core::types::DbId;

use crate::api::{ApiClient, Item};

pub const LOAD_FAILED: &str = "Failed to load items";
pub const CREATE_FAILED: &str = "Failed to create item";
pub const DELETE_FAILED: &str = "Failed to delete item";

const EMPTY_STATE: &str = "No items yet. Create your first item to test the stack.";

/// Local state of the items screen.
#[derive(Debug)]
pub struct ItemsView {
    api: ApiClient,
    items: Vec<Item>,
    loading: bool,
    error: Option<String>,
    api_healthy: Option<bool>,
    title: String,
    description: String,
}

impl ItemsView {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            items: Vec::new(),
            loading: false,
            error: None,
            api_healthy: None,
            title: String::new(),
            description: String::new(),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// `None` until the first health check completes.
    pub fn api_healthy(&self) -> Option<bool> {
        self.api_healthy
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.loading && !self.title.trim().is_empty()
    }

    /// Initial load: record API health, then fetch the list whatever the
    /// health outcome was.
    pub async fn mount(&mut self) {
        let healthy = self.api.health_check().await;
        tracing::debug!(healthy, "API health checked");
        self.api_healthy = Some(healthy);
        self.load_items().await;
    }

    /// Re-fetch the full list. On failure the previous cache is kept.
    pub async fn load_items(&mut self) {
        self.loading = true;
        self.error = None;

        match self.api.get_items().await {
            Ok(items) => self.items = items,
            Err(e) => {
                tracing::warn!(error = %e, "Loading items failed");
                self.error = Some(LOAD_FAILED.to_string());
            }
        }

        self.loading = false;
    }

    /// Create an item from the form fields, then re-fetch the list.
    ///
    /// Returns `false` without sending anything when the trimmed title is
    /// empty. The form is cleared only after the server accepted the item.
    pub async fn submit(&mut self) -> bool {
        if self.title.trim().is_empty() {
            return false;
        }

        self.loading = true;
        self.error = None;

        let description = Some(self.description.as_str()).filter(|d| !d.is_empty());
        match self.api.create_item(&self.title, description).await {
            Ok(item) => {
                tracing::debug!(item_id = item.id, "Item created");
                self.title.clear();
                self.description.clear();
                self.load_items().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Creating item failed");
                self.error = Some(CREATE_FAILED.to_string());
            }
        }

        self.loading = false;
        true
    }

    /// Delete an item, dropping it from the cache only once the server has
    /// confirmed the delete.
    pub async fn delete(&mut self, id: DbId) {
        self.error = None;

        match self.api.delete_item(id).await {
            Ok(()) => self.items.retain(|item| item.id != id),
            Err(e) => {
                tracing::warn!(item_id = id, error = %e, "Deleting item failed");
                self.error = Some(DELETE_FAILED.to_string());
            }
        }
    }

    /// Render the screen as plain text.
    pub fn render(&self) -> String {
        let mut out = String::new();

        let status = match self.api_healthy {
            None => "Checking API status…",
            Some(true) => "API online",
            Some(false) => "API unreachable",
        };
        let _ = writeln!(out, "[{status}] {}", self.api.base_url());

        if let Some(error) = &self.error {
            let _ = writeln!(out, "! {error}");
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "Items");

        if self.loading && self.items.is_empty() {
            let _ = writeln!(out, "  Loading items…");
        } else if self.items.is_empty() {
            let _ = writeln!(out, "  {EMPTY_STATE}");
        } else {
            for item in &self.items {
                let _ = writeln!(out, "  #{} {}", item.id, item.title);
                if !item.description.is_empty() {
                    let _ = writeln!(out, "      {}", item.description);
                }
                if let Some(created_at) = item.created_at {
                    let _ = writeln!(
                        out,
                        "      Created {}",
                        created_at.format("%Y-%m-%d %H:%M UTC")
                    );
                }
            }
        }

        out
    }
}

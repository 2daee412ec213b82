//! REST client for the Yapp items API.
//!
//! Wraps the `/health` and `/items` endpoints using [`reqwest`]. The base
//! URL includes the API prefix, e.g. `http://localhost:5000/api`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use yapp_core::types::DbId;

/// Base URL used when neither `--base-url` nor `YAPP_API_URL` is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// An item as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: DbId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
struct CreateItemRequest<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
}

/// Errors from the items API client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// HTTP client for one API deployment.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /health`. Any failure, including a non-200 status, is `false`.
    pub async fn health_check(&self) -> bool {
        match self.client.get(self.url("/health")).send().await {
            Ok(response) => response.status() == reqwest::StatusCode::OK,
            Err(e) => {
                tracing::debug!(error = %e, "Health check failed");
                false
            }
        }
    }

    /// `GET /items`: every item, most recent first.
    pub async fn get_items(&self) -> Result<Vec<Item>, ClientError> {
        let response = self.client.get(self.url("/items")).send().await?;
        Self::parse_response(response).await
    }

    /// `POST /items`: create an item and return it as stored.
    pub async fn create_item(
        &self,
        title: &str,
        description: Option<&str>,
    ) -> Result<Item, ClientError> {
        let response = self
            .client
            .post(self.url("/items"))
            .json(&CreateItemRequest { title, description })
            .send()
            .await?;
        Self::parse_response(response).await
    }

    /// `DELETE /items/{id}`.
    pub async fn delete_item(&self, id: DbId) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(self.url(&format!("/items/{id}")))
            .send()
            .await?;
        Self::ensure_success(response).await?;
        Ok(())
    }

    // ---- private helpers ----

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Return the response unchanged on a success status, or a
    /// [`ClientError::Api`] carrying the status and body text.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ClientError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

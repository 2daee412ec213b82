pub mod health;
pub mod items;
pub mod landing;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                          liveness probe
///
/// /items                                           list, create
/// /items/{id}                                      delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/items", items::router())
}

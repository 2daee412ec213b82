//! Handlers for the `/items` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use yapp_core::error::CoreError;
use yapp_core::item::ENTITY_NAME;
use yapp_core::types::DbId;
use yapp_db::models::item::{CreateItem, Item};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/items
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Item>>> {
    let items = state.store.list_all().await?;
    Ok(Json(items))
}

/// POST /api/items
///
/// A body that is not JSON, or whose fields have the wrong types, is a 400
/// like a missing title rather than axum's default 415/422.
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateItem>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Item>)> {
    let Json(input) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let item = state.store.insert(&input).await?;
    tracing::info!(item_id = item.id, "Item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// DELETE /api/items/{id}
///
/// An id that does not parse cannot match any stored item, so it is a 404.
pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<StatusCode> {
    let id: DbId = raw_id
        .parse()
        .map_err(|_| AppError::NotFound(format!("{ENTITY_NAME} with id {raw_id} not found")))?;

    if state.store.delete_by_id(id).await? {
        tracing::info!(item_id = id, "Item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: ENTITY_NAME,
            id,
        }))
    }
}

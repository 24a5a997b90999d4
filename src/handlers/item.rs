use crate::models::{ErrorResponse, FieldError, Item, ItemDeleteResponse};
use crate::services::{ItemError, ItemService};
use crate::validation;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

fn error_body(status: StatusCode, error: String) -> (StatusCode, Json<ErrorResponse>) {
    (
        status,
        Json(ErrorResponse {
            code: status.as_u16(),
            status: status.to_string(),
            error,
            details: None,
        }),
    )
}

fn validation_error_body(details: Vec<FieldError>) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::BAD_REQUEST;
    (
        status,
        Json(ErrorResponse {
            code: status.as_u16(),
            status: status.to_string(),
            error: "Validation failed".to_string(),
            details: Some(details),
        }),
    )
}

fn item_error_body(e: ItemError) -> (StatusCode, Json<ErrorResponse>) {
    match e {
        ItemError::NotFound => error_body(StatusCode::NOT_FOUND, "Item not found".to_string()),
        ItemError::Storage(msg) => {
            error!("Storage error: {}", msg);
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Storage error".to_string(),
            )
        }
    }
}

// An id that does not parse as a UUID can match no item, so it is reported
// as NotFound rather than a malformed-request error.
fn parse_item_id(id: &str) -> Result<Uuid, (StatusCode, Json<ErrorResponse>)> {
    Uuid::parse_str(id)
        .map_err(|_| error_body(StatusCode::NOT_FOUND, "Item not found".to_string()))
}

/// Create a new item
pub async fn item_create(
    State(service): State<Arc<ItemService>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    let dto = match validation::parse_create(&body) {
        Ok(dto) => dto,
        Err(field_errors) => {
            error!(
                "Create item payload failed validation with {} error(s)",
                field_errors.len()
            );
            return Err(validation_error_body(field_errors));
        }
    };

    match service.create(dto).await {
        Ok(item) => Ok((StatusCode::CREATED, Json(item))),
        Err(e) => {
            error!("Failed to create item: {}", e);
            Err(item_error_body(e))
        }
    }
}

/// List all items, most recently created first
pub async fn item_list(
    State(service): State<Arc<ItemService>>,
) -> Result<(StatusCode, Json<Vec<Item>>), (StatusCode, Json<ErrorResponse>)> {
    match service.find_all().await {
        Ok(items) => Ok((StatusCode::OK, Json(items))),
        Err(e) => {
            error!("Failed to list items: {}", e);
            Err(item_error_body(e))
        }
    }
}

/// Get an item by id
pub async fn item_get(
    State(service): State<Arc<ItemService>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    let item_id = parse_item_id(&id)?;

    match service.find_one(item_id).await {
        Ok(item) => Ok((StatusCode::OK, Json(item))),
        Err(e) => Err(item_error_body(e)),
    }
}

/// Partially update an item
pub async fn item_update(
    State(service): State<Arc<ItemService>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<Item>), (StatusCode, Json<ErrorResponse>)> {
    let item_id = parse_item_id(&id)?;

    let patch = match validation::parse_update(&body) {
        Ok(patch) => patch,
        Err(field_errors) => {
            error!(
                "Update item payload failed validation with {} error(s)",
                field_errors.len()
            );
            return Err(validation_error_body(field_errors));
        }
    };

    match service.update(item_id, patch).await {
        Ok(item) => Ok((StatusCode::OK, Json(item))),
        Err(e) => Err(item_error_body(e)),
    }
}

/// Delete an item
pub async fn item_delete(
    State(service): State<Arc<ItemService>>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<ItemDeleteResponse>), (StatusCode, Json<ErrorResponse>)> {
    let item_id = parse_item_id(&id)?;

    match service.remove(item_id).await {
        Ok(confirmation) => Ok((StatusCode::OK, Json(confirmation))),
        Err(e) => Err(item_error_body(e)),
    }
}

use crate::models::*;
use utoipa::OpenApi;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
#[allow(dead_code)]
pub async fn health_check_doc() {}

/// Create a new item
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created successfully", body = Item),
        (status = 400, description = "Validation failed", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_create_doc() {}

/// List all items, most recently created first
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "items",
    responses(
        (status = 200, description = "All items", body = [Item])
    )
)]
#[allow(dead_code)]
pub async fn item_list_doc() {}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/api/items/{id}",
    tag = "items",
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "The requested item", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_get_doc() {}

/// Partially update an item
#[utoipa::path(
    patch,
    path = "/api/items/{id}",
    tag = "items",
    request_body = UpdateItemDto,
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item updated successfully", body = Item),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_update_doc() {}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    tag = "items",
    params(
        ("id" = String, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item deleted successfully", body = ItemDeleteResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    )
)]
#[allow(dead_code)]
pub async fn item_delete_doc() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check_doc,
        item_create_doc,
        item_list_doc,
        item_get_doc,
        item_update_doc,
        item_delete_doc,
    ),
    components(
        schemas(
            HealthResponse,
            Item,
            CreateItemDto,
            UpdateItemDto,
            ItemDeleteResponse,
            ErrorResponse,
            FieldError
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "items", description = "Item CRUD endpoints")
    )
)]
pub struct ApiDoc;

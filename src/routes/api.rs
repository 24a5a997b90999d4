use crate::handlers::{health_check, item_create, item_delete, item_get, item_list, item_update};
use crate::services::ItemService;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create API routes
pub fn create_api_routes(service: Arc<ItemService>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/items", post(item_create).get(item_list))
        .route(
            "/items/:id",
            get(item_get).patch(item_update).delete(item_delete),
        )
        .with_state(service)
}

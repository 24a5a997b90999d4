mod common;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use portfolio_items::routes::create_api_routes;

fn test_app() -> Router {
    Router::new().nest("/api", create_api_routes(common::memory_item_service()))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bare_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn create_widget(app: &Router) -> Value {
    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/items",
            json!({"name": "Widget", "price": 19.99}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    read_json(response).await
}

#[tokio::test]
async fn health_returns_ok() {
    let app = test_app();

    let response = app
        .oneshot(bare_request(Method::GET, "/api/health"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn create_returns_the_created_item() {
    let app = test_app();

    let body = create_widget(&app).await;
    assert_eq!(body["name"], "Widget");
    assert_eq!(body["price"].as_f64(), Some(19.99));
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
}

#[tokio::test]
async fn create_with_invalid_price_never_reaches_storage() {
    let app = test_app();

    for price in [json!(0), json!(-5), json!("10")] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/items",
                json!({"name": "Widget", "price": price}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["details"][0]["field"], "price");
    }

    // Nothing was persisted
    let response = app
        .oneshot(bare_request(Method::GET, "/api/items"))
        .await
        .unwrap();
    let body = read_json(response).await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_with_invalid_name_is_rejected() {
    let app = test_app();

    for name in [json!(""), json!("a".repeat(121))] {
        let response = app
            .clone()
            .oneshot(json_request(
                Method::POST,
                "/api/items",
                json!({"name": name, "price": 1}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = read_json(response).await;
        assert_eq!(body["details"][0]["field"], "name");
    }
}

#[tokio::test]
async fn create_with_unknown_field_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/api/items",
            json!({"name": "Widget", "price": 1, "color": "red"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["details"][0]["field"], "color");
}

#[tokio::test]
async fn get_missing_or_malformed_id_returns_not_found() {
    let app = test_app();

    for uri in [
        "/api/items/5f64f6a8-9adf-4f45-9c28-0ce959738f40",
        "/api/items/not-a-uuid",
    ] {
        let response = app
            .clone()
            .oneshot(bare_request(Method::GET, uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = read_json(response).await;
        assert_eq!(body["code"], 404);
        assert_eq!(body["error"], "Item not found");
    }
}

#[tokio::test]
async fn list_returns_items_most_recent_first() {
    let app = test_app();

    let _ = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/items",
            json!({"name": "A", "price": 1}),
        ))
        .await
        .unwrap();
    let _ = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/items",
            json!({"name": "B", "price": 2}),
        ))
        .await
        .unwrap();

    let response = app
        .oneshot(bare_request(Method::GET, "/api/items"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body[0]["name"], "B");
    assert_eq!(body[1]["name"], "A");
}

#[tokio::test]
async fn patch_with_empty_body_is_a_no_op_update() {
    let app = test_app();
    let created = create_widget(&app).await;
    let uri = format!("/api/items/{}", created["id"].as_str().unwrap());

    let response = app
        .oneshot(json_request(Method::PATCH, &uri, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response).await;
    assert_eq!(body, created);
}

#[tokio::test]
async fn patch_rejects_unknown_fields() {
    let app = test_app();
    let created = create_widget(&app).await;
    let uri = format!("/api/items/{}", created["id"].as_str().unwrap());

    let response = app
        .oneshot(json_request(Method::PATCH, &uri, json!({"stock": 3})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = read_json(response).await;
    assert_eq!(body["details"][0]["field"], "stock");
}

#[tokio::test]
async fn patch_missing_id_returns_not_found() {
    let app = test_app();

    let response = app
        .oneshot(json_request(
            Method::PATCH,
            "/api/items/5f64f6a8-9adf-4f45-9c28-0ce959738f40",
            json!({"price": 50}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn full_crud_round_trip() {
    let app = test_app();

    // Create
    let created = create_widget(&app).await;
    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/api/items/{}", id);

    // Read back the same item
    let response = app
        .clone()
        .oneshot(bare_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = read_json(response).await;
    assert_eq!(fetched, created);

    // Partial update only changes the supplied field
    let response = app
        .clone()
        .oneshot(json_request(Method::PATCH, &uri, json!({"price": 50})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = read_json(response).await;
    assert_eq!(updated["price"].as_f64(), Some(50.0));
    assert_eq!(updated["name"], created["name"]);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    // Delete confirms, then the item is gone
    let response = app
        .clone()
        .oneshot(bare_request(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body, json!({"deleted": true}));

    let response = app
        .oneshot(bare_request(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_missing_id_returns_not_found() {
    let app = test_app();

    let response = app
        .oneshot(bare_request(
            Method::DELETE,
            "/api/items/5f64f6a8-9adf-4f45-9c28-0ce959738f40",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json(response).await;
    assert_eq!(body["error"], "Item not found");
}

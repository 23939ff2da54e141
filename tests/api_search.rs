//! Search endpoint tests: filter combinations, bounds, and ordering.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use adboard::api::ApiServer;
use adboard::config::ServiceConfig;
use adboard::store::AdStore;

async fn test_router() -> Router {
    let store = Arc::new(AdStore::connect_in_memory().await.unwrap());
    store.init_schema().await.unwrap();
    ApiServer::new(ServiceConfig::default(), store).router()
}

async fn create(router: &Router, title: &str, price: f64, author: &str) {
    let payload = json!({
        "title": title,
        "description": format!("{} for sale", title),
        "price": price,
        "author": author
    });

    let request = Request::builder()
        .method("POST")
        .uri("/advertisement")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

async fn search(router: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn titles(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|ad| ad["title"].as_str().unwrap())
        .collect()
}

/// Bike (100, Alice), Car (5000, Bob), Mountain bike (30, alice)
async fn seeded_router() -> Router {
    let router = test_router().await;
    create(&router, "Bike", 100.0, "Alice").await;
    create(&router, "Car", 5000.0, "Bob").await;
    create(&router, "Mountain bike", 30.0, "alice").await;
    router
}

#[tokio::test]
async fn test_no_filters_returns_all_newest_first() {
    let router = seeded_router().await;
    let (status, body) = search(&router, "/advertisement").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body), ["Mountain bike", "Car", "Bike"]);
}

#[tokio::test]
async fn test_empty_store_returns_empty_array() {
    let router = test_router().await;
    let (status, body) = search(&router, "/advertisement").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_title_filter_is_case_insensitive_substring() {
    let router = seeded_router().await;
    let (_, body) = search(&router, "/advertisement?title=BIKE").await;

    assert_eq!(titles(&body), ["Mountain bike", "Bike"]);
}

#[tokio::test]
async fn test_author_filter_is_case_insensitive_substring() {
    let router = seeded_router().await;
    let (_, body) = search(&router, "/advertisement?author=alice").await;

    assert_eq!(titles(&body), ["Mountain bike", "Bike"]);
}

#[tokio::test]
async fn test_price_bounds_are_inclusive() {
    let router = seeded_router().await;
    let (_, body) = search(&router, "/advertisement?min_price=30&max_price=100").await;

    assert_eq!(titles(&body), ["Mountain bike", "Bike"]);
}

#[tokio::test]
async fn test_filters_and_combine() {
    let router = seeded_router().await;
    let (_, body) = search(&router, "/advertisement?title=bike&max_price=50").await;

    assert_eq!(titles(&body), ["Mountain bike"]);
}

#[tokio::test]
async fn test_no_match_is_empty_not_error() {
    let router = seeded_router().await;
    let (status, body) = search(&router, "/advertisement?title=boat").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_non_positive_bound_rejected() {
    let router = seeded_router().await;

    let (status, body) = search(&router, "/advertisement?min_price=0").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "min_price");

    let (status, body) = search(&router, "/advertisement?max_price=-5").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "max_price");
}

#[tokio::test]
async fn test_empty_text_params_do_not_filter() {
    let router = seeded_router().await;
    let (status, body) = search(&router, "/advertisement?title=&author=").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);
}

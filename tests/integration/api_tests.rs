//! API integration tests
//!
//! Requests go straight through the router with `tower::ServiceExt::oneshot`
//! against a fresh in-memory database per test.

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use biblioteca_server::api;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn app() -> Router {
    api::create_router(common::memory_state().await)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&value).expect("Failed to encode body"))
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Failed to parse response")
    };
    (status, value)
}

async fn create(app: &Router, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, "/books", Some(body)).await
}

fn orwell() -> Value {
    json!({
        "title": "1984",
        "author": "Orwell",
        "publisher": "Secker",
        "category": "fiction",
        "year": 1949
    })
}

#[tokio::test]
async fn test_health_check() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_readiness_check() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/ready", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_catalog_scenario() {
    let app = app().await;

    let (status, book) = create(&app, orwell()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book["id"], 1);
    assert_eq!(book["title"], "1984");
    assert_eq!(book["category"], 3);
    assert_eq!(book["year"], 1949);
    assert_eq!(book["available"], true);
    assert_eq!(book["status"], 1);

    let (status, body) = send(&app, Method::PUT, "/books/1/availability?available=false", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, found) = send(&app, Method::GET, "/books/search?term=orwell", None).await;
    assert_eq!(status, StatusCode::OK);
    let found = found.as_array().expect("array");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], 1);
    assert_eq!(found[0]["available"], false);

    let (status, _) = send(&app, Method::DELETE, "/books/1", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, books) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(books, json!([]));
}

#[tokio::test]
async fn test_create_accepts_category_code_and_trims_text() {
    let app = app().await;

    let (status, book) = create(
        &app,
        json!({
            "title": "  Dune  ",
            "author": "Frank Herbert ",
            "publisher": " Chilton",
            "category": 99,
            "year": 1965
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(book["title"], "Dune");
    assert_eq!(book["author"], "Frank Herbert");
    assert_eq!(book["publisher"], "Chilton");
    assert_eq!(book["category"], 99);
}

#[tokio::test]
async fn test_create_rejects_unknown_category() {
    let app = app().await;

    for category in [json!("poetry"), json!(7)] {
        let mut body = orwell();
        body["category"] = category;
        let (status, error) = create(&app, body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["error"], "BadValue");
    }

    let (_, books) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(books, json!([]));
}

#[tokio::test]
async fn test_create_rejects_empty_text_fields() {
    let app = app().await;

    let mut body = orwell();
    body["title"] = json!("");
    let (status, _) = create(&app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut body = orwell();
    body["author"] = json!("   ");
    let (status, error) = create(&app, body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error["message"].as_str().unwrap().contains("Author"));
}

#[tokio::test]
async fn test_create_rejects_missing_fields() {
    let app = app().await;

    let (status, _) = create(&app, json!({ "title": "1984", "author": "Orwell" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_includes_logically_deleted_books() {
    let app = app().await;
    create(&app, orwell()).await;

    let (status, body) = send(&app, Method::PUT, "/books/1/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (_, books) = send(&app, Method::GET, "/books", None).await;
    let books = books.as_array().expect("array");
    assert_eq!(books.len(), 1);
    assert_eq!(books[0]["status"], 9);
    assert_eq!(books[0]["available"], true);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = app().await;
    let mut body = orwell();
    body["title"] = json!("Dune");
    create(&app, body).await;

    for term in ["dune", "DUNE"] {
        let (status, found) = send(&app, Method::GET, &format!("/books/search?term={}", term), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(found.as_array().unwrap().len(), 1);
    }

    let (_, found) = send(&app, Method::GET, "/books/search?term=tolkien", None).await;
    assert_eq!(found, json!([]));
}

#[tokio::test]
async fn test_empty_search_term_lists_everything() {
    let app = app().await;
    create(&app, orwell()).await;
    create(&app, orwell()).await;

    let (status, found) = send(&app, Method::GET, "/books/search?term=", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, all) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(found, all);
    assert_eq!(found.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_requires_term() {
    let app = app().await;
    let (status, _) = send(&app, Method::GET, "/books/search", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_id_returns_not_found() {
    let app = app().await;

    let (status, error) = send(&app, Method::PUT, "/books/42/availability?available=true", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["error"], "NoSuchBook");

    let (status, _) = send(&app, Method::DELETE, "/books/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::PUT, "/books/42/status", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_repeated_delete_returns_not_found() {
    let app = app().await;
    create(&app, orwell()).await;

    let (status, _) = send(&app, Method::DELETE, "/books/1", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, "/books/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_availability_requires_boolean() {
    let app = app().await;
    create(&app, orwell()).await;

    let (status, _) = send(&app, Method::PUT, "/books/1/availability?available=maybe", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(&app, Method::PUT, "/books/1/availability", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_availability_round_trip() {
    let app = app().await;
    create(&app, orwell()).await;

    let (status, _) = send(&app, Method::PUT, "/books/1/availability?available=false", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::PUT, "/books/1/availability?available=true", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, books) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(books[0]["available"], true);
}

#[tokio::test]
async fn test_availability_accepts_numeric_and_word_flags() {
    let app = app().await;
    create(&app, orwell()).await;

    for (flag, expected) in [("0", false), ("1", true), ("no", false), ("on", true)] {
        let uri = format!("/books/1/availability?available={}", flag);
        let (status, _) = send(&app, Method::PUT, &uri, None).await;
        assert_eq!(status, StatusCode::OK, "available={}", flag);

        let (_, books) = send(&app, Method::GET, "/books", None).await;
        assert_eq!(books[0]["available"], expected, "available={}", flag);
    }
}

#[tokio::test]
async fn test_malformed_id_is_rejected() {
    let app = app().await;
    let (status, error) = send(&app, Method::DELETE, "/books/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["error"], "BadValue");
}

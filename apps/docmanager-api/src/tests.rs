//! HTTP endpoint tests using axum-test

use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::{app, AppState};

/// Create a test server with the full router and an empty repository
fn create_test_server() -> TestServer {
    TestServer::new(app(Arc::new(AppState::new()))).unwrap()
}

fn sample_document() -> Value {
    json!({
        "number": "123",
        "creation_date": "2025-07-16",
        "summary": "My summary",
    })
}

#[tokio::test]
async fn test_health_returns_200() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();

    let json = response.json::<Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "docmanager-api");
}

#[tokio::test]
async fn test_index_serves_html_page() {
    let server = create_test_server();
    let response = server.get("/").await;
    response.assert_status_ok();

    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    assert!(response.text().contains("Document Manager"));
}

#[tokio::test]
async fn test_full_document_lifecycle() {
    let server = create_test_server();

    let response = server.post("/documents").json(&sample_document()).await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>(), sample_document());

    let response = server.get("/documents/123").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), sample_document());

    let response = server
        .put("/documents/123")
        .json(&json!({ "summary": "Updated" }))
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({
            "number": "123",
            "creation_date": "2025-07-16",
            "summary": "Updated",
        })
    );

    let response = server.delete("/documents/123").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["message"], "Document 123 deleted");

    server.get("/documents/123").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_rejects_missing_field() {
    let server = create_test_server();

    let response = server
        .post("/documents")
        .json(&json!({ "number": "1", "creation_date": "2025-07-16" }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Field 'summary' is missing");
    assert_eq!(json["status"], 400);
    assert_eq!(json["field"], "summary");
}

#[tokio::test]
async fn test_create_rejects_signed_and_short_years() {
    let server = create_test_server();

    for raw in ["+2025-07-16", "0-1-1", " 2025-07-16"] {
        let response = server
            .post("/documents")
            .json(&json!({ "number": "1", "creation_date": raw, "summary": "" }))
            .await;
        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["field"], "creation_date");
    }

    server.get("/documents/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_oversized_body_returns_json_error() {
    let server = create_test_server();

    let response = server
        .post("/documents")
        .text("x".repeat(3 * 1024 * 1024))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    let json = response.json::<Value>();
    assert_eq!(json["status"], 413);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_create_rejects_bad_date() {
    let server = create_test_server();

    let response = server
        .post("/documents")
        .json(&json!({ "number": "1", "creation_date": "16-07-2025", "summary": "" }))
        .await;

    response.assert_status_bad_request();
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.contains("creation_date"), "unexpected message: {error}");

    server.get("/documents/1").await.assert_status_not_found();
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let server = create_test_server();

    let response = server.post("/documents").text("{not json").await;

    response.assert_status_bad_request();
    let error = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(error.starts_with("Invalid request"));
}

#[tokio::test]
async fn test_create_accepts_json_without_content_type() {
    let server = create_test_server();

    let response = server
        .post("/documents")
        .text(sample_document().to_string())
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_duplicate_create_returns_conflict() {
    let server = create_test_server();
    server
        .post("/documents")
        .json(&sample_document())
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/documents")
        .json(&json!({
            "number": "123",
            "creation_date": "2020-01-01",
            "summary": "Other",
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);

    let stored = server.get("/documents/123").await.json::<Value>();
    assert_eq!(stored, sample_document());
}

#[tokio::test]
async fn test_get_unknown_document_returns_404() {
    let server = create_test_server();
    let response = server.get("/documents/nope").await;
    response.assert_status_not_found();
    let json = response.json::<Value>();
    assert_eq!(json["error"], "Document not found: nope");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_update_unknown_document_returns_404() {
    let server = create_test_server();
    server
        .put("/documents/nope")
        .json(&json!({ "summary": "x" }))
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_update_rejects_invalid_summary() {
    let server = create_test_server();
    server.post("/documents").json(&sample_document()).await;

    server
        .put("/documents/123")
        .json(&json!({ "summary": 7 }))
        .await
        .assert_status_bad_request();

    server
        .put("/documents/123")
        .json(&json!({}))
        .await
        .assert_status_bad_request();

    let stored = server.get("/documents/123").await.json::<Value>();
    assert_eq!(stored["summary"], "My summary");
}

#[tokio::test]
async fn test_update_allows_empty_summary() {
    let server = create_test_server();
    server.post("/documents").json(&sample_document()).await;

    let response = server
        .put("/documents/123")
        .json(&json!({ "summary": "" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["summary"], "");
}

#[tokio::test]
async fn test_delete_unknown_document_returns_404() {
    let server = create_test_server();
    server
        .delete("/documents/nope")
        .await
        .assert_status_not_found();
}

#[tokio::test]
async fn test_download_returns_text_attachment() {
    let server = create_test_server();
    server.post("/documents").json(&sample_document()).await;

    let response = server.get("/documents/123/download").await;
    response.assert_status_ok();

    assert_eq!(
        response.header("content-disposition").to_str().unwrap(),
        "attachment; filename=\"123_document.txt\""
    );
    assert!(response
        .header("content-type")
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(
        response.text(),
        "Document Number: 123\nCreation Date: 2025-07-16\nSummary:\nMy summary"
    );
}

#[tokio::test]
async fn test_download_unknown_document_returns_404() {
    let server = create_test_server();
    let response = server.get("/documents/nope/download").await;
    response.assert_status_not_found();
    assert_eq!(response.json::<Value>()["status"], 404);
}

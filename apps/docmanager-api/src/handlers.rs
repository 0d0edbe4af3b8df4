//! HTTP handlers for the document manager API

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::{header, StatusCode},
    response::Html,
    Json,
};
use document_core::Document;
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{DeleteResponse, HealthResponse};
use crate::state::AppState;

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Handler: GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler: GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "docmanager-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Handler: POST /documents
pub async fn create_document(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Document>), ApiError> {
    let payload = parse_json(&body?)?;
    let document = state.documents.create(&payload)?;
    Ok((StatusCode::CREATED, Json(document)))
}

/// Handler: GET /documents/:number
pub async fn get_document(
    State(state): State<Arc<AppState>>,
    Path(number): Path<String>,
) -> Result<Json<Document>, ApiError> {
    Ok(Json(state.documents.get(&number)?))
}

/// Handler: GET /documents/:number/download
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    Path(number): Path<String>,
) -> Result<(StatusCode, [(header::HeaderName, String); 2], String), ApiError> {
    let document = state.documents.get(&number)?;

    Ok((
        StatusCode::OK,
        [
            (
                header::CONTENT_TYPE,
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", document.download_filename()),
            ),
        ],
        document.to_text(),
    ))
}

/// Handler: PUT /documents/:number
pub async fn update_document(
    State(state): State<Arc<AppState>>,
    Path(number): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Document>, ApiError> {
    let payload = parse_json(&body?)?;
    Ok(Json(state.documents.update_summary(&number, &payload)?))
}

/// Handler: DELETE /documents/:number
pub async fn delete_document(
    State(state): State<Arc<AppState>>,
    Path(number): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.documents.delete(&number)?;
    Ok(Json(DeleteResponse {
        message: format!("Document {} deleted", number),
    }))
}

/// Parse a JSON body whatever its declared content type
fn parse_json(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice(body)
        .map_err(|e| ApiError::InvalidRequest(format!("Body is not valid JSON: {}", e)))
}

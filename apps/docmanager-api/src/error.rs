//! Error types for the document manager API

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use document_core::{DocumentError, Field};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid request body: {0}")]
    Body(#[from] BytesRejection),

    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Body(rejection) => rejection.status(),
            ApiError::Document(DocumentError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Document(DocumentError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Document(DocumentError::NotFound(_)) => StatusCode::NOT_FOUND,
        }
    }

    /// Offending payload field for validation failures
    pub fn field(&self) -> Option<Field> {
        match self {
            ApiError::Document(DocumentError::Validation(err)) => err.field(),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        tracing::warn!("Request failed ({}): {}", status.as_u16(), message);

        let mut body = json!({
            "error": message,
            "status": status.as_u16(),
        });
        if let Some(field) = self.field() {
            body["field"] = json!(field.as_str());
        }

        (status, Json(body)).into_response()
    }
}

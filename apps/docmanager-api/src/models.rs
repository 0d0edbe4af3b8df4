//! Response bodies for the document manager API
//!
//! Documents themselves serialize straight from [`document_core::Document`].

use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Confirmation returned after a delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
}

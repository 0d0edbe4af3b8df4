//! Document Manager API
//!
//! REST facade over the in-memory [`document_core::DocumentRepository`]:
//! - `POST /documents` create
//! - `GET /documents/:number` read, `GET /documents/:number/download` as text
//! - `PUT /documents/:number` update the summary
//! - `DELETE /documents/:number` delete
//!
//! `GET /` serves a single HTML page driving the endpoints above.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

pub mod error;
pub mod handlers;
pub mod models;
pub mod state;

#[cfg(test)]
mod tests;

pub use state::AppState;

/// Build the router with all routes bound to `state`
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/documents", post(handlers::create_document))
        .route(
            "/documents/:number",
            get(handlers::get_document)
                .put(handlers::update_document)
                .delete(handlers::delete_document),
        )
        .route(
            "/documents/:number/download",
            get(handlers::download_document),
        )
        .with_state(state)
}

//! Application state for the document manager API

use document_core::DocumentRepository;

/// Shared by every handler through `Arc<AppState>`.
///
/// Built once at startup and dropped when the server stops; nothing is
/// persisted in between.
#[derive(Debug, Default)]
pub struct AppState {
    pub documents: DocumentRepository,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("Initializing in-memory document repository");
        Self {
            documents: DocumentRepository::new(),
        }
    }
}

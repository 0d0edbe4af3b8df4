//! In-memory document repository
//!
//! The repository is the sole owner of the `number -> Document` mapping.
//! Each operation holds the lock for its whole check-then-mutate sequence,
//! so concurrent callers observe a serial order of writes.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use tracing::info;

use crate::error::DocumentError;
use crate::types::Document;
use crate::validation::{validate_for_create, validate_for_update};

/// Documents keyed by number, held in process memory only
#[derive(Debug, Default)]
pub struct DocumentRepository {
    documents: RwLock<HashMap<String, Document>>,
}

impl DocumentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and insert a new document.
    ///
    /// Fails with [`DocumentError::Validation`] for a malformed payload and
    /// [`DocumentError::Conflict`] if the number is already taken.
    pub fn create(&self, payload: &Value) -> Result<Document, DocumentError> {
        let document = validate_for_create(payload)?;

        let mut documents = self.write();
        if documents.contains_key(document.number()) {
            return Err(DocumentError::Conflict(document.number().to_string()));
        }
        documents.insert(document.number().to_string(), document.clone());

        info!("Document created: {}", document.number());
        Ok(document)
    }

    /// Look up a document by exact number.
    ///
    /// Returns an owned copy; changing it does not touch the stored record.
    pub fn get(&self, number: &str) -> Result<Document, DocumentError> {
        self.read()
            .get(number)
            .cloned()
            .ok_or_else(|| DocumentError::NotFound(number.to_string()))
    }

    /// Replace the summary of an existing document
    pub fn update_summary(&self, number: &str, payload: &Value) -> Result<Document, DocumentError> {
        let mut documents = self.write();
        let document = documents
            .get_mut(number)
            .ok_or_else(|| DocumentError::NotFound(number.to_string()))?;

        let summary = validate_for_update(payload)?;
        document.set_summary(summary);

        info!("Document updated: {}", number);
        Ok(document.clone())
    }

    /// Remove a document
    pub fn delete(&self, number: &str) -> Result<(), DocumentError> {
        if self.write().remove(number).is_none() {
            return Err(DocumentError::NotFound(number.to_string()));
        }

        info!("Document deleted: {}", number);
        Ok(())
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Writes validate before mutating, so a poisoned map is never half-written.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Document>> {
        self.documents
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Document>> {
        self.documents
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

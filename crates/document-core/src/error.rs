//! Error types for document validation and storage

use std::fmt;

use thiserror::Error;

/// Document fields that validation can complain about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Number,
    CreationDate,
    Summary,
}

impl Field {
    /// Key of the field in a JSON payload
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Number => "number",
            Field::CreationDate => "creation_date",
            Field::Summary => "summary",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payload was rejected before reaching storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Payload must be a JSON object")]
    NotAnObject,

    #[error("Field '{0}' is missing")]
    Missing(Field),

    #[error("Field '{0}' must not be null")]
    Null(Field),

    #[error("Field '{0}' must be a string")]
    NotAString(Field),

    #[error("Field '{0}' must not be empty")]
    Empty(Field),

    #[error("Field 'creation_date' must be a date in YYYY-MM-DD format, got '{0}'")]
    InvalidDate(String),
}

impl ValidationError {
    /// The offending field, if the failure is tied to one
    pub fn field(&self) -> Option<Field> {
        match self {
            ValidationError::NotAnObject => None,
            ValidationError::Missing(field)
            | ValidationError::Null(field)
            | ValidationError::NotAString(field)
            | ValidationError::Empty(field) => Some(*field),
            ValidationError::InvalidDate(_) => Some(Field::CreationDate),
        }
    }
}

/// Failure of a repository operation.
///
/// Every variant is terminal: the repository is left exactly as it was
/// before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Document already exists: {0}")]
    Conflict(String),

    #[error("Document not found: {0}")]
    NotFound(String),
}

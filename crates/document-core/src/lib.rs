//! Document validation and storage
//!
//! This crate owns the rules that decide whether a document payload is
//! well-formed and the in-memory repository that enforces identity and
//! lifecycle invariants:
//!
//! - [`validation`] turns raw JSON payloads into typed values
//! - [`repository`] stores documents keyed by their number
//!
//! HTTP routing, the HTML page and process startup live in the
//! `docmanager-api` app, which calls into this crate.

pub mod error;
pub mod repository;
pub mod types;
pub mod validation;

pub use error::{DocumentError, Field, ValidationError};
pub use repository::DocumentRepository;
pub use types::{Document, DATE_FORMAT};
pub use validation::{validate_for_create, validate_for_update};

//! The document record

use chrono::NaiveDate;
use serde::Serialize;

/// Textual format accepted for `creation_date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A managed document record.
///
/// Values are only produced by [`crate::validate_for_create`], so a
/// `Document` always has a non-empty number. `number` and `creation_date`
/// have no setters; the repository is the only place a summary changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    number: String,
    creation_date: NaiveDate,
    summary: String,
}

impl Document {
    pub(crate) fn new(number: String, creation_date: NaiveDate, summary: String) -> Self {
        Self {
            number,
            creation_date,
            summary,
        }
    }

    /// Primary key
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn creation_date(&self) -> NaiveDate {
        self.creation_date
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub(crate) fn set_summary(&mut self, summary: String) {
        self.summary = summary;
    }

    /// Plain-text rendering used for downloads, one field per line
    pub fn to_text(&self) -> String {
        format!(
            "Document Number: {}\nCreation Date: {}\nSummary:\n{}",
            self.number,
            self.creation_date.format(DATE_FORMAT),
            self.summary
        )
    }

    /// Suggested file name for the text download.
    ///
    /// Characters outside `[A-Za-z0-9._-]` become `_` so the name is safe
    /// inside a quoted `Content-Disposition` header.
    pub fn download_filename(&self) -> String {
        let stem: String = self
            .number
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        format!("{}_document.txt", stem)
    }
}

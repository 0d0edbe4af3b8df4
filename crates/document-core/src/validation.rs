//! Payload validation
//!
//! Pure functions turning a parsed JSON payload into typed document values.
//! Fields are checked in a fixed order and the first failure wins, so the
//! error always names exactly one field.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::error::{Field, ValidationError};
use crate::types::{Document, DATE_FORMAT};

/// Validate a create payload carrying `number`, `creation_date` and `summary`
pub fn validate_for_create(payload: &Value) -> Result<Document, ValidationError> {
    let object = as_object(payload)?;

    let number = required_string(object, Field::Number)?;
    if number.is_empty() {
        return Err(ValidationError::Empty(Field::Number));
    }

    let raw_date = required_string(object, Field::CreationDate)?;
    let creation_date = parse_date(raw_date)?;

    let summary = required_string(object, Field::Summary)?;

    Ok(Document::new(
        number.to_string(),
        creation_date,
        summary.to_string(),
    ))
}

/// Validate an update payload and return the new summary.
///
/// Other keys in the payload are ignored; only the summary is mutable.
pub fn validate_for_update(payload: &Value) -> Result<String, ValidationError> {
    let object = as_object(payload)?;
    required_string(object, Field::Summary).map(str::to_string)
}

/// Parse a `YYYY-MM-DD` date.
///
/// The year must be exactly four digits; month and day may drop their
/// leading zero. Signs and whitespace are rejected before chrono sees the
/// string, since its `%Y` would otherwise accept them.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    if !has_date_shape(raw) {
        return Err(ValidationError::InvalidDate(raw.to_string()));
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

fn has_date_shape(raw: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };

    let mut parts = raw.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
        }
        _ => false,
    }
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, ValidationError> {
    payload.as_object().ok_or(ValidationError::NotAnObject)
}

fn required_string(object: &Map<String, Value>, field: Field) -> Result<&str, ValidationError> {
    match object.get(field.as_str()) {
        None => Err(ValidationError::Missing(field)),
        Some(Value::Null) => Err(ValidationError::Null(field)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(ValidationError::NotAString(field)),
    }
}

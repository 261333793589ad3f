//! Normalization of raw form input before it is written.

use chrono::NaiveDate;

use crate::server::error::validation::ValidationError;

/// Trimmed value, `None` for a missing, empty or whitespace-only string
pub fn blank_to_none(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Required non-blank field, trimmed
pub fn require(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    Ok(value.to_string())
}

/// Parse an optional `YYYY-MM-DD` date, blank input is `None` rather than an empty string
pub fn normalize_date(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<NaiveDate>, ValidationError> {
    match blank_to_none(value) {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ValidationError::InvalidDate { field, value: raw }),
    }
}

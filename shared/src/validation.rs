//! Input validation helpers
//!
//! Centralized text length constants and validation functions. The form
//! controller and the registration store both build their field checks
//! from these helpers, so a payload rejected on one side is rejected on
//! the other.

use std::collections::BTreeMap;

// ── Text length limits ──────────────────────────────────────────────

/// Names, countries, cities, free-form select values
pub const MAX_NAME_LEN: usize = 200;

/// Short identifiers: mobile, Emirates ID, VAT number, dates
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Addresses
pub const MAX_ADDRESS_LEN: usize = 500;

/// Minimum accepted mobile number length
pub const MIN_MOBILE_LEN: usize = 8;

// ── Field-level error collection ────────────────────────────────────

/// Validation errors keyed by field name.
///
/// BTreeMap keeps iteration order stable so error lists render the same
/// way on every submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} is required"));
    }
    if value.len() > max_len {
        return Err(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), String> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ));
    }
    Ok(())
}

/// Validate that a string meets a minimum length.
pub fn validate_min_len(value: &str, field: &str, min_len: usize) -> Result<(), String> {
    if value.len() < min_len {
        return Err(format!("{field} must be at least {min_len} characters"));
    }
    Ok(())
}

/// Validate email shape: single non-empty local part, dotted domain,
/// no whitespace. Length capped at [`MAX_EMAIL_LEN`].
pub fn validate_email(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err("Email is required".to_string());
    }
    if value.len() > MAX_EMAIL_LEN {
        return Err(format!(
            "Email is too long ({} chars, max {MAX_EMAIL_LEN})",
            value.len()
        ));
    }
    let valid = match value.rsplit_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !local.contains('@')
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    };
    if !valid {
        return Err("Invalid email address".to_string());
    }
    Ok(())
}

/// Validate date format (YYYY-MM-DD)
pub fn validate_date(value: &str, field: &str) -> Result<(), String> {
    chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| format!("{field} must be a valid date (YYYY-MM-DD)"))
}

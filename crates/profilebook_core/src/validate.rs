//! Field validation for profile records.
//!
//! # Responsibility
//! - Gate every persisted write behind the same pure field check.
//! - Report one user-facing message per offending field.
//!
//! # Invariants
//! - No I/O, no mutation of the candidate, deterministic output.
//! - An empty mapping is the sole success signal.
//! - `picture` is optional and never validated.

use crate::model::profile::{Profile, ProfileField};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static DATE_OF_BIRTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date shape regex"));

/// Message for a non-empty `date_of_birth` that does not match the shape.
pub const DATE_FORMAT_MESSAGE: &str = "Date of Birth must be in the format YYYY-MM-DD";

/// Mapping from offending field to a user-facing message.
///
/// Ordered by field display order so presentation layers can iterate it
/// directly.
pub type FieldErrors = BTreeMap<ProfileField, String>;

/// Validates a candidate record for persistence.
///
/// # Contract
/// - Every text field empty after trimming yields `"<Label> is required"`.
/// - A non-empty `date_of_birth` must match `^\d{4}-\d{2}-\d{2}$`; the
///   format message supersedes the required message for that field.
/// - Returns an empty mapping if and only if the candidate may be
///   persisted.
pub fn validate_profile(candidate: &Profile) -> FieldErrors {
    let mut errors = FieldErrors::new();

    for field in ProfileField::ALL {
        let value = candidate.field_value(field);
        if value.trim().is_empty() {
            errors.insert(field, format!("{} is required", field.label()));
        } else if field == ProfileField::DateOfBirth && !DATE_OF_BIRTH_RE.is_match(value) {
            errors.insert(field, DATE_FORMAT_MESSAGE.to_string());
        }
    }

    errors
}

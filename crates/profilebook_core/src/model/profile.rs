//! Profile domain model.
//!
//! # Responsibility
//! - Define the canonical profile record and its stable identity.
//! - Provide the built-in default record and the transient selection
//!   placeholder as distinct factories.
//!
//! # Invariants
//! - `uuid` is stable for the record's lifetime and never reused.
//! - `date_of_birth` is expected in `YYYY-MM-DD` shape; enforcement lives
//!   in `validate`, not in the type.
//! - `selection_placeholder()` values must never be written to storage.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every profile record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type ProfileId = Uuid;

const DEFAULT_FIRST_NAME: &str = "John";
const DEFAULT_LAST_NAME: &str = "Doe";
const DEFAULT_DATE_OF_BIRTH: &str = "1990-01-01";
const DEFAULT_NATIONALITY: &str = "American";
const DEFAULT_SHORT_BIO: &str = "Software Engineer.";
const DEFAULT_PICTURE: &str =
    "https://aboutreact.com/wp-content/uploads/2018/07/react_native_imageview.png";

/// The five validated text fields of a profile.
///
/// Ordered so field-error mappings iterate in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    FirstName,
    LastName,
    DateOfBirth,
    Nationality,
    ShortBio,
}

impl ProfileField {
    /// All validated fields in display order.
    pub const ALL: [ProfileField; 5] = [
        ProfileField::FirstName,
        ProfileField::LastName,
        ProfileField::DateOfBirth,
        ProfileField::Nationality,
        ProfileField::ShortBio,
    ];

    /// Wire name, matching the serialized record field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::DateOfBirth => "dateOfBirth",
            Self::Nationality => "nationality",
            Self::ShortBio => "shortBio",
        }
    }

    /// Human-readable label used in validation messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::DateOfBirth => "Date of Birth",
            Self::Nationality => "Nationality",
            Self::ShortBio => "Short Bio",
        }
    }
}

impl Display for ProfileField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Canonical profile record.
///
/// Serialized field names follow the external camelCase schema; `uuid` is
/// an internal surrogate carried for lookup, replacement and removal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Stable internal ID assigned at creation.
    pub uuid: ProfileId,
    pub first_name: String,
    pub last_name: String,
    /// Expected shape `YYYY-MM-DD`; no calendar validity beyond shape.
    pub date_of_birth: String,
    pub nationality: String,
    pub short_bio: String,
    /// Image URI; `None` renders as a placeholder image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl Profile {
    /// Creates a record with a generated stable ID and no picture.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: impl Into<String>,
        nationality: impl Into<String>,
        short_bio: impl Into<String>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: date_of_birth.into(),
            nationality: nationality.into(),
            short_bio: short_bio.into(),
            picture: None,
        }
    }

    /// The built-in default record.
    ///
    /// Seeds a fresh store and provides the starting values of a create
    /// draft. Each call yields a new identity.
    pub fn builtin_default() -> Self {
        let mut profile = Self::new(
            DEFAULT_FIRST_NAME,
            DEFAULT_LAST_NAME,
            DEFAULT_DATE_OF_BIRTH,
            DEFAULT_NATIONALITY,
            DEFAULT_SHORT_BIO,
        );
        profile.picture = Some(DEFAULT_PICTURE.to_string());
        profile
    }

    /// The transient record shown while the list is empty.
    ///
    /// Same display values as the built-in default, but a distinct factory:
    /// this value only ever lives in the selection slot and is never
    /// inserted into the record list or written to storage.
    pub fn selection_placeholder() -> Self {
        Self::builtin_default()
    }

    /// Returns the current value of one validated text field.
    pub fn field_value(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::DateOfBirth => &self.date_of_birth,
            ProfileField::Nationality => &self.nationality,
            ProfileField::ShortBio => &self.short_bio,
        }
    }

    /// Field-level setter for draft editing.
    ///
    /// Covers the five text fields; `picture` changes only through the
    /// image-selection path.
    pub fn set_field(&mut self, field: ProfileField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProfileField::FirstName => self.first_name = value,
            ProfileField::LastName => self.last_name = value,
            ProfileField::DateOfBirth => self.date_of_birth = value,
            ProfileField::Nationality => self.nationality = value,
            ProfileField::ShortBio => self.short_bio = value,
        }
    }

    /// `"<first> <last>"`, the record's list/display label.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

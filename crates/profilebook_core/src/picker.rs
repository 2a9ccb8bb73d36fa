//! Image selection seam.
//!
//! # Responsibility
//! - Define the picker contract fulfilled by the device/presentation
//!   layer.
//! - Apply a selection outcome to a draft without touching other fields.
//!
//! # Invariants
//! - A cancelled pick leaves the draft's picture unchanged.

use crate::model::profile::Profile;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type PickerResult<T> = Result<T, PickerError>;

/// Failure raised by a picker backend.
#[derive(Debug)]
pub enum PickerError {
    /// The device image service could not be reached.
    Unavailable(String),
}

impl Display for PickerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "image picker unavailable: {message}"),
        }
    }
}

impl Error for PickerError {}

/// Outcome of one image-selection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSelection {
    /// The user dismissed the picker.
    Cancelled,
    /// The user chose an image addressed by `uri`.
    Picked { uri: String },
}

/// Image-selection service consumed when editing a draft's picture.
pub trait ImagePicker {
    fn pick_image(&self) -> PickerResult<ImageSelection>;
}

/// Canned picker returning a fixed outcome.
///
/// Stands in for the device service in tests and the smoke CLI.
#[derive(Debug, Clone)]
pub struct FixedImagePicker {
    selection: ImageSelection,
}

impl FixedImagePicker {
    /// A picker that always selects `uri`.
    pub fn picked(uri: impl Into<String>) -> Self {
        Self {
            selection: ImageSelection::Picked { uri: uri.into() },
        }
    }

    /// A picker that always cancels.
    pub fn cancelled() -> Self {
        Self {
            selection: ImageSelection::Cancelled,
        }
    }
}

impl ImagePicker for FixedImagePicker {
    fn pick_image(&self) -> PickerResult<ImageSelection> {
        Ok(self.selection.clone())
    }
}

/// Applies a selection outcome to a draft.
///
/// `Picked` replaces the draft's picture URI; `Cancelled` is a no-op.
pub fn apply_selection(draft: &mut Profile, selection: ImageSelection) {
    if let ImageSelection::Picked { uri } = selection {
        draft.picture = Some(uri);
    }
}

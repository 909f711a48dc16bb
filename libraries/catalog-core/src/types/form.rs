//! Typed form inputs and validation
//!
//! Submitted form data is deserialized into an explicit input struct and
//! validated into a tagged result before any storage interaction. Field
//! errors are collected without short-circuiting so the form can report
//! all of them at once.

use serde::{Deserialize, Serialize};

use super::CreateGenre;

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Outcome of validating a form input.
///
/// `Invalid` keeps the sanitized candidate so the form can be
/// re-rendered with the submitted values filled back in.
#[derive(Debug, Clone)]
pub enum Validated<T> {
    Valid(T),
    Invalid {
        candidate: T,
        errors: Vec<FieldError>,
    },
}

/// Raw genre creation form, as submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

impl GenreForm {
    /// Trim and check the `name` field, collecting every field error.
    pub fn validate(self) -> Validated<CreateGenre> {
        let name = self.name.trim().to_string();

        let mut errors = Vec::new();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Genre name required"));
        }

        let candidate = CreateGenre { name };
        if errors.is_empty() {
            Validated::Valid(candidate)
        } else {
            Validated::Invalid { candidate, errors }
        }
    }
}

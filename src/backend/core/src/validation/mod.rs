//! Caller-side validation with field-level error support.
//!
//! The store accepts any draft it is given; the surfaces calling into it
//! (HTTP handlers, CLI) validate first. Validation failures collect per-field
//! errors that convert into a [`TrackError`] naming the offending fields.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

use crate::error::{ErrorCode, FieldErrorInfo, TrackError};
use crate::jobs::JobDraft;
use crate::profile::Profile;

/// Compiled email shape check, built once.
static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[\w.+-]+@([\w-]+\.)+[\w-]{2,}$").expect("email regex must compile")
    })
}

// ═══════════════════════════════════════════════════════════════════════════════
// Validation Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending field
    pub field: String,

    /// Human-readable failure message
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A collection of field-level failures from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Record a required-field failure.
    pub fn required(&mut self, field: impl Into<String>) {
        self.add(field, "field is required");
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Ok when no failures were recorded, Err(self) otherwise.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl From<ValidationErrors> for TrackError {
    fn from(errors: ValidationErrors) -> Self {
        let fields = errors
            .errors
            .into_iter()
            .map(|e| FieldErrorInfo {
                field: e.field,
                message: e.message,
            })
            .collect();
        TrackError::new(ErrorCode::ValidationError, "Validation failed").with_fields(fields)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Rules
// ═══════════════════════════════════════════════════════════════════════════════

/// Validate a job draft: position, company, and location must be non-empty
/// after trimming.
pub fn validate_draft(draft: &JobDraft) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if draft.position.trim().is_empty() {
        errors.required("position");
    }
    if draft.company.trim().is_empty() {
        errors.required("company");
    }
    if draft.location.trim().is_empty() {
        errors.required("location");
    }

    errors.into_result()
}

/// Validate a profile update: name required, email required and well formed.
pub fn validate_profile(profile: &Profile) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if profile.name.trim().is_empty() {
        errors.required("name");
    }
    if profile.email.trim().is_empty() {
        errors.required("email");
    } else if !email_regex().is_match(profile.email.trim()) {
        errors.add("email", "must be a valid email address");
    }

    errors.into_result()
}

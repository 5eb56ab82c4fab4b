//! Job record definitions.
//!
//! A [`Job`] is one job application: position, company, location, a status
//! in the application pipeline, and an employment kind. Identity is assigned
//! by the store at creation time and doubles as the creation-order sort key.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// ═══════════════════════════════════════════════════════════════════════════════
// Job Identification
// ═══════════════════════════════════════════════════════════════════════════════

/// Unique identifier for a job record.
///
/// Millisecond-scale and strictly monotonic: the store assigns
/// `max(now_millis, last_id + 1)`, so ids sort by creation order and two
/// creations within the same millisecond never collide.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct JobId(pub i64);

impl JobId {
    /// Interpret the id as a millisecond Unix timestamp, when possible.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(self.0).single()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for JobId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Status and Kind
// ═══════════════════════════════════════════════════════════════════════════════

/// Status of a job application. Closed set: no "unknown" bucket exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    /// Application submitted, no response yet
    #[default]
    Pending,
    /// Interview scheduled or in progress
    Interview,
    /// Application declined
    Declined,
}

impl JobStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Interview => "interview",
            Self::Declined => "declined",
        }
    }

    /// All status values, in display order.
    pub const ALL: [JobStatus; 3] = [Self::Pending, Self::Interview, Self::Declined];
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Employment kind of a job posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobKind {
    #[default]
    FullTime,
    PartTime,
    Remote,
    Internship,
}

impl JobKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full-time",
            Self::PartTime => "part-time",
            Self::Remote => "remote",
            Self::Internship => "internship",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Records
// ═══════════════════════════════════════════════════════════════════════════════

/// One job application record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Unique identifier, assigned by the store
    pub id: JobId,

    /// Role applied for
    pub position: String,

    /// Company applied to
    pub company: String,

    /// Job location
    pub location: String,

    /// Application status
    pub status: JobStatus,

    /// Employment kind
    #[serde(rename = "type")]
    pub kind: JobKind,

    /// Creation timestamp, assigned by the store
    pub created_at: DateTime<Utc>,
}

/// A job draft: everything the caller supplies to create a [`Job`].
///
/// The store accepts any draft it is given; required-field validation is the
/// caller's responsibility (see [`crate::validation`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDraft {
    pub position: String,
    pub company: String,
    pub location: String,
    #[serde(default)]
    pub status: JobStatus,
    #[serde(default, rename = "type")]
    pub kind: JobKind,
}

impl JobDraft {
    /// Create a draft with default status (`pending`) and kind (`full-time`).
    pub fn new(
        position: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            position: position.into(),
            company: company.into(),
            location: location.into(),
            status: JobStatus::default(),
            kind: JobKind::default(),
        }
    }

    /// Builder: set the status.
    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    /// Builder: set the kind.
    pub fn with_kind(mut self, kind: JobKind) -> Self {
        self.kind = kind;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&JobStatus::Interview).unwrap(),
            "\"interview\""
        );
        let parsed: JobStatus = serde_json::from_str("\"declined\"").unwrap();
        assert_eq!(parsed, JobStatus::Declined);
    }

    #[test]
    fn test_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&JobKind::FullTime).unwrap(),
            "\"full-time\""
        );
        let parsed: JobKind = serde_json::from_str("\"part-time\"").unwrap();
        assert_eq!(parsed, JobKind::PartTime);
    }

    #[test]
    fn test_draft_defaults() {
        let draft = JobDraft::new("Backend Engineer", "Acme", "Remote");
        assert_eq!(draft.status, JobStatus::Pending);
        assert_eq!(draft.kind, JobKind::FullTime);
    }

    #[test]
    fn test_draft_deserializes_without_optional_fields() {
        let draft: JobDraft = serde_json::from_str(
            r#"{"position": "Dev", "company": "Acme", "location": "NYC"}"#,
        )
        .unwrap();
        assert_eq!(draft.status, JobStatus::Pending);
        assert_eq!(draft.kind, JobKind::FullTime);
    }

    #[test]
    fn test_job_serializes_kind_as_type() {
        let job = Job {
            id: JobId(1),
            position: "Dev".into(),
            company: "Acme".into(),
            location: "NYC".into(),
            status: JobStatus::Pending,
            kind: JobKind::Remote,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&job).unwrap();
        assert_eq!(json["type"], "remote");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_id_ordering_matches_numeric_order() {
        assert!(JobId(2) > JobId(1));
        assert_eq!(JobId::from(5), JobId(5));
    }
}

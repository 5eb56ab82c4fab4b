//! The filter engine: pure predicate composition over a job snapshot.
//!
//! Filtering is sequential predicate narrowing: search text first, then
//! status, then kind. The three predicates compose conjunctively and each is
//! independently bypassable via its sentinel (`all` / empty search). The
//! function is pure and order preserving; callers recompute it against a
//! fresh store snapshot whenever the collection or the criteria change.

use serde::{Deserialize, Serialize};

use super::job::{Job, JobKind, JobStatus};

/// Status dimension of the criteria: a concrete status or the `all` sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Do not filter on status
    #[default]
    All,
    Pending,
    Interview,
    Declined,
}

impl StatusFilter {
    /// Whether the given status passes this filter.
    pub fn matches(&self, status: JobStatus) -> bool {
        match self {
            Self::All => true,
            Self::Pending => status == JobStatus::Pending,
            Self::Interview => status == JobStatus::Interview,
            Self::Declined => status == JobStatus::Declined,
        }
    }
}

impl From<JobStatus> for StatusFilter {
    fn from(status: JobStatus) -> Self {
        match status {
            JobStatus::Pending => Self::Pending,
            JobStatus::Interview => Self::Interview,
            JobStatus::Declined => Self::Declined,
        }
    }
}

/// Kind dimension of the criteria: a concrete kind or the `all` sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KindFilter {
    /// Do not filter on kind
    #[default]
    All,
    FullTime,
    PartTime,
    Remote,
    Internship,
}

impl KindFilter {
    /// Whether the given kind passes this filter.
    pub fn matches(&self, kind: JobKind) -> bool {
        match self {
            Self::All => true,
            Self::FullTime => kind == JobKind::FullTime,
            Self::PartTime => kind == JobKind::PartTime,
            Self::Remote => kind == JobKind::Remote,
            Self::Internship => kind == JobKind::Internship,
        }
    }
}

impl From<JobKind> for KindFilter {
    fn from(kind: JobKind) -> Self {
        match kind {
            JobKind::FullTime => Self::FullTime,
            JobKind::PartTime => Self::PartTime,
            JobKind::Remote => Self::Remote,
            JobKind::Internship => Self::Internship,
        }
    }
}

/// Caller-supplied filter query. Transient: owned by the caller, never
/// persisted. All dimensions default to their identity values, so the empty
/// query string deserializes into the identity filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Free-text search over position and company; empty means no search
    #[serde(default)]
    pub search: String,

    /// Status selector
    #[serde(default)]
    pub status: StatusFilter,

    /// Kind selector (wire name `type`, matching the job record)
    #[serde(default, rename = "type")]
    pub kind: KindFilter,
}

impl FilterCriteria {
    /// The identity criteria: empty search, both selectors at `all`.
    pub fn all() -> Self {
        Self::default()
    }

    /// Builder: set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Builder: set the status selector.
    pub fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Builder: set the kind selector.
    pub fn with_kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    /// Whether every dimension is at its sentinel (identity filter).
    pub fn is_identity(&self) -> bool {
        self.search.is_empty() && self.status == StatusFilter::All && self.kind == KindFilter::All
    }
}

/// Apply the criteria to a job snapshot, preserving input order.
///
/// 1. Non-empty search retains jobs whose lower-cased position OR company
///    contains the lower-cased search text as a substring.
/// 2. A non-`all` status selector retains exact status matches.
/// 3. A non-`all` kind selector retains exact kind matches.
///
/// Pure and idempotent: identical inputs always produce identical output.
pub fn filter(jobs: &[Job], criteria: &FilterCriteria) -> Vec<Job> {
    // Search text is matched as given; whitespace is significant.
    let needle = criteria.search.to_lowercase();

    jobs.iter()
        .filter(|job| {
            needle.is_empty()
                || job.position.to_lowercase().contains(&needle)
                || job.company.to_lowercase().contains(&needle)
        })
        .filter(|job| criteria.status.matches(job.status))
        .filter(|job| criteria.kind.matches(job.kind))
        .cloned()
        .collect()
}

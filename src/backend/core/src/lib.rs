//! # Apptrack Core
//!
//! Single-user job application tracker: an in-memory job store with two
//! derived views, exposed over an HTTP API.
//!
//! ## Architecture
//!
//! - **Job Store**: owns the authoritative collection of job records and
//!   assigns identity; the only component that mutates state
//! - **Filter Engine**: pure search/status/kind predicate composition over a
//!   store snapshot
//! - **Aggregation Engine**: pure status counters, chronological monthly
//!   volume series, and the recent-jobs view
//! - **Validation**: caller-side field validation for drafts and profile
//!   updates; the store itself never rejects
//! - **API**: Axum REST surface consumed by the CLI and any other UI
//!
//! State lives for the process lifetime only. A restart discards all jobs;
//! persistence is deliberately out of scope.

pub mod api;
pub mod config;
pub mod error;
pub mod jobs;
pub mod profile;
pub mod telemetry;
pub mod validation;

pub use error::{ErrorCode, Result, TrackError};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{ErrorCode, Result, TrackError};
    pub use crate::jobs::{
        filter, monthly_volumes, recent, summarize, FilterCriteria, Job, JobDraft, JobId, JobKind,
        JobStatus, JobStore, KindFilter, MonthBucket, StatusFilter, StatusSummary,
    };
    pub use crate::profile::{Profile, ProfileStore};
    pub use crate::validation::{FieldError, ValidationErrors};
}

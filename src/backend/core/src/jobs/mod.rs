//! Job tracking core.
//!
//! This module owns the authoritative in-memory collection of job
//! application records and its two derived views:
//!
//! - **Store**: the single source of truth; assigns identity, serializes
//!   mutations, exposes reads only as snapshots
//! - **Filter Engine**: pure search/status/kind predicate composition over a
//!   snapshot
//! - **Aggregation Engine**: pure status counters, chronological monthly
//!   volume series, and the recent-jobs view
//!
//! Data flows one way: the store mutates, the engines recompute. Neither
//! engine holds its own copy of the collection or caches results across
//! mutations, so a derived view can never be stale relative to the store
//! state it was computed from.

pub mod filter;
pub mod job;
pub mod stats;
pub mod store;

pub use filter::{filter, FilterCriteria, KindFilter, StatusFilter};
pub use job::{Job, JobDraft, JobId, JobKind, JobStatus};
pub use stats::{monthly_volumes, recent, summarize, MonthBucket, StatusSummary};
pub use store::JobStore;

//! The job store: single source of truth for job records.
//!
//! The store owns the authoritative collection and is the only component
//! that mutates it. Mutations serialize through one write lock; reads clone
//! the collection under the read lock, so consumers only ever see immutable
//! snapshots and can never bypass the store's invariants.
//!
//! Identity is assigned here and nowhere else. Ids are millisecond-scale
//! wall-clock values clamped to `max(now_millis, last_id + 1)`, which keeps
//! them sortable by creation order while ruling out the same-millisecond
//! collision a raw timestamp scheme would have.

use chrono::Utc;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use super::job::{Job, JobDraft, JobId};

/// Owning component for the job collection.
///
/// Process-scoped: initialized empty, lives for the session, no persistence.
#[derive(Debug, Default)]
pub struct JobStore {
    /// Insertion-ordered collection. Not sorted by recency; recency ordering
    /// is a consumer concern (see [`super::stats::recent`]).
    jobs: RwLock<Vec<Job>>,

    /// High-water mark for assigned ids.
    last_id: AtomicI64,
}

impl JobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the next id: current wall-clock milliseconds, clamped to stay
    /// strictly above every previously assigned id.
    fn next_id(&self) -> JobId {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last_id.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self.last_id.compare_exchange_weak(
                last,
                candidate,
                Ordering::SeqCst,
                Ordering::Relaxed,
            ) {
                Ok(_) => return JobId(candidate),
                Err(actual) => last = actual,
            }
        }
    }

    /// Create a job from a draft, assigning identity and creation time.
    ///
    /// No rejection path: the store accepts any draft shape it is given.
    /// Required-field validation happens caller-side, before this call.
    pub fn create(&self, draft: JobDraft) -> Job {
        let job = Job {
            id: self.next_id(),
            position: draft.position,
            company: draft.company,
            location: draft.location,
            status: draft.status,
            kind: draft.kind,
            created_at: Utc::now(),
        };

        self.jobs.write().push(job.clone());
        tracing::debug!(id = %job.id, company = %job.company, "job created");
        job
    }

    /// Remove the job with the given id.
    ///
    /// Idempotent: deleting a nonexistent id is a silent no-op and returns
    /// `false`, never an error.
    pub fn delete(&self, id: JobId) -> bool {
        let mut jobs = self.jobs.write();
        let before = jobs.len();
        jobs.retain(|job| job.id != id);
        let removed = jobs.len() < before;
        if removed {
            tracing::debug!(id = %id, "job deleted");
        }
        removed
    }

    /// Replace the full record whose id matches `job.id`, in place.
    ///
    /// The record is replaced wholesale, not merged field by field, and its
    /// position in the collection is preserved. No-op returning `false` when
    /// no record matches.
    pub fn update(&self, job: Job) -> bool {
        let mut jobs = self.jobs.write();
        match jobs.iter_mut().find(|existing| existing.id == job.id) {
            Some(slot) => {
                tracing::debug!(id = %job.id, "job updated");
                *slot = job;
                true
            }
            None => false,
        }
    }

    /// Snapshot of the collection in insertion order.
    pub fn list(&self) -> Vec<Job> {
        self.jobs.read().clone()
    }

    /// Number of jobs currently held.
    pub fn len(&self) -> usize {
        self.jobs.read().len()
    }

    /// Whether the store holds no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.read().is_empty()
    }
}

//! Integration tests for the job store contract.
//!
//! Exercises the public API: create-then-list, delete idempotence, and
//! full-record replacement semantics.

use apptrack_core::prelude::*;

fn draft(position: &str, company: &str) -> JobDraft {
    JobDraft::new(position, company, "Remote")
}

#[test]
fn create_then_list_grows_by_exactly_one() {
    let store = JobStore::new();

    for i in 0..10 {
        let before = store.len();
        let created = store.create(draft(&format!("role-{i}"), "Acme"));
        let listed = store.list();

        assert_eq!(listed.len(), before + 1);
        let found: Vec<&Job> = listed.iter().filter(|j| j.id == created.id).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(*found[0], created);
    }
}

#[test]
fn created_job_carries_draft_fields_plus_assigned_identity() {
    let store = JobStore::new();
    let created = store.create(
        draft("Backend Engineer", "Acme")
            .with_status(JobStatus::Interview)
            .with_kind(JobKind::Remote),
    );

    assert_eq!(created.position, "Backend Engineer");
    assert_eq!(created.company, "Acme");
    assert_eq!(created.status, JobStatus::Interview);
    assert_eq!(created.kind, JobKind::Remote);
    assert!(created.id.0 > 0);
}

#[test]
fn delete_twice_leaves_collection_unchanged_on_second_call() {
    let store = JobStore::new();
    let keep = store.create(draft("keep", "Acme"));
    let gone = store.create(draft("gone", "Acme"));

    assert!(store.delete(gone.id));
    let after_first = store.list();

    assert!(!store.delete(gone.id));
    assert_eq!(store.list(), after_first);
    assert_eq!(store.list(), vec![keep]);
}

#[test]
fn delete_nonexistent_id_never_panics() {
    let store = JobStore::new();
    assert!(!store.delete(JobId(0)));
    assert!(!store.delete(JobId(i64::MAX)));
}

#[test]
fn update_replaces_every_caller_field() {
    let store = JobStore::new();
    let original = store.create(
        draft("Junior Dev", "Acme")
            .with_status(JobStatus::Pending)
            .with_kind(JobKind::Internship),
    );

    let replacement = Job {
        position: "Senior Dev".into(),
        company: "Globex".into(),
        location: "Berlin".into(),
        status: JobStatus::Interview,
        kind: JobKind::FullTime,
        ..original.clone()
    };
    assert!(store.update(replacement.clone()));

    let stored = store
        .list()
        .into_iter()
        .find(|j| j.id == original.id)
        .expect("record must still exist");

    // No fields retained from the old record.
    assert_eq!(stored, replacement);
    assert_ne!(stored.position, original.position);
    assert_ne!(stored.company, original.company);
    assert_ne!(stored.location, original.location);
}

#[test]
fn store_starts_empty_and_only_create_adds() {
    let store = JobStore::new();
    assert!(store.is_empty());
    assert!(store.list().is_empty());

    store.delete(JobId(1));
    assert!(store.is_empty());
}

#[test]
fn mutations_are_visible_to_next_snapshot() {
    let store = JobStore::new();
    let job = store.create(draft("dev", "Acme"));
    assert_eq!(summarize(&store.list()).total, 1);

    store.delete(job.id);
    assert_eq!(summarize(&store.list()).total, 0);
}

#[test]
fn concurrent_creates_assign_unique_ids() {
    use std::sync::Arc;
    use std::thread;

    let store = Arc::new(JobStore::new());
    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..50 {
                    store.create(JobDraft::new(format!("t{t}-{i}"), "Acme", "Remote"));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let mut ids: Vec<JobId> = store.list().iter().map(|j| j.id).collect();
    assert_eq!(ids.len(), 400);
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 400, "no two creations may share an id");
}

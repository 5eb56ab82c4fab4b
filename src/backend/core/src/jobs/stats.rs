//! The aggregation engine: derived analytics over a job snapshot.
//!
//! Two independent pure functions plus the recent-jobs view. All take the
//! full collection as input and never consult filter criteria or mutate
//! what they read.
//!
//! Monthly buckets are grouped and ordered by a `(year, month)` integer key
//! derived from `created_at`; the human label is formatted afterwards.
//! Sorting formatted labels would misplace "Dec 2023" after "Jan 2024", so
//! the label is display-only.

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::job::{Job, JobStatus};

/// Per-status counts over a job snapshot.
///
/// Status is a closed enum, so `pending + interview + declined == total`
/// holds for every input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    pub pending: usize,
    pub interview: usize,
    pub declined: usize,
    pub total: usize,
}

/// One month-year group with its job count. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBucket {
    /// Human month+year label, e.g. "Jan 2024"
    pub label: String,

    /// Number of jobs created in that month; at least 1 (sparse series)
    pub count: usize,
}

/// Count jobs per status.
pub fn summarize(jobs: &[Job]) -> StatusSummary {
    let mut summary = StatusSummary {
        total: jobs.len(),
        ..Default::default()
    };

    for job in jobs {
        match job.status {
            JobStatus::Pending => summary.pending += 1,
            JobStatus::Interview => summary.interview += 1,
            JobStatus::Declined => summary.declined += 1,
        }
    }

    summary
}

/// Chronologically ordered monthly application volumes.
///
/// One bucket per month-year pair actually represented, with no filled-in
/// gaps for empty months. Empty input yields an empty series.
pub fn monthly_volumes(jobs: &[Job]) -> Vec<MonthBucket> {
    // BTreeMap keyed by (year, month) gives chronological order for free.
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for job in jobs {
        *buckets
            .entry((job.created_at.year(), job.created_at.month()))
            .or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|((year, month), count)| MonthBucket {
            label: month_label(year, month),
            count,
        })
        .collect()
}

/// Top-N jobs ordered by id descending (most recently created first).
///
/// Ids are strictly monotonic, so this ordering is total.
pub fn recent(jobs: &[Job], n: usize) -> Vec<Job> {
    let mut sorted = jobs.to_vec();
    sorted.sort_by(|a, b| b.id.cmp(&a.id));
    sorted.truncate(n);
    sorted
}

/// Format a `(year, month)` key as "%b %Y", e.g. "Mar 2024".
fn month_label(year: i32, month: u32) -> String {
    const NAMES: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    format!("{} {}", NAMES[(month as usize).saturating_sub(1) % 12], year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::job::{JobId, JobKind};
    use chrono::{TimeZone, Utc};

    fn job_at(id: i64, year: i32, month: u32, status: JobStatus) -> Job {
        Job {
            id: JobId(id),
            position: "Dev".into(),
            company: "Acme".into(),
            location: "Remote".into(),
            status,
            kind: JobKind::FullTime,
            created_at: Utc.with_ymd_and_hms(year, month, 15, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_summary_counts_and_closure() {
        let jobs = vec![
            job_at(1, 2024, 1, JobStatus::Pending),
            job_at(2, 2024, 1, JobStatus::Pending),
            job_at(3, 2024, 2, JobStatus::Interview),
            job_at(4, 2024, 3, JobStatus::Declined),
        ];

        let summary = summarize(&jobs);
        assert_eq!(summary.pending, 2);
        assert_eq!(summary.interview, 1);
        assert_eq!(summary.declined, 1);
        assert_eq!(summary.total, 4);
        assert_eq!(
            summary.pending + summary.interview + summary.declined,
            summary.total
        );
    }

    #[test]
    fn test_summary_of_empty_input() {
        assert_eq!(summarize(&[]), StatusSummary::default());
    }

    #[test]
    fn test_monthly_volumes_chronological_across_year_boundary() {
        // Insertion order deliberately scrambled; label-order sorting would
        // put "Dec 2023" after "Jan 2024".
        let jobs = vec![
            job_at(3, 2024, 3, JobStatus::Pending),
            job_at(1, 2024, 1, JobStatus::Pending),
            job_at(2, 2023, 12, JobStatus::Pending),
        ];

        let series = monthly_volumes(&jobs);
        let labels: Vec<&str> = series.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(labels, ["Dec 2023", "Jan 2024", "Mar 2024"]);
        assert!(series.iter().all(|b| b.count == 1));
    }

    #[test]
    fn test_monthly_volumes_groups_within_month_and_stays_sparse() {
        let jobs = vec![
            job_at(1, 2024, 1, JobStatus::Pending),
            job_at(2, 2024, 1, JobStatus::Interview),
            job_at(3, 2024, 4, JobStatus::Pending),
        ];

        let series = monthly_volumes(&jobs);
        // No zero-count buckets for Feb/Mar.
        assert_eq!(series.len(), 2);
        assert_eq!(series[0], MonthBucket { label: "Jan 2024".into(), count: 2 });
        assert_eq!(series[1], MonthBucket { label: "Apr 2024".into(), count: 1 });
    }

    #[test]
    fn test_monthly_volumes_of_empty_input() {
        assert!(monthly_volumes(&[]).is_empty());
    }

    #[test]
    fn test_recent_orders_by_id_descending_and_truncates() {
        let jobs: Vec<Job> = (1..=8)
            .map(|i| job_at(i, 2024, 1, JobStatus::Pending))
            .collect();

        let top = recent(&jobs, 5);
        let ids: Vec<i64> = top.iter().map(|j| j.id.0).collect();
        assert_eq!(ids, [8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_recent_with_fewer_jobs_than_n() {
        let jobs = vec![job_at(1, 2024, 1, JobStatus::Pending)];
        assert_eq!(recent(&jobs, 5).len(), 1);
        assert!(recent(&[], 5).is_empty());
    }

    #[test]
    fn test_engines_do_not_mutate_input() {
        let jobs = vec![
            job_at(2, 2024, 2, JobStatus::Pending),
            job_at(1, 2024, 1, JobStatus::Interview),
        ];
        let before = jobs.clone();
        let _ = summarize(&jobs);
        let _ = monthly_volumes(&jobs);
        let _ = recent(&jobs, 1);
        assert_eq!(jobs, before);
    }
}

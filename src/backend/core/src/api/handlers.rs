//! API request handlers with proper error propagation.
//!
//! All fallible handlers return `Result<impl IntoResponse, TrackError>` so
//! that errors are automatically converted to appropriate HTTP status codes
//! via the `IntoResponse` implementation on `TrackError`.
//!
//! Mutating handlers on a missing id follow the store's idempotent no-op
//! contract: `PUT`/`DELETE` respond 200 with `matched` set to `false` rather
//! than 404. Reads (`GET /jobs/:id`) do 404.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use super::{ApiResponse, AppState};
use crate::error::TrackError;
use crate::jobs::{filter, monthly_volumes, recent, summarize, FilterCriteria, Job, JobDraft, JobId};
use crate::profile::Profile;
use crate::validation;

// ═══════════════════════════════════════════════════════════════════════════════
// Health Check
// ═══════════════════════════════════════════════════════════════════════════════

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Job Handlers
// ═══════════════════════════════════════════════════════════════════════════════

#[derive(Serialize, Deserialize)]
pub struct MutationOutcome {
    pub id: JobId,
    /// Whether a record matched; `false` means the no-op branch was taken
    #[serde(default)]
    pub matched: bool,
}

pub async fn create_job(
    State(state): State<AppState>,
    Json(draft): Json<JobDraft>,
) -> Result<impl IntoResponse, TrackError> {
    validation::validate_draft(&draft)?;

    let job = state.jobs.create(draft);
    tracing::info!(id = %job.id, company = %job.company, "created job application");

    Ok((StatusCode::CREATED, Json(ApiResponse::success(job))))
}

pub async fn list_jobs(
    State(state): State<AppState>,
    Query(criteria): Query<FilterCriteria>,
) -> Result<impl IntoResponse, TrackError> {
    // Fresh snapshot per request: the filtered view is never stale.
    let jobs = state.jobs.list();
    let filtered = filter(&jobs, &criteria);

    Ok(Json(ApiResponse::success(filtered)))
}

#[derive(Deserialize)]
pub struct RecentQuery {
    #[serde(default = "default_recent_limit")]
    pub limit: usize,
}

fn default_recent_limit() -> usize {
    5
}

pub async fn recent_jobs(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<impl IntoResponse, TrackError> {
    let jobs = state.jobs.list();
    Ok(Json(ApiResponse::success(recent(&jobs, query.limit))))
}

pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, TrackError> {
    let id = JobId(id);
    let job = state
        .jobs
        .list()
        .into_iter()
        .find(|job| job.id == id)
        .ok_or_else(|| TrackError::not_found("Job", id.to_string()))?;

    Ok(Json(ApiResponse::success(job)))
}

pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<JobDraft>,
) -> Result<impl IntoResponse, TrackError> {
    validation::validate_draft(&draft)?;

    let id = JobId(id);
    // Identity fields (id, created_at) are store-assigned and survive the
    // replacement; every caller-supplied field is replaced wholesale.
    let matched = match state.jobs.list().into_iter().find(|job| job.id == id) {
        Some(existing) => state.jobs.update(Job {
            id,
            position: draft.position,
            company: draft.company,
            location: draft.location,
            status: draft.status,
            kind: draft.kind,
            created_at: existing.created_at,
        }),
        None => false,
    };

    Ok(Json(ApiResponse::success(MutationOutcome { id, matched })))
}

pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, TrackError> {
    let id = JobId(id);
    let matched = state.jobs.delete(id);

    Ok(Json(ApiResponse::success(MutationOutcome { id, matched })))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Stats Handlers
// ═══════════════════════════════════════════════════════════════════════════════

pub async fn stats_summary(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, TrackError> {
    let jobs = state.jobs.list();
    Ok(Json(ApiResponse::success(summarize(&jobs))))
}

pub async fn stats_monthly(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, TrackError> {
    let jobs = state.jobs.list();
    Ok(Json(ApiResponse::success(monthly_volumes(&jobs))))
}

// ═══════════════════════════════════════════════════════════════════════════════
// Profile Handlers
// ═══════════════════════════════════════════════════════════════════════════════

pub async fn get_profile(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, TrackError> {
    Ok(Json(ApiResponse::success(state.profile.get())))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> Result<impl IntoResponse, TrackError> {
    validation::validate_profile(&profile)?;

    state.profile.replace(profile.clone());
    tracing::info!("profile updated");

    Ok(Json(ApiResponse::success(profile)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::{JobKind, JobStatus};

    fn state_with_jobs() -> AppState {
        let state = AppState::new();
        state
            .jobs
            .create(JobDraft::new("Backend Engineer", "Acme", "Remote").with_kind(JobKind::Remote));
        state.jobs.create(
            JobDraft::new("Frontend Engineer", "Acme", "NYC").with_status(JobStatus::Interview),
        );
        state
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_draft() {
        let state = AppState::new();
        let result = create_job(State(state.clone()), Json(JobDraft::default())).await;

        assert!(result.is_err());
        assert!(state.jobs.is_empty());
    }

    #[tokio::test]
    async fn test_create_accepts_valid_draft() {
        let state = AppState::new();
        let draft = JobDraft::new("Dev", "Acme", "Remote");
        assert!(create_job(State(state.clone()), Json(draft)).await.is_ok());
        assert_eq!(state.jobs.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_noop_on_missing_id() {
        let state = state_with_jobs();
        let before = state.jobs.len();

        let result = delete_job(State(state.clone()), Path(-1)).await;
        assert!(result.is_ok());
        assert_eq!(state.jobs.len(), before);
    }

    #[tokio::test]
    async fn test_update_preserves_created_at() {
        let state = AppState::new();
        let created = state.jobs.create(JobDraft::new("Dev", "Acme", "Remote"));

        let replacement = JobDraft::new("Staff Engineer", "Globex", "Berlin")
            .with_status(JobStatus::Declined);
        let result = update_job(State(state.clone()), Path(created.id.0), Json(replacement)).await;
        assert!(result.is_ok());

        let stored = &state.jobs.list()[0];
        assert_eq!(stored.position, "Staff Engineer");
        assert_eq!(stored.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_recent_query_defaults_to_five() {
        let query: RecentQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.limit, 5);
    }
}

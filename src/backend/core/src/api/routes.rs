//! V1 API routes.
//!
//! # Endpoints
//!
//! ## Jobs
//! - `POST /api/v1/jobs` - Create a job from a validated draft
//! - `GET /api/v1/jobs` - List jobs, filtered by `search`/`status`/`type`
//! - `GET /api/v1/jobs/recent` - Most recently created jobs (default 5)
//! - `GET /api/v1/jobs/:id` - Get job by ID
//! - `PUT /api/v1/jobs/:id` - Replace the full job record
//! - `DELETE /api/v1/jobs/:id` - Delete a job (idempotent)
//!
//! ## Stats
//! - `GET /api/v1/stats/summary` - Per-status counts and total
//! - `GET /api/v1/stats/monthly` - Chronological monthly volume series
//!
//! ## Profile
//! - `GET /api/v1/profile` - Get the user profile
//! - `PUT /api/v1/profile` - Replace the user profile

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use super::{handlers, AppState};

/// Build the V1 API router. All routes are mounted under `/api/v1/`.
pub fn v1_router() -> Router<AppState> {
    Router::new()
        // Job endpoints
        .route("/jobs", post(handlers::create_job))
        .route("/jobs", get(handlers::list_jobs))
        .route("/jobs/recent", get(handlers::recent_jobs))
        .route("/jobs/:id", get(handlers::get_job))
        .route("/jobs/:id", put(handlers::update_job))
        .route("/jobs/:id", delete(handlers::delete_job))
        // Stats endpoints
        .route("/stats/summary", get(handlers::stats_summary))
        .route("/stats/monthly", get(handlers::stats_monthly))
        // Profile endpoints
        .route("/profile", get(handlers::get_profile))
        .route("/profile", put(handlers::update_profile))
}

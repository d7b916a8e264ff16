//! Route definitions for the `/jobs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET  /                  -> list_jobs
/// POST /                  -> create_job
/// GET  /recruiter         -> list_recruiter_jobs
/// GET  /{id}              -> get_job
/// PUT  /{id}              -> update_job
/// GET  /{id}/applicants   -> list_job_applicants
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(jobs::list_jobs).post(jobs::create_job))
        .route("/recruiter", get(jobs::list_recruiter_jobs))
        .route("/{id}", get(jobs::get_job).put(jobs::update_job))
        .route("/{id}/applicants", get(jobs::list_job_applicants))
}

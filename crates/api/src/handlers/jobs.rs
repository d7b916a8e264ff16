//! Handlers for the `/jobs` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use hireboard_core::application::ensure_job_owner;
use hireboard_core::error::CoreError;
use hireboard_core::pagination::{clamp_limit, clamp_page, page_offset, PaginationMeta};
use hireboard_core::types::DbId;
use hireboard_db::models::application::JobApplicant;
use hireboard_db::models::job::{CreateJob, Job, JobPage, UpdateJob};
use hireboard_db::repositories::JobRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireRecruiter;
use crate::query::{PageParams, RecruiterJobsParams};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /jobs` and `PUT /jobs/{id}`.
///
/// Updates overwrite every field; omitted optionals are cleared.
#[derive(Debug, Deserialize, Validate)]
pub struct JobRequest {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

impl From<JobRequest> for CreateJob {
    fn from(req: JobRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            category: req.category,
            job_type: req.job_type,
            salary: req.salary,
            benefits: req.benefits,
        }
    }
}

impl From<JobRequest> for UpdateJob {
    fn from(req: JobRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            category: req.category,
            job_type: req.job_type,
            salary: req.salary,
            benefits: req.benefits,
        }
    }
}

/// POST /api/v1/jobs
pub async fn create_job(
    RequireRecruiter(user): RequireRecruiter,
    State(state): State<AppState>,
    Json(input): Json<JobRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Job>>)> {
    input.validate()?;

    let job = JobRepo::create(&state.pool, user.user_id, &input.into()).await?;
    tracing::info!(job_id = job.id, recruiter_id = user.user_id, "Job created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: job })))
}

/// GET /api/v1/jobs?page=&limit=
pub async fn list_jobs(
    _user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<JobPage>>> {
    let page = clamp_page(params.page);
    let limit = clamp_limit(params.limit);

    let (jobs, total) = tokio::try_join!(
        JobRepo::list_page(&state.pool, limit, page_offset(page, limit)),
        JobRepo::count(&state.pool),
    )?;

    Ok(Json(DataResponse {
        data: JobPage {
            jobs,
            pagination: PaginationMeta::new(page, limit, total),
        },
    }))
}

/// GET /api/v1/jobs/recruiter?recruiter_id=
///
/// Defaults to the caller's own jobs.
pub async fn list_recruiter_jobs(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RecruiterJobsParams>,
) -> AppResult<Json<DataResponse<Vec<Job>>>> {
    let recruiter_id = params.recruiter_id.unwrap_or(user.user_id);
    let jobs = JobRepo::list_by_recruiter(&state.pool, recruiter_id).await?;
    Ok(Json(DataResponse { data: jobs }))
}

/// GET /api/v1/jobs/{id}
pub async fn get_job(
    _user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Job>>> {
    let job = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Job", id))?;
    Ok(Json(DataResponse { data: job }))
}

/// PUT /api/v1/jobs/{id}
pub async fn update_job(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<JobRequest>,
) -> AppResult<Json<DataResponse<Job>>> {
    input.validate()?;

    let existing = JobRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found("Job", id))?;
    ensure_job_owner(existing.id, existing.recruiter_id, user.user_id)?;

    let job = JobRepo::update(&state.pool, id, &input.into())
        .await?
        .ok_or_else(|| CoreError::not_found("Job", id))?;
    Ok(Json(DataResponse { data: job }))
}

/// GET /api/v1/jobs/{id}/applicants
pub async fn list_job_applicants(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<JobApplicant>>>> {
    let applicants = state.lifecycle.list_job_applicants(id, user.user_id).await?;
    Ok(Json(DataResponse { data: applicants }))
}

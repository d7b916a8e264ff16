//! Handlers for the `/applications` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hireboard_core::types::DbId;
use hireboard_db::models::application::{Application, SeekerApplication};
use serde::Deserialize;
use validator::Validate;

use crate::engine::lifecycle::NewApplication;
use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /applications`.
#[derive(Debug, Deserialize, Validate)]
pub struct ApplyRequest {
    pub job_id: DbId,
    #[validate(length(min = 1, message = "resume_url is required"))]
    pub resume_url: String,
    pub cover_letter: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

/// Request body for `PUT /applications/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// POST /api/v1/applications
pub async fn apply(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<ApplyRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Application>>)> {
    input.validate()?;

    let application = state
        .lifecycle
        .apply(
            user.user_id,
            NewApplication {
                job_id: input.job_id,
                resume_url: input.resume_url,
                cover_letter: input.cover_letter,
                linkedin_url: input.linkedin_url,
                portfolio_url: input.portfolio_url,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: application })))
}

/// GET /api/v1/applications
pub async fn list_applications(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<SeekerApplication>>>> {
    let applications = state
        .lifecycle
        .list_applications(user.user_id, user.role)
        .await?;
    Ok(Json(DataResponse { data: applications }))
}

/// PUT /api/v1/applications/{id}/status
pub async fn update_status(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStatusRequest>,
) -> AppResult<Json<DataResponse<Application>>> {
    let application = state
        .lifecycle
        .update_status(id, user.user_id, &input.status)
        .await?;
    Ok(Json(DataResponse { data: application }))
}

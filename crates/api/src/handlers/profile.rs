//! Handlers for the caller's own profile (`/profile`).
//!
//! The body of `PUT /profile` is interpreted by the caller's role: seekers
//! send an [`UpdateSeekerProfile`], recruiters an [`UpdateCompanyProfile`].

use axum::extract::State;
use axum::Json;
use hireboard_core::roles::Role;
use hireboard_db::models::profile::{Profile, UpdateCompanyProfile, UpdateSeekerProfile};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/profile
pub async fn get_profile(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = state.profiles.get_profile(user.user_id, user.role).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// PUT /api/v1/profile
pub async fn update_profile(
    user: AuthUser,
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = match user.role {
        Role::Seeker => {
            let input: UpdateSeekerProfile = parse_body(body)?;
            let stored = state
                .profiles
                .replace_seeker_profile(user.user_id, &input)
                .await?;
            Profile::Seeker(Some(stored))
        }
        Role::Recruiter => {
            let input: UpdateCompanyProfile = parse_body(body)?;
            let stored = state
                .profiles
                .upsert_company_profile(user.user_id, &input)
                .await?;
            Profile::Company(Some(stored))
        }
    };
    Ok(Json(DataResponse { data: profile }))
}

fn parse_body<T: serde::de::DeserializeOwned>(body: serde_json::Value) -> AppResult<T> {
    serde_json::from_value(body).map_err(|e| AppError::BadRequest(format!("Invalid profile: {e}")))
}

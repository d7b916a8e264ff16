//! Handlers for the `/auth` resource (register, login, Google callback).

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use hireboard_core::error::CoreError;
use hireboard_core::roles::Role;
use hireboard_db::models::user::{CreateUser, User, UserResponse, PROVIDER_GOOGLE, PROVIDER_LOCAL};
use hireboard_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::google;
use crate::auth::jwt::generate_access_token;
use crate::auth::password::{
    hash_password, validate_password_strength, verify_password, MIN_PASSWORD_LENGTH,
};
use crate::error::{AppError, AppResult};
use crate::query::OAuthCallbackParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
    /// `SEEKER` or `RECRUITER`.
    pub role: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    pub password: String,
}

/// Successful authentication response returned by login and the OAuth callback.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create a local account. A duplicate email surfaces as 409 through the
/// `uq_users_email` constraint.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserResponse>>)> {
    input.validate()?;
    validate_password_strength(&input.password, MIN_PASSWORD_LENGTH)
        .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    let role: Role = input.role.parse()?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email: input.email,
            password_hash: Some(password_hash),
            role,
            provider: PROVIDER_LOCAL.to_string(),
        },
    )
    .await?;

    tracing::info!(user_id = user.id, role = %user.role, "User registered");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserResponse::from(&user),
        }),
    ))
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Accounts created through an OAuth
/// provider are told to use that provider instead.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    input.validate()?;

    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(invalid)?;

    if user.provider != PROVIDER_LOCAL {
        return Err(AppError::Core(CoreError::Unauthorized(format!(
            "please login with {}",
            user.provider
        ))));
    }

    let hash = user.password_hash.as_deref().ok_or_else(invalid)?;
    let password_valid = verify_password(&input.password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    Ok(Json(auth_response(&state, &user)?))
}

/// GET /api/v1/auth/google/callback?code=
///
/// Exchange the authorization code, then find or create a `SEEKER` account
/// for the Google email.
pub async fn google_callback(
    State(state): State<AppState>,
    Query(params): Query<OAuthCallbackParams>,
) -> AppResult<Json<AuthResponse>> {
    let code = params
        .code
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::BadRequest("Authorization code is missing".into()))?;

    let config = state
        .config
        .google
        .as_ref()
        .ok_or_else(|| AppError::InternalError("Google OAuth is not configured".into()))?;

    let email = google::fetch_email(&state.http, config, &code)
        .await
        .map_err(|e| AppError::InternalError(format!("Google login failed: {e}")))?;

    let user = match UserRepo::find_by_email(&state.pool, &email).await? {
        Some(user) => user,
        None => {
            let user = UserRepo::create(
                &state.pool,
                &CreateUser {
                    email,
                    password_hash: None,
                    role: Role::Seeker,
                    provider: PROVIDER_GOOGLE.to_string(),
                },
            )
            .await?;
            tracing::info!(user_id = user.id, "User created from Google login");
            user
        }
    };

    Ok(Json(auth_response(&state, &user)?))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn auth_response(state: &AppState, user: &User) -> AppResult<AuthResponse> {
    let access_token = generate_access_token(user.id, user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(AuthResponse {
        access_token,
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserResponse::from(user),
    })
}

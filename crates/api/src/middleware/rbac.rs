//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! match. Use these in handler signatures to enforce authorization at the
//! type level.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hireboard_core::error::CoreError;
use hireboard_core::roles::Role;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `RECRUITER` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn recruiter_only(RequireRecruiter(user): RequireRecruiter) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireRecruiter(pub AuthUser);

impl FromRequestParts<AppState> for RequireRecruiter {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != Role::Recruiter {
            return Err(AppError::Core(CoreError::Forbidden(
                "Recruiter role required".into(),
            )));
        }
        Ok(RequireRecruiter(user))
    }
}

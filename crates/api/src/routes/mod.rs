pub mod applications;
pub mod auth;
pub mod dashboard;
pub mod health;
pub mod jobs;
pub mod profile;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                        register (public)
/// /auth/login                           login (public)
/// /auth/google/callback                 Google OAuth callback (public)
///
/// /jobs                                 list, create (recruiter)
/// /jobs/recruiter                       jobs of one recruiter
/// /jobs/{id}                            get, update (owner)
/// /jobs/{id}/applicants                 applicants (owner)
///
/// /applications                         list own, apply
/// /applications/{id}/status             update status (job owner)
///
/// /profile                              get, replace own profile
///
/// /dashboard/stats                      recruiter statistics
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/jobs", jobs::router())
        .nest("/applications", applications::router())
        .nest("/profile", profile::router())
        .nest("/dashboard", dashboard::router())
}

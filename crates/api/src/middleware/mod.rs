//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`rbac::RequireRecruiter`] -- Requires the `RECRUITER` role.

pub mod auth;
pub mod rbac;

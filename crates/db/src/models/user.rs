//! User entity model and DTOs.

use hireboard_core::roles::Role;
use hireboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Accounts created through email + password registration.
pub const PROVIDER_LOCAL: &str = "local";
/// Accounts created through the Google OAuth callback.
pub const PROVIDER_GOOGLE: &str = "google";

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    /// `None` for accounts that only sign in through an OAuth provider.
    pub password_hash: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub provider: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub email: String,
    pub role: Role,
    pub provider: String,
    pub created_at: Timestamp,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            role: user.role,
            provider: user.provider.clone(),
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    pub password_hash: Option<String>,
    pub role: Role,
    pub provider: String,
}

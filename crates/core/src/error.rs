//! Domain error taxonomy shared by the store, engine and HTTP layers.

use crate::types::DbId;

/// Typed failures raised by domain checks.
///
/// Persistence failures are not represented here: they travel as the
/// storage driver's own error type so the HTTP layer can classify them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced job, application or profile does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input outside the accepted domain (e.g. an unknown status label).
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated, but not allowed to act on the target resource.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}

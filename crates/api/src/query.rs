//! Shared query parameter types for API handlers.

use hireboard_core::types::DbId;
use serde::Deserialize;

/// Page-based pagination parameters (`?page=&limit=`).
///
/// Values are clamped with `hireboard_core::pagination` before use.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for `GET /jobs/recruiter`.
#[derive(Debug, Deserialize)]
pub struct RecruiterJobsParams {
    /// Defaults to the authenticated caller when omitted.
    pub recruiter_id: Option<DbId>,
}

/// Query parameters for the OAuth redirect callback.
#[derive(Debug, Deserialize)]
pub struct OAuthCallbackParams {
    pub code: Option<String>,
}

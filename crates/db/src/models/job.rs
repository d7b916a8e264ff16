//! Job entity model, DTOs and the joined company snapshot.

use hireboard_core::pagination::PaginationMeta;
use hireboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Read-only projection of the owning recruiter's company profile.
///
/// Populated by a `LEFT JOIN company_profiles` whenever a job is read; there
/// is no write path for it through [`Job`]. All fields are `None` when the
/// recruiter has not created a company profile yet.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct CompanySnapshot {
    pub company_name: Option<String>,
    #[sqlx(rename = "company_location")]
    pub location: Option<String>,
    #[sqlx(rename = "company_logo_url")]
    pub logo_url: Option<String>,
}

/// A job row from the `jobs` table plus its company snapshot.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Job {
    pub id: DbId,
    pub recruiter_id: DbId,
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    pub benefits: Vec<String>,
    #[sqlx(flatten)]
    pub company: CompanySnapshot,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a job. The owning recruiter comes from the caller's
/// identity, never from the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJob {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// DTO for updating a job. Every field is overwritten.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJob {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub job_type: Option<String>,
    pub salary: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
}

/// One page of the public job listing.
#[derive(Debug, Serialize)]
pub struct JobPage {
    pub jobs: Vec<Job>,
    pub pagination: PaginationMeta,
}

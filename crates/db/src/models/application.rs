//! Application entity model, DTOs and joined list projections.

use hireboard_core::application::ApplicationStatus;
use hireboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An application row from the `applications` table.
///
/// `job_id` and `seeker_id` never change after insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Application {
    pub id: DbId,
    pub job_id: DbId,
    pub seeker_id: DbId,
    #[sqlx(try_from = "String")]
    pub status: ApplicationStatus,
    pub resume_url: String,
    pub cover_letter: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting an application. There is no status field: new rows
/// always start as [`ApplicationStatus::Pending`].
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub job_id: DbId,
    pub seeker_id: DbId,
    pub resume_url: String,
    pub cover_letter: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

/// Trimmed job view attached to a seeker's own applications.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobSummary {
    #[sqlx(rename = "summary_job_id")]
    pub id: DbId,
    #[sqlx(rename = "job_title")]
    pub title: String,
    #[sqlx(rename = "job_category")]
    pub category: Option<String>,
    #[sqlx(rename = "job_job_type")]
    pub job_type: Option<String>,
    pub company_name: Option<String>,
}

/// An application as listed for the seeker who submitted it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeekerApplication {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub application: Application,
    #[sqlx(flatten)]
    pub job: JobSummary,
}

/// Seeker identity plus the profile fields a recruiter sees on an applicant.
///
/// Profile fields are `None` when the seeker never filled in a profile.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeekerSummary {
    #[sqlx(rename = "seeker_user_id")]
    pub id: DbId,
    #[sqlx(rename = "seeker_email")]
    pub email: String,
    #[sqlx(rename = "seeker_profile_id")]
    pub profile_id: Option<DbId>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// An application as listed for the recruiter who owns the job.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobApplicant {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub application: Application,
    #[sqlx(flatten)]
    pub seeker: SeekerSummary,
}

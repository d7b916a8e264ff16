//! Repository for the `applications` table.

use hireboard_core::application::ApplicationStatus;
use hireboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::application::{
    Application, CreateApplication, JobApplicant, SeekerApplication,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, job_id, seeker_id, status, resume_url, cover_letter, \
                       linkedin_url, portfolio_url, created_at, updated_at";

/// Application columns qualified with the `a` alias, for joins.
const A_COLUMNS: &str = "a.id, a.job_id, a.seeker_id, a.status, a.resume_url, a.cover_letter, \
                         a.linkedin_url, a.portfolio_url, a.created_at, a.updated_at";

/// Provides inserts, lookups and status updates for job applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application. The status is always `PENDING`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateApplication,
    ) -> Result<Application, sqlx::Error> {
        let query = format!(
            "INSERT INTO applications
                (job_id, seeker_id, status, resume_url, cover_letter, linkedin_url, portfolio_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(input.job_id)
            .bind(input.seeker_id)
            .bind(ApplicationStatus::default().as_str())
            .bind(&input.resume_url)
            .bind(&input.cover_letter)
            .bind(&input.linkedin_url)
            .bind(&input.portfolio_url)
            .fetch_one(pool)
            .await
    }

    /// Find an application by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Application>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM applications WHERE id = $1");
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every application to a job with the applicant's identity and
    /// profile summary, oldest first.
    pub async fn list_by_job(
        pool: &PgPool,
        job_id: DbId,
    ) -> Result<Vec<JobApplicant>, sqlx::Error> {
        let query = format!(
            "SELECT {A_COLUMNS},
                    u.id AS seeker_user_id, u.email AS seeker_email,
                    sp.id AS seeker_profile_id, sp.full_name, sp.phone, sp.address
             FROM applications a
             JOIN users u ON u.id = a.seeker_id
             LEFT JOIN seeker_profiles sp ON sp.user_id = a.seeker_id
             WHERE a.job_id = $1
             ORDER BY a.created_at ASC, a.id ASC"
        );
        sqlx::query_as::<_, JobApplicant>(&query)
            .bind(job_id)
            .fetch_all(pool)
            .await
    }

    /// List every application a seeker submitted with a trimmed job view,
    /// newest first.
    pub async fn list_by_seeker(
        pool: &PgPool,
        seeker_id: DbId,
    ) -> Result<Vec<SeekerApplication>, sqlx::Error> {
        let query = format!(
            "SELECT {A_COLUMNS},
                    j.id AS summary_job_id, j.title AS job_title,
                    j.category AS job_category, j.job_type AS job_job_type,
                    cp.company_name
             FROM applications a
             JOIN jobs j ON j.id = a.job_id
             LEFT JOIN company_profiles cp ON cp.user_id = j.recruiter_id
             WHERE a.seeker_id = $1
             ORDER BY a.created_at DESC, a.id DESC"
        );
        sqlx::query_as::<_, SeekerApplication>(&query)
            .bind(seeker_id)
            .fetch_all(pool)
            .await
    }

    /// Set an application's status.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ApplicationStatus,
    ) -> Result<Option<Application>, sqlx::Error> {
        let query = format!(
            "UPDATE applications SET status = $2
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Application>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }
}

//! Aggregate queries behind the recruiter dashboard.
//!
//! Each method is a standalone query scoped to one recruiter through the
//! `applications.job_id -> jobs.recruiter_id` join. They are deliberately
//! not wrapped in a shared transaction, so under concurrent writes the
//! results may reflect slightly different moments.

use chrono::NaiveDate;
use hireboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::dashboard::{RecentApplicant, RecentApplicantRow};

/// Provides the read-only sub-queries of the dashboard.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Number of jobs owned by the recruiter.
    pub async fn count_jobs(pool: &PgPool, recruiter_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs WHERE recruiter_id = $1")
            .bind(recruiter_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Number of applications to the recruiter's jobs.
    pub async fn count_applicants(pool: &PgPool, recruiter_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*)
             FROM applications a
             JOIN jobs j ON j.id = a.job_id
             WHERE j.recruiter_id = $1",
        )
        .bind(recruiter_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// `(status, count)` for every status present among the recruiter's
    /// applications.
    pub async fn status_counts(
        pool: &PgPool,
        recruiter_id: DbId,
    ) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT a.status, COUNT(*)
             FROM applications a
             JOIN jobs j ON j.id = a.job_id
             WHERE j.recruiter_id = $1
             GROUP BY a.status",
        )
        .bind(recruiter_id)
        .fetch_all(pool)
        .await
    }

    /// `(day, count)` of applications by UTC creation day, ascending.
    /// Days without applications are absent.
    pub async fn daily_counts(
        pool: &PgPool,
        recruiter_id: DbId,
    ) -> Result<Vec<(NaiveDate, i64)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT (a.created_at AT TIME ZONE 'UTC')::date AS day, COUNT(*)
             FROM applications a
             JOIN jobs j ON j.id = a.job_id
             WHERE j.recruiter_id = $1
             GROUP BY day
             ORDER BY day ASC",
        )
        .bind(recruiter_id)
        .fetch_all(pool)
        .await
    }

    /// The `limit` most recently created applications to the recruiter's
    /// jobs, newest first, with trimmed job and seeker views.
    pub async fn recent_applicants(
        pool: &PgPool,
        recruiter_id: DbId,
        limit: i64,
    ) -> Result<Vec<RecentApplicant>, sqlx::Error> {
        let rows = sqlx::query_as::<_, RecentApplicantRow>(
            "SELECT a.id, a.job_id, a.seeker_id, a.status, a.resume_url, a.cover_letter,
                    a.linkedin_url, a.portfolio_url, a.created_at, a.updated_at,
                    j.title AS job_title, j.job_type AS job_job_type,
                    cp.company_name,
                    u.email AS seeker_email,
                    sp.id AS seeker_profile_id, sp.full_name, sp.phone, sp.address
             FROM applications a
             JOIN jobs j ON j.id = a.job_id
             JOIN users u ON u.id = a.seeker_id
             LEFT JOIN company_profiles cp ON cp.user_id = j.recruiter_id
             LEFT JOIN seeker_profiles sp ON sp.user_id = a.seeker_id
             WHERE j.recruiter_id = $1
             ORDER BY a.created_at DESC, a.id DESC
             LIMIT $2",
        )
        .bind(recruiter_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        Ok(rows.into_iter().map(RecentApplicant::from).collect())
    }
}

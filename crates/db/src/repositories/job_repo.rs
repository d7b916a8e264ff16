//! Repository for the `jobs` table.
//!
//! Every read joins `company_profiles` on the owning recruiter to fill the
//! job's [`CompanySnapshot`](crate::models::job::CompanySnapshot). Writes
//! only ever touch `jobs`.

use hireboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::job::{CreateJob, Job, UpdateJob};

/// Job columns plus the aliased company snapshot columns.
const COLUMNS: &str = "j.id, j.recruiter_id, j.title, j.description, j.category, j.job_type, \
                       j.salary, j.benefits, cp.company_name, cp.location AS company_location, \
                       cp.logo_url AS company_logo_url, j.created_at, j.updated_at";

/// `jobs` aliased as `j` with the company snapshot join.
const FROM_JOINED: &str = "jobs j LEFT JOIN company_profiles cp ON cp.user_id = j.recruiter_id";

/// Provides CRUD and listing operations for job postings.
pub struct JobRepo;

impl JobRepo {
    /// Insert a new job owned by `recruiter_id`, returning it with its snapshot.
    pub async fn create(
        pool: &PgPool,
        recruiter_id: DbId,
        input: &CreateJob,
    ) -> Result<Job, sqlx::Error> {
        let query = format!(
            "WITH j AS (
                INSERT INTO jobs (recruiter_id, title, description, category, job_type, salary, benefits)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING *
             )
             SELECT {COLUMNS} FROM j LEFT JOIN company_profiles cp ON cp.user_id = j.recruiter_id"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(recruiter_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.job_type)
            .bind(&input.salary)
            .bind(&input.benefits)
            .fetch_one(pool)
            .await
    }

    /// Overwrite a job's editable fields.
    ///
    /// Returns `None` if no row with the given `id` exists. Ownership is the
    /// caller's responsibility.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateJob,
    ) -> Result<Option<Job>, sqlx::Error> {
        let query = format!(
            "WITH j AS (
                UPDATE jobs SET
                    title = $2,
                    description = $3,
                    category = $4,
                    job_type = $5,
                    salary = $6,
                    benefits = $7
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM j LEFT JOIN company_profiles cp ON cp.user_id = j.recruiter_id"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.job_type)
            .bind(&input.salary)
            .bind(&input.benefits)
            .fetch_optional(pool)
            .await
    }

    /// Find a job by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Job>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM {FROM_JOINED} WHERE j.id = $1");
        sqlx::query_as::<_, Job>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List one page of jobs, newest first.
    pub async fn list_page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM_JOINED}
             ORDER BY j.created_at DESC, j.id DESC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of jobs, for pagination.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM jobs")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// List every job owned by a recruiter, newest first.
    pub async fn list_by_recruiter(
        pool: &PgPool,
        recruiter_id: DbId,
    ) -> Result<Vec<Job>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM {FROM_JOINED}
             WHERE j.recruiter_id = $1
             ORDER BY j.created_at DESC, j.id DESC"
        );
        sqlx::query_as::<_, Job>(&query)
            .bind(recruiter_id)
            .fetch_all(pool)
            .await
    }
}

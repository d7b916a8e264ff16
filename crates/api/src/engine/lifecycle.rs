//! Application lifecycle: apply, list, and recruiter-gated status changes.
//!
//! Ownership is always resolved through the parent job: a recruiter may
//! read or relabel an application only if they own the job it targets.

use hireboard_core::application::{ensure_job_owner, ApplicationStatus};
use hireboard_core::error::CoreError;
use hireboard_core::roles::Role;
use hireboard_core::types::DbId;
use hireboard_db::models::application::{
    Application, CreateApplication, JobApplicant, SeekerApplication,
};
use hireboard_db::models::job::Job;
use hireboard_db::repositories::{ApplicationRepo, JobRepo};
use sqlx::PgPool;

use crate::error::AppResult;

/// Fields a seeker supplies when applying. The status is not among them.
#[derive(Debug, Clone)]
pub struct NewApplication {
    pub job_id: DbId,
    pub resume_url: String,
    pub cover_letter: Option<String>,
    pub linkedin_url: Option<String>,
    pub portfolio_url: Option<String>,
}

/// Orchestrates the application state machine over the job and
/// application stores.
pub struct ApplicationLifecycle {
    pool: PgPool,
}

impl ApplicationLifecycle {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Submit an application to an existing job. The new row is always
    /// `PENDING`. Repeat applications to the same job are accepted.
    pub async fn apply(&self, seeker_id: DbId, input: NewApplication) -> AppResult<Application> {
        self.load_job(input.job_id).await?;

        let application = ApplicationRepo::create(
            &self.pool,
            &CreateApplication {
                job_id: input.job_id,
                seeker_id,
                resume_url: input.resume_url,
                cover_letter: input.cover_letter,
                linkedin_url: input.linkedin_url,
                portfolio_url: input.portfolio_url,
            },
        )
        .await?;

        tracing::info!(
            application_id = application.id,
            job_id = application.job_id,
            seeker_id,
            "Application submitted",
        );
        Ok(application)
    }

    /// A seeker's own applications with their job summaries, newest first.
    ///
    /// Any other role gets an empty list; recruiters go through
    /// [`list_job_applicants`](Self::list_job_applicants) instead.
    pub async fn list_applications(
        &self,
        user_id: DbId,
        role: Role,
    ) -> AppResult<Vec<SeekerApplication>> {
        match role {
            Role::Seeker => Ok(ApplicationRepo::list_by_seeker(&self.pool, user_id).await?),
            Role::Recruiter => Ok(Vec::new()),
        }
    }

    /// Every application to `job_id`, provided `requester_id` owns the job.
    pub async fn list_job_applicants(
        &self,
        job_id: DbId,
        requester_id: DbId,
    ) -> AppResult<Vec<JobApplicant>> {
        let job = self.load_job(job_id).await?;
        self.check_owner(&job, requester_id)?;

        Ok(ApplicationRepo::list_by_job(&self.pool, job_id).await?)
    }

    /// Relabel an application. Any status may follow any other.
    ///
    /// The label is validated before anything is read, so a bad label
    /// never touches the stored row.
    pub async fn update_status(
        &self,
        application_id: DbId,
        requester_id: DbId,
        new_status: &str,
    ) -> AppResult<Application> {
        let status: ApplicationStatus = new_status.parse()?;

        let application = ApplicationRepo::find_by_id(&self.pool, application_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Application", application_id))?;
        let job = self.load_job(application.job_id).await?;
        self.check_owner(&job, requester_id)?;

        let updated = ApplicationRepo::update_status(&self.pool, application_id, status)
            .await?
            .ok_or_else(|| CoreError::not_found("Application", application_id))?;

        tracing::info!(
            application_id,
            job_id = job.id,
            from = %application.status,
            to = %updated.status,
            "Application status changed",
        );
        Ok(updated)
    }

    async fn load_job(&self, job_id: DbId) -> AppResult<Job> {
        Ok(JobRepo::find_by_id(&self.pool, job_id)
            .await?
            .ok_or_else(|| CoreError::not_found("Job", job_id))?)
    }

    fn check_owner(&self, job: &Job, requester_id: DbId) -> Result<(), CoreError> {
        ensure_job_owner(job.id, job.recruiter_id, requester_id).inspect_err(|_| {
            tracing::warn!(job_id = job.id, requester_id, "Ownership check failed");
        })
    }
}

//! Recruiter dashboard aggregate and the recent-applicants projection.

use hireboard_core::analytics::{StatusDistribution, TrendPoint};
use hireboard_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::application::Application;

/// Derived, never persisted, statistics over one recruiter's jobs.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_jobs: i64,
    pub total_applicants: i64,
    pub status_distribution: StatusDistribution,
    pub applications_trend: Vec<TrendPoint>,
    pub recent_applicants: Vec<RecentApplicant>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentCompany {
    pub company_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentJob {
    pub id: DbId,
    pub title: String,
    pub job_type: Option<String>,
    pub company: RecentCompany,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentSeekerProfile {
    pub id: DbId,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentSeeker {
    pub id: DbId,
    pub email: String,
    pub seeker_profile: Option<RecentSeekerProfile>,
}

/// One entry of the "recent applicants" feed.
#[derive(Debug, Clone, Serialize)]
pub struct RecentApplicant {
    #[serde(flatten)]
    pub application: Application,
    pub job: RecentJob,
    pub seeker: RecentSeeker,
}

/// Flat row produced by the recent-applicants join.
#[derive(Debug, FromRow)]
pub struct RecentApplicantRow {
    #[sqlx(flatten)]
    pub application: Application,
    pub job_title: String,
    pub job_job_type: Option<String>,
    pub company_name: Option<String>,
    pub seeker_email: String,
    pub seeker_profile_id: Option<DbId>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<RecentApplicantRow> for RecentApplicant {
    fn from(row: RecentApplicantRow) -> Self {
        let job = RecentJob {
            id: row.application.job_id,
            title: row.job_title,
            job_type: row.job_job_type,
            company: RecentCompany {
                company_name: row.company_name,
            },
        };
        let seeker = RecentSeeker {
            id: row.application.seeker_id,
            email: row.seeker_email,
            seeker_profile: row.seeker_profile_id.map(|id| RecentSeekerProfile {
                id,
                full_name: row.full_name,
                phone: row.phone,
                address: row.address,
            }),
        };
        Self {
            application: row.application,
            job,
            seeker,
        }
    }
}

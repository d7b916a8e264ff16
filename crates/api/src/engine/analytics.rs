//! Recruiter dashboard aggregation.
//!
//! The five figures come from five independent queries run concurrently on
//! separate pool connections. They are not read from one snapshot, so
//! under concurrent writes the counts, distribution and recent feed may
//! disagree slightly. That is acceptable for a dashboard.

use hireboard_core::analytics::{
    build_trend, distribution_total, fold_status_counts, RECENT_APPLICANTS_LIMIT,
};
use hireboard_core::types::DbId;
use hireboard_db::models::dashboard::DashboardStats;
use hireboard_db::repositories::DashboardRepo;
use sqlx::PgPool;

use crate::error::AppResult;

/// Computes [`DashboardStats`] for one recruiter.
pub struct AnalyticsAggregator {
    pool: PgPool,
}

impl AnalyticsAggregator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Totals, status distribution, daily trend and the five most recent
    /// applicants across every job the recruiter owns.
    ///
    /// The first failing sub-query aborts the rest.
    pub async fn dashboard_stats(&self, recruiter_id: DbId) -> AppResult<DashboardStats> {
        let pool = &self.pool;
        let (total_jobs, total_applicants, status_rows, day_rows, recent_applicants) = tokio::try_join!(
            DashboardRepo::count_jobs(pool, recruiter_id),
            DashboardRepo::count_applicants(pool, recruiter_id),
            DashboardRepo::status_counts(pool, recruiter_id),
            DashboardRepo::daily_counts(pool, recruiter_id),
            DashboardRepo::recent_applicants(pool, recruiter_id, RECENT_APPLICANTS_LIMIT),
        )?;

        let status_distribution = fold_status_counts(status_rows)?;
        let applications_trend = build_trend(day_rows);

        tracing::debug!(
            recruiter_id,
            total_jobs,
            total_applicants,
            distributed = distribution_total(&status_distribution),
            trend_days = applications_trend.len(),
            "Dashboard stats computed",
        );

        Ok(DashboardStats {
            total_jobs,
            total_applicants,
            status_distribution,
            applications_trend,
            recent_applicants,
        })
    }
}

//! Building blocks for the recruiter dashboard.
//!
//! The store runs the grouped queries; these helpers turn their raw rows
//! into the typed shapes the dashboard exposes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::application::ApplicationStatus;
use crate::error::CoreError;

/// Size of the "recent applicants" feed.
pub const RECENT_APPLICANTS_LIMIT: i64 = 5;

/// Status -> count. Statuses with no applications are absent, not zero.
pub type StatusDistribution = BTreeMap<ApplicationStatus, i64>;

/// One day of the applications trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// Calendar day (UTC), serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub count: i64,
}

/// Fold `(status, count)` rows into a [`StatusDistribution`].
///
/// A label outside the enum means the schema constraint was bypassed, so it
/// is reported as an internal error instead of being silently dropped.
pub fn fold_status_counts(
    rows: impl IntoIterator<Item = (String, i64)>,
) -> Result<StatusDistribution, CoreError> {
    let mut distribution = StatusDistribution::new();
    for (label, count) in rows {
        let status = label
            .parse::<ApplicationStatus>()
            .map_err(|_| CoreError::Internal(format!("Unexpected stored status '{label}'")))?;
        if count > 0 {
            *distribution.entry(status).or_insert(0) += count;
        }
    }
    Ok(distribution)
}

/// Sum of all counts in a distribution.
pub fn distribution_total(distribution: &StatusDistribution) -> i64 {
    distribution.values().sum()
}

/// Build the sparse, ascending day series from `(day, count)` rows.
///
/// Days with no applications never appear; duplicate days are merged.
pub fn build_trend(rows: impl IntoIterator<Item = (NaiveDate, i64)>) -> Vec<TrendPoint> {
    let mut by_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for (date, count) in rows {
        *by_day.entry(date).or_insert(0) += count;
    }
    by_day
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(date, count)| TrendPoint { date, count })
        .collect()
}

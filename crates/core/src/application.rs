//! Application status vocabulary and ownership rules.
//!
//! An application's status is a flat label: any of the four values may
//! follow any other, and only [`ApplicationStatus::Pending`] is assigned
//! at creation time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub const STATUS_PENDING: &str = "PENDING";
pub const STATUS_PROCESS: &str = "PROCESS";
pub const STATUS_ACCEPTED: &str = "ACCEPTED";
pub const STATUS_REJECTED: &str = "REJECTED";

/// All valid status labels, in lifecycle order.
pub const VALID_STATUSES: &[&str] = &[
    STATUS_PENDING,
    STATUS_PROCESS,
    STATUS_ACCEPTED,
    STATUS_REJECTED,
];

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Process,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Pending,
        ApplicationStatus::Process,
        ApplicationStatus::Accepted,
        ApplicationStatus::Rejected,
    ];

    /// The label stored in `applications.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => STATUS_PENDING,
            ApplicationStatus::Process => STATUS_PROCESS,
            ApplicationStatus::Accepted => STATUS_ACCEPTED,
            ApplicationStatus::Rejected => STATUS_REJECTED,
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = CoreError;

    /// Labels are matched exactly; `"pending"` is not a valid status.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: {}",
                    VALID_STATUSES.join(", ")
                ))
            })
    }
}

impl TryFrom<String> for ApplicationStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Reject the request unless `requester_id` owns the job.
///
/// Used by every recruiter-side operation on a job's applications.
pub fn ensure_job_owner(
    job_id: DbId,
    job_recruiter_id: DbId,
    requester_id: DbId,
) -> Result<(), CoreError> {
    if job_recruiter_id == requester_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "You are not the recruiter for job {job_id}"
        )))
    }
}

//! User roles carried in access tokens and persisted on `users.role`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_SEEKER: &str = "SEEKER";
pub const ROLE_RECRUITER: &str = "RECRUITER";

/// The two account kinds of the job board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Applies to jobs and owns a seeker profile.
    Seeker,
    /// Owns jobs and reviews their applicants.
    Recruiter,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Seeker => ROLE_SEEKER,
            Role::Recruiter => ROLE_RECRUITER,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_SEEKER => Ok(Role::Seeker),
            ROLE_RECRUITER => Ok(Role::Recruiter),
            _ => Err(CoreError::Validation(format!(
                "Invalid role '{s}'. Must be one of: {ROLE_SEEKER}, {ROLE_RECRUITER}"
            ))),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

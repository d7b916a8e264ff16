//! Seeker and company profile models.
//!
//! A seeker profile owns two child collections (experiences, educations)
//! that are only ever replaced wholesale; see
//! [`ProfileRepo`](crate::repositories::ProfileRepo).

use chrono::NaiveDate;
use hireboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Experience {
    pub id: DbId,
    pub seeker_profile_id: DbId,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// A row from the `educations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Education {
    pub id: DbId,
    pub seeker_profile_id: DbId,
    pub institution: String,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// A row from `seeker_profiles` with its child collections attached.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SeekerProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub resume_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub description: Option<String>,
    pub skills: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[sqlx(skip)]
    pub experiences: Vec<Experience>,
    #[sqlx(skip)]
    pub educations: Vec<Education>,
}

/// Experience entry inside an [`UpdateSeekerProfile`]. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExperience {
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Education entry inside an [`UpdateSeekerProfile`]. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEducation {
    pub institution: String,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
}

/// Full replacement of a seeker profile.
///
/// Scalar fields are overwritten as given. Omitted `experiences` /
/// `educations` deserialize as empty lists and therefore clear the
/// existing entries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSeekerProfile {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub resume_url: Option<String>,
    pub portfolio_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experiences: Vec<CreateExperience>,
    #[serde(default)]
    pub educations: Vec<CreateEducation>,
}

/// A row from the `company_profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CompanyProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Full overwrite of a company profile's scalar fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCompanyProfile {
    pub company_name: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

/// The caller's profile, shaped by their role.
///
/// Serializes as `{ "role": "SEEKER" | "RECRUITER", "profile": ... }`, with
/// `profile` set to `null` when none has been saved yet.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "role", content = "profile")]
pub enum Profile {
    #[serde(rename = "SEEKER")]
    Seeker(Option<SeekerProfile>),
    #[serde(rename = "RECRUITER")]
    Company(Option<CompanyProfile>),
}

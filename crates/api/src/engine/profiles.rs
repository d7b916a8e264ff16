//! Profile reads and writes, including the seeker replace-on-update.
//!
//! A seeker update replaces the experience and education collections
//! wholesale inside one transaction: upsert the profile row, delete every
//! child row, insert the submitted children, re-read, commit. Any failure
//! (or the request future being dropped) rolls the whole unit back, so a
//! reader never sees the profile between the delete and the inserts.

use hireboard_core::error::CoreError;
use hireboard_core::roles::Role;
use hireboard_core::types::DbId;
use hireboard_db::models::profile::{
    CompanyProfile, Profile, SeekerProfile, UpdateCompanyProfile, UpdateSeekerProfile,
};
use hireboard_db::repositories::ProfileRepo;
use sqlx::PgPool;

use crate::error::AppResult;

/// Sole writer of seeker experience/education rows.
pub struct ProfileCoordinator {
    pool: PgPool,
}

impl ProfileCoordinator {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// The caller's profile, shaped by their role. `None` inside the
    /// variant means nothing has been saved yet.
    pub async fn get_profile(&self, user_id: DbId, role: Role) -> AppResult<Profile> {
        Ok(match role {
            Role::Seeker => {
                Profile::Seeker(ProfileRepo::find_seeker_profile(&self.pool, user_id).await?)
            }
            Role::Recruiter => {
                Profile::Company(ProfileRepo::find_company_profile(&self.pool, user_id).await?)
            }
        })
    }

    /// Create or fully replace the seeker's profile.
    ///
    /// An existing profile keeps its id. Omitted child lists clear the
    /// stored ones.
    pub async fn replace_seeker_profile(
        &self,
        user_id: DbId,
        input: &UpdateSeekerProfile,
    ) -> AppResult<SeekerProfile> {
        let mut tx = self.pool.begin().await?;

        let profile_id = ProfileRepo::upsert_seeker_row(&mut *tx, user_id, input).await?;
        let (removed_experiences, removed_educations) =
            ProfileRepo::delete_children(&mut *tx, profile_id).await?;

        for experience in &input.experiences {
            ProfileRepo::insert_experience(&mut *tx, profile_id, experience).await?;
        }
        for education in &input.educations {
            ProfileRepo::insert_education(&mut *tx, profile_id, education).await?;
        }

        let stored = ProfileRepo::load_seeker_profile(&mut *tx, user_id)
            .await?
            .ok_or_else(|| {
                CoreError::Internal(format!("Seeker profile for user {user_id} vanished mid-update"))
            })?;

        tx.commit().await?;

        tracing::info!(
            user_id,
            profile_id,
            removed_experiences,
            removed_educations,
            experiences = stored.experiences.len(),
            educations = stored.educations.len(),
            "Seeker profile replaced",
        );
        Ok(stored)
    }

    /// Create the recruiter's company profile on first write, otherwise
    /// overwrite its scalar fields.
    pub async fn upsert_company_profile(
        &self,
        user_id: DbId,
        input: &UpdateCompanyProfile,
    ) -> AppResult<CompanyProfile> {
        let profile = ProfileRepo::upsert_company_profile(&self.pool, user_id, input).await?;
        tracing::info!(user_id, profile_id = profile.id, "Company profile saved");
        Ok(profile)
    }
}

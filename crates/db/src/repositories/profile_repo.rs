//! Repository for `seeker_profiles` (with `experiences` / `educations`) and
//! `company_profiles`.
//!
//! The seeker write methods take a `&mut PgConnection` so the caller can run
//! the whole replace sequence inside one transaction. Nothing else in the
//! crate inserts or deletes experience/education rows.

use hireboard_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::profile::{
    CompanyProfile, CreateEducation, CreateExperience, Education, Experience, SeekerProfile,
    UpdateCompanyProfile, UpdateSeekerProfile,
};

const SEEKER_COLUMNS: &str = "id, user_id, full_name, phone, address, resume_url, portfolio_url, \
                              linkedin_url, description, skills, created_at, updated_at";

const EXPERIENCE_COLUMNS: &str = "id, seeker_profile_id, title, company, location, start_date, \
                                  end_date, description, created_at";

const EDUCATION_COLUMNS: &str = "id, seeker_profile_id, institution, degree, field_of_study, \
                                 start_date, end_date, created_at";

const COMPANY_COLUMNS: &str = "id, user_id, company_name, website, phone, location, description, \
                               logo_url, created_at, updated_at";

/// Provides reads and writes for seeker and company profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    // -----------------------------------------------------------------------
    // Seeker profiles
    // -----------------------------------------------------------------------

    /// Find a seeker profile by owning user, with experiences and educations
    /// ordered by start date, most recent first.
    pub async fn find_seeker_profile(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<SeekerProfile>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::load_seeker_profile(&mut conn, user_id).await
    }

    /// Same as [`find_seeker_profile`](Self::find_seeker_profile) but on a
    /// caller-provided connection, so a transaction can read its own writes.
    pub async fn load_seeker_profile(
        conn: &mut PgConnection,
        user_id: DbId,
    ) -> Result<Option<SeekerProfile>, sqlx::Error> {
        let query = format!("SELECT {SEEKER_COLUMNS} FROM seeker_profiles WHERE user_id = $1");
        let Some(mut profile) = sqlx::query_as::<_, SeekerProfile>(&query)
            .bind(user_id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };

        let query = format!(
            "SELECT {EXPERIENCE_COLUMNS} FROM experiences
             WHERE seeker_profile_id = $1
             ORDER BY start_date DESC, id ASC"
        );
        profile.experiences = sqlx::query_as::<_, Experience>(&query)
            .bind(profile.id)
            .fetch_all(&mut *conn)
            .await?;

        let query = format!(
            "SELECT {EDUCATION_COLUMNS} FROM educations
             WHERE seeker_profile_id = $1
             ORDER BY start_date DESC, id ASC"
        );
        profile.educations = sqlx::query_as::<_, Education>(&query)
            .bind(profile.id)
            .fetch_all(&mut *conn)
            .await?;

        Ok(Some(profile))
    }

    /// Insert the user's seeker profile, or overwrite its scalar fields if it
    /// already exists. Returns the profile id; an existing row keeps its id.
    ///
    /// The row stays locked until the surrounding transaction ends.
    pub async fn upsert_seeker_row(
        conn: &mut PgConnection,
        user_id: DbId,
        input: &UpdateSeekerProfile,
    ) -> Result<DbId, sqlx::Error> {
        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO seeker_profiles
                (user_id, full_name, phone, address, resume_url, portfolio_url,
                 linkedin_url, description, skills)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT (user_id) DO UPDATE SET
                full_name = EXCLUDED.full_name,
                phone = EXCLUDED.phone,
                address = EXCLUDED.address,
                resume_url = EXCLUDED.resume_url,
                portfolio_url = EXCLUDED.portfolio_url,
                linkedin_url = EXCLUDED.linkedin_url,
                description = EXCLUDED.description,
                skills = EXCLUDED.skills
             RETURNING id",
        )
        .bind(user_id)
        .bind(&input.full_name)
        .bind(&input.phone)
        .bind(&input.address)
        .bind(&input.resume_url)
        .bind(&input.portfolio_url)
        .bind(&input.linkedin_url)
        .bind(&input.description)
        .bind(&input.skills)
        .fetch_one(&mut *conn)
        .await?;
        Ok(id)
    }

    /// Delete every experience and education of a profile.
    ///
    /// Returns `(experiences_deleted, educations_deleted)`.
    pub async fn delete_children(
        conn: &mut PgConnection,
        seeker_profile_id: DbId,
    ) -> Result<(u64, u64), sqlx::Error> {
        let experiences = sqlx::query("DELETE FROM experiences WHERE seeker_profile_id = $1")
            .bind(seeker_profile_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        let educations = sqlx::query("DELETE FROM educations WHERE seeker_profile_id = $1")
            .bind(seeker_profile_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();
        Ok((experiences, educations))
    }

    /// Insert one experience entry under a profile.
    pub async fn insert_experience(
        conn: &mut PgConnection,
        seeker_profile_id: DbId,
        input: &CreateExperience,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO experiences
                (seeker_profile_id, title, company, location, start_date, end_date, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(seeker_profile_id)
        .bind(&input.title)
        .bind(&input.company)
        .bind(&input.location)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.description)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    /// Insert one education entry under a profile.
    pub async fn insert_education(
        conn: &mut PgConnection,
        seeker_profile_id: DbId,
        input: &CreateEducation,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO educations
                (seeker_profile_id, institution, degree, field_of_study, start_date, end_date)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(seeker_profile_id)
        .bind(&input.institution)
        .bind(&input.degree)
        .bind(&input.field_of_study)
        .bind(input.start_date)
        .bind(input.end_date)
        .execute(&mut *conn)
        .await?;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Company profiles
    // -----------------------------------------------------------------------

    /// Find a company profile by owning user.
    pub async fn find_company_profile(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<CompanyProfile>, sqlx::Error> {
        let query = format!("SELECT {COMPANY_COLUMNS} FROM company_profiles WHERE user_id = $1");
        sqlx::query_as::<_, CompanyProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Create the user's company profile on first write, otherwise overwrite
    /// its scalar fields in place (the row keeps its id).
    pub async fn upsert_company_profile(
        pool: &PgPool,
        user_id: DbId,
        input: &UpdateCompanyProfile,
    ) -> Result<CompanyProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO company_profiles
                (user_id, company_name, website, phone, location, description, logo_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (user_id) DO UPDATE SET
                company_name = EXCLUDED.company_name,
                website = EXCLUDED.website,
                phone = EXCLUDED.phone,
                location = EXCLUDED.location,
                description = EXCLUDED.description,
                logo_url = EXCLUDED.logo_url
             RETURNING {COMPANY_COLUMNS}"
        );
        sqlx::query_as::<_, CompanyProfile>(&query)
            .bind(user_id)
            .bind(&input.company_name)
            .bind(&input.website)
            .bind(&input.phone)
            .bind(&input.location)
            .bind(&input.description)
            .bind(&input.logo_url)
            .fetch_one(pool)
            .await
    }
}

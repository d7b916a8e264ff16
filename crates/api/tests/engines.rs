//! Engine-level tests: the lifecycle and profile coordinators called
//! directly, asserting on typed errors rather than HTTP status codes.

mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use hireboard_api::engine::lifecycle::{ApplicationLifecycle, NewApplication};
use hireboard_api::engine::profiles::ProfileCoordinator;
use hireboard_api::error::AppError;
use hireboard_core::application::ApplicationStatus;
use hireboard_core::error::CoreError;
use hireboard_core::roles::Role;
use hireboard_core::types::DbId;
use hireboard_db::models::job::CreateJob;
use hireboard_db::models::profile::{CreateExperience, Profile, UpdateSeekerProfile};
use hireboard_db::repositories::JobRepo;
use sqlx::PgPool;

async fn new_job(pool: &PgPool, recruiter_id: DbId) -> DbId {
    JobRepo::create(
        pool,
        recruiter_id,
        &CreateJob {
            title: "Backend".to_string(),
            description: "Services".to_string(),
            category: None,
            job_type: None,
            salary: None,
            benefits: vec![],
        },
    )
    .await
    .unwrap()
    .id
}

fn application_for(job_id: DbId) -> NewApplication {
    NewApplication {
        job_id,
        resume_url: "r1".to_string(),
        cover_letter: None,
        linkedin_url: None,
        portfolio_url: None,
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_apply_to_missing_job_is_not_found(pool: PgPool) {
    let (seeker, _) = common::create_user(&pool, "s@test.com", Role::Seeker).await;
    let lifecycle = ApplicationLifecycle::new(pool);

    let err = lifecycle.apply(seeker, application_for(4242)).await.unwrap_err();
    assert_matches!(
        err,
        AppError::Core(CoreError::NotFound { entity: "Job", id: 4242 })
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_status_by_non_owner_is_forbidden(pool: PgPool) {
    let (recruiter, _) = common::create_user(&pool, "r@test.com", Role::Recruiter).await;
    let (other, _) = common::create_user(&pool, "o@test.com", Role::Recruiter).await;
    let (seeker, _) = common::create_user(&pool, "s@test.com", Role::Seeker).await;
    let job_id = new_job(&pool, recruiter).await;
    let lifecycle = ApplicationLifecycle::new(pool);

    let application = lifecycle.apply(seeker, application_for(job_id)).await.unwrap();
    assert_eq!(application.status, ApplicationStatus::Pending);

    let err = lifecycle
        .update_status(application.id, other, "ACCEPTED")
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Forbidden(_)));

    let err = lifecycle
        .list_job_applicants(job_id, other)
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Forbidden(_)));

    let updated = lifecycle
        .update_status(application.id, recruiter, "REJECTED")
        .await
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Rejected);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_status_is_rejected_before_lookup(pool: PgPool) {
    let (recruiter, _) = common::create_user(&pool, "r@test.com", Role::Recruiter).await;
    let lifecycle = ApplicationLifecycle::new(pool);

    // The application does not exist; the label check still wins.
    let err = lifecycle
        .update_status(999, recruiter, "HIRED")
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_seeker_replace_surfaces_database_error(pool: PgPool) {
    let (seeker, _) = common::create_user(&pool, "s@test.com", Role::Seeker).await;
    let profiles = ProfileCoordinator::new(pool);
    let day = |d| NaiveDate::from_ymd_opt(2025, 6, d).unwrap();

    let input = UpdateSeekerProfile {
        full_name: Some("Sam".to_string()),
        experiences: vec![CreateExperience {
            title: "Backwards".to_string(),
            company: None,
            location: None,
            start_date: day(20),
            end_date: Some(day(1)),
            description: None,
        }],
        ..Default::default()
    };
    let err = profiles
        .replace_seeker_profile(seeker, &input)
        .await
        .unwrap_err();
    assert_matches!(err, AppError::Database(sqlx::Error::Database(_)));

    // Nothing from the aborted transaction is visible.
    let profile = profiles.get_profile(seeker, Role::Seeker).await.unwrap();
    assert_matches!(profile, Profile::Seeker(None));
}

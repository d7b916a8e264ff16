//! Integration tests for the repository layer against a real database:
//! - Job reads carry the recruiter's company snapshot
//! - Applications start as PENDING and keep their references
//! - Seeker profile replace inside a transaction
//! - Dashboard sub-queries scoped to one recruiter

use assert_matches::assert_matches;
use chrono::NaiveDate;
use hireboard_core::application::ApplicationStatus;
use hireboard_core::roles::Role;
use hireboard_db::models::application::CreateApplication;
use hireboard_db::models::job::{CreateJob, UpdateJob};
use hireboard_db::models::profile::{
    CreateEducation, CreateExperience, UpdateCompanyProfile, UpdateSeekerProfile,
};
use hireboard_db::models::user::{CreateUser, PROVIDER_LOCAL};
use hireboard_db::repositories::{
    ApplicationRepo, DashboardRepo, JobRepo, ProfileRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str, role: Role) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: Some("hash".to_string()),
            role,
            provider: PROVIDER_LOCAL.to_string(),
        },
    )
    .await
    .unwrap()
    .id
}

fn new_job(title: &str) -> CreateJob {
    CreateJob {
        title: title.to_string(),
        description: "Build things".to_string(),
        category: Some("Engineering".to_string()),
        job_type: Some("FULL_TIME".to_string()),
        salary: None,
        benefits: vec!["Remote".to_string()],
    }
}

async fn apply(pool: &PgPool, job_id: i64, seeker_id: i64) -> i64 {
    ApplicationRepo::create(
        pool,
        &CreateApplication {
            job_id,
            seeker_id,
            resume_url: "https://cdn.test/cv.pdf".to_string(),
            cover_letter: None,
            linkedin_url: None,
            portfolio_url: None,
        },
    )
    .await
    .unwrap()
    .id
}

async fn set_created_at(pool: &PgPool, application_id: i64, ts: &str) {
    sqlx::query("UPDATE applications SET created_at = $2::timestamptz WHERE id = $1")
        .bind(application_id)
        .bind(ts)
        .execute(pool)
        .await
        .unwrap();
}

fn experience(title: &str, start: (i32, u32, u32)) -> CreateExperience {
    CreateExperience {
        title: title.to_string(),
        company: None,
        location: None,
        start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
        end_date: None,
        description: None,
    }
}

async fn replace_seeker_profile(pool: &PgPool, user_id: i64, input: &UpdateSeekerProfile) {
    let mut tx = pool.begin().await.unwrap();
    let profile_id = ProfileRepo::upsert_seeker_row(&mut *tx, user_id, input)
        .await
        .unwrap();
    ProfileRepo::delete_children(&mut *tx, profile_id).await.unwrap();
    for exp in &input.experiences {
        ProfileRepo::insert_experience(&mut *tx, profile_id, exp)
            .await
            .unwrap();
    }
    for edu in &input.educations {
        ProfileRepo::insert_education(&mut *tx, profile_id, edu)
            .await
            .unwrap();
    }
    tx.commit().await.unwrap();
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_job_snapshot_empty_without_company_profile(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;
    let job = JobRepo::create(&pool, recruiter, &new_job("Backend")).await.unwrap();

    assert_eq!(job.recruiter_id, recruiter);
    assert_eq!(job.benefits, vec!["Remote".to_string()]);
    assert!(job.company.company_name.is_none());
    assert!(job.company.location.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_job_snapshot_follows_company_profile(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;
    let job = JobRepo::create(&pool, recruiter, &new_job("Backend")).await.unwrap();

    ProfileRepo::upsert_company_profile(
        &pool,
        recruiter,
        &UpdateCompanyProfile {
            company_name: Some("Acme".to_string()),
            location: Some("Jakarta".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let found = JobRepo::find_by_id(&pool, job.id).await.unwrap().unwrap();
    assert_eq!(found.company.company_name.as_deref(), Some("Acme"));
    assert_eq!(found.company.location.as_deref(), Some("Jakarta"));
    assert!(found.company.logo_url.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_job_update_and_pagination(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;
    for i in 0..3 {
        JobRepo::create(&pool, recruiter, &new_job(&format!("Job {i}")))
            .await
            .unwrap();
    }

    assert_eq!(JobRepo::count(&pool).await.unwrap(), 3);
    let page = JobRepo::list_page(&pool, 2, 2).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].title, "Job 0");

    let updated = JobRepo::update(
        &pool,
        page[0].id,
        &UpdateJob {
            title: "Renamed".to_string(),
            description: "New".to_string(),
            category: None,
            job_type: None,
            salary: Some("10k".to_string()),
            benefits: vec![],
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.title, "Renamed");
    assert!(updated.benefits.is_empty());

    assert!(JobRepo::update(&pool, 999_999, &UpdateJob {
        title: "x".to_string(),
        description: "x".to_string(),
        category: None,
        job_type: None,
        salary: None,
        benefits: vec![],
    })
    .await
    .unwrap()
    .is_none());
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_application_starts_pending(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;
    let seeker = new_user(&pool, "s@test.com", Role::Seeker).await;
    let job = JobRepo::create(&pool, recruiter, &new_job("Backend")).await.unwrap();

    let id = apply(&pool, job.id, seeker).await;
    let app = ApplicationRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(app.status, ApplicationStatus::Pending);

    let updated = ApplicationRepo::update_status(&pool, id, ApplicationStatus::Accepted)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.status, ApplicationStatus::Accepted);
    assert_eq!(updated.job_id, job.id);
    assert_eq!(updated.seeker_id, seeker);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_application_refs_are_immutable(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;
    let seeker = new_user(&pool, "s@test.com", Role::Seeker).await;
    let job_a = JobRepo::create(&pool, recruiter, &new_job("A")).await.unwrap();
    let job_b = JobRepo::create(&pool, recruiter, &new_job("B")).await.unwrap();
    let id = apply(&pool, job_a.id, seeker).await;

    let result = sqlx::query("UPDATE applications SET job_id = $2 WHERE id = $1")
        .bind(id)
        .bind(job_b.id)
        .execute(&pool)
        .await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_application_status_check_constraint(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;
    let seeker = new_user(&pool, "s@test.com", Role::Seeker).await;
    let job = JobRepo::create(&pool, recruiter, &new_job("Backend")).await.unwrap();
    let id = apply(&pool, job.id, seeker).await;

    let result = sqlx::query("UPDATE applications SET status = 'HIRED' WHERE id = $1")
        .bind(id)
        .execute(&pool)
        .await;
    assert_matches!(result, Err(sqlx::Error::Database(_)));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_application_listings(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;
    let seeker = new_user(&pool, "s@test.com", Role::Seeker).await;
    let job = JobRepo::create(&pool, recruiter, &new_job("Backend")).await.unwrap();
    apply(&pool, job.id, seeker).await;
    apply(&pool, job.id, seeker).await;

    let by_seeker = ApplicationRepo::list_by_seeker(&pool, seeker).await.unwrap();
    assert_eq!(by_seeker.len(), 2);
    assert_eq!(by_seeker[0].job.title, "Backend");

    let by_job = ApplicationRepo::list_by_job(&pool, job.id).await.unwrap();
    assert_eq!(by_job.len(), 2);
    assert_eq!(by_job[0].seeker.email, "s@test.com");
    assert!(by_job[0].seeker.profile_id.is_none());
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeker_profile_replace_clears_children(pool: PgPool) {
    let seeker = new_user(&pool, "s@test.com", Role::Seeker).await;

    let first = UpdateSeekerProfile {
        full_name: Some("Sam".to_string()),
        skills: vec!["rust".to_string()],
        experiences: vec![
            experience("Junior", (2019, 1, 1)),
            experience("Senior", (2022, 6, 1)),
        ],
        educations: vec![CreateEducation {
            institution: "UI".to_string(),
            degree: None,
            field_of_study: None,
            start_date: NaiveDate::from_ymd_opt(2014, 9, 1).unwrap(),
            end_date: None,
        }],
        ..Default::default()
    };
    replace_seeker_profile(&pool, seeker, &first).await;

    let loaded = ProfileRepo::find_seeker_profile(&pool, seeker)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.experiences.len(), 2);
    assert_eq!(loaded.experiences[0].title, "Senior");
    assert_eq!(loaded.educations.len(), 1);
    let profile_id = loaded.id;

    replace_seeker_profile(
        &pool,
        seeker,
        &UpdateSeekerProfile {
            full_name: Some("Samantha".to_string()),
            ..Default::default()
        },
    )
    .await;

    let loaded = ProfileRepo::find_seeker_profile(&pool, seeker)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.id, profile_id);
    assert_eq!(loaded.full_name.as_deref(), Some("Samantha"));
    assert!(loaded.skills.is_empty());
    assert!(loaded.experiences.is_empty());
    assert!(loaded.educations.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_seeker_profile_rollback_keeps_previous(pool: PgPool) {
    let seeker = new_user(&pool, "s@test.com", Role::Seeker).await;
    replace_seeker_profile(
        &pool,
        seeker,
        &UpdateSeekerProfile {
            experiences: vec![experience("Kept", (2020, 1, 1))],
            ..Default::default()
        },
    )
    .await;

    {
        let mut tx = pool.begin().await.unwrap();
        let id = ProfileRepo::upsert_seeker_row(&mut *tx, seeker, &UpdateSeekerProfile::default())
            .await
            .unwrap();
        ProfileRepo::delete_children(&mut *tx, id).await.unwrap();
        // Dropped without commit.
    }

    let loaded = ProfileRepo::find_seeker_profile(&pool, seeker)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(loaded.experiences.len(), 1);
    assert_eq!(loaded.experiences[0].title, "Kept");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_profiles_are_none(pool: PgPool) {
    let user = new_user(&pool, "u@test.com", Role::Seeker).await;
    assert!(ProfileRepo::find_seeker_profile(&pool, user).await.unwrap().is_none());
    assert!(ProfileRepo::find_company_profile(&pool, user).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_company_profile_upsert_keeps_id(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;
    let first = ProfileRepo::upsert_company_profile(
        &pool,
        recruiter,
        &UpdateCompanyProfile {
            company_name: Some("Acme".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let second = ProfileRepo::upsert_company_profile(
        &pool,
        recruiter,
        &UpdateCompanyProfile {
            company_name: Some("Acme Corp".to_string()),
            website: Some("https://acme.test".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(second.company_name.as_deref(), Some("Acme Corp"));
    assert_eq!(second.website.as_deref(), Some("https://acme.test"));
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_counts_scoped_to_recruiter(pool: PgPool) {
    let r1 = new_user(&pool, "r1@test.com", Role::Recruiter).await;
    let r2 = new_user(&pool, "r2@test.com", Role::Recruiter).await;
    let seeker = new_user(&pool, "s@test.com", Role::Seeker).await;
    let j1 = JobRepo::create(&pool, r1, &new_job("Mine")).await.unwrap();
    JobRepo::create(&pool, r1, &new_job("Also mine")).await.unwrap();
    let j2 = JobRepo::create(&pool, r2, &new_job("Theirs")).await.unwrap();

    let a = apply(&pool, j1.id, seeker).await;
    apply(&pool, j1.id, seeker).await;
    apply(&pool, j2.id, seeker).await;
    ApplicationRepo::update_status(&pool, a, ApplicationStatus::Rejected)
        .await
        .unwrap();

    assert_eq!(DashboardRepo::count_jobs(&pool, r1).await.unwrap(), 2);
    assert_eq!(DashboardRepo::count_applicants(&pool, r1).await.unwrap(), 2);

    let mut counts = DashboardRepo::status_counts(&pool, r1).await.unwrap();
    counts.sort();
    assert_eq!(
        counts,
        vec![("PENDING".to_string(), 1), ("REJECTED".to_string(), 1)]
    );
    let total: i64 = counts.iter().map(|(_, c)| c).sum();
    assert_eq!(total, 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_daily_counts_group_by_day(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;
    let seeker = new_user(&pool, "s@test.com", Role::Seeker).await;
    let job = JobRepo::create(&pool, recruiter, &new_job("Backend")).await.unwrap();

    let a = apply(&pool, job.id, seeker).await;
    let b = apply(&pool, job.id, seeker).await;
    let c = apply(&pool, job.id, seeker).await;
    set_created_at(&pool, a, "2026-03-02T08:00:00Z").await;
    set_created_at(&pool, b, "2026-03-02T22:30:00Z").await;
    set_created_at(&pool, c, "2026-03-01T12:00:00Z").await;

    let days = DashboardRepo::daily_counts(&pool, recruiter).await.unwrap();
    assert_eq!(
        days,
        vec![
            (NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(), 1),
            (NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(), 2),
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_recent_applicants(pool: PgPool) {
    let r1 = new_user(&pool, "r1@test.com", Role::Recruiter).await;
    let r2 = new_user(&pool, "r2@test.com", Role::Recruiter).await;
    let seeker = new_user(&pool, "s@test.com", Role::Seeker).await;
    let mine = JobRepo::create(&pool, r1, &new_job("Mine")).await.unwrap();
    let theirs = JobRepo::create(&pool, r2, &new_job("Theirs")).await.unwrap();

    let mut own_ids = Vec::new();
    for day in 1..=7 {
        let id = apply(&pool, mine.id, seeker).await;
        set_created_at(&pool, id, &format!("2026-04-{day:02}T10:00:00Z")).await;
        own_ids.push(id);
    }
    let foreign = apply(&pool, theirs.id, seeker).await;
    set_created_at(&pool, foreign, "2026-05-01T10:00:00Z").await;

    let recent = DashboardRepo::recent_applicants(&pool, r1, 5).await.unwrap();
    assert_eq!(recent.len(), 5);
    let ids: Vec<i64> = recent.iter().map(|r| r.application.id).collect();
    let expected: Vec<i64> = own_ids.iter().rev().take(5).copied().collect();
    assert_eq!(ids, expected);
    assert!(recent
        .windows(2)
        .all(|w| w[0].application.created_at >= w[1].application.created_at));
    assert!(recent.iter().all(|r| r.job.id == mine.id));
    assert_eq!(recent[0].job.title, "Mine");
    assert_eq!(recent[0].seeker.email, "s@test.com");
    assert!(recent[0].seeker.seeker_profile.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_dashboard_empty_for_new_recruiter(pool: PgPool) {
    let recruiter = new_user(&pool, "r@test.com", Role::Recruiter).await;

    assert_eq!(DashboardRepo::count_jobs(&pool, recruiter).await.unwrap(), 0);
    assert_eq!(DashboardRepo::count_applicants(&pool, recruiter).await.unwrap(), 0);
    assert!(DashboardRepo::status_counts(&pool, recruiter).await.unwrap().is_empty());
    assert!(DashboardRepo::daily_counts(&pool, recruiter).await.unwrap().is_empty());
    assert!(DashboardRepo::recent_applicants(&pool, recruiter, 5)
        .await
        .unwrap()
        .is_empty());
}

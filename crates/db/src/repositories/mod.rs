//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that accept
//! `&PgPool` as the first argument. Methods that must join a caller-owned
//! transaction take `&mut PgConnection` instead (pass `&mut *tx`).

pub mod application_repo;
pub mod dashboard_repo;
pub mod job_repo;
pub mod profile_repo;
pub mod user_repo;

pub use application_repo::ApplicationRepo;
pub use dashboard_repo::DashboardRepo;
pub use job_repo::JobRepo;
pub use profile_repo::ProfileRepo;
pub use user_repo::UserRepo;

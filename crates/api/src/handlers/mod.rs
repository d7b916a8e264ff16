pub mod applications;
pub mod auth;
pub mod dashboard;
pub mod jobs;
pub mod profile;

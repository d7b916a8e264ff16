//! Domain vocabulary for the job board: roles, application statuses,
//! ownership rules, pagination and dashboard helpers.
//!
//! Nothing in this crate touches the database or HTTP.

pub mod analytics;
pub mod application;
pub mod error;
pub mod pagination;
pub mod roles;
pub mod types;

//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and full-overwrite updates
//! - Read-only projections assembled by joins at query time

pub mod application;
pub mod dashboard;
pub mod job;
pub mod profile;
pub mod user;

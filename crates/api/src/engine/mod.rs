//! Domain engines sitting between the HTTP handlers and the repositories.
//!
//! Each engine owns a clone of the pool and is built once at startup into
//! [`AppState`](crate::state::AppState). Handlers pass in the caller's
//! identity; the engines enforce ownership and orchestrate the stores.
//!
//! - [`lifecycle`] -- apply, list and status transitions for applications.
//! - [`analytics`] -- recruiter dashboard aggregation.
//! - [`profiles`] -- profile reads and the transactional seeker replace.

pub mod analytics;
pub mod lifecycle;
pub mod profiles;

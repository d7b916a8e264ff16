//! Authentication primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- JWT access-token generation and validation.
//! - [`google`] -- Google OAuth authorization-code exchange.

pub mod google;
pub mod jwt;
pub mod password;

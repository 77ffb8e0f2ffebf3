//! Helpers shared across layers.
//!
//! - [`password`] - Argon2 password hashing and verification
//! - [`jwt`] - Bearer token signing and verification

pub mod jwt;
pub mod password;

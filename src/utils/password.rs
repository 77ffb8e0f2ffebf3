//! Password hashing with Argon2id.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$...`), which embed the
//! salt and parameters, so verification needs nothing but the stored string.
//!
//! Argon2 is CPU and memory heavy. Request paths use [`hash_password`] and
//! [`verify_password`], which run on Tokio's blocking pool instead of a
//! runtime worker.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use serde_json::json;

use crate::error::AppError;

/// Hashes `password` on the blocking pool.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails or the task panics.
pub async fn hash_password(password: &str) -> Result<String, AppError> {
    let password = password.to_owned();

    tokio::task::spawn_blocking(move || hash_password_blocking(&password))
        .await
        .map_err(join_failed)?
}

/// Checks `password` against `stored_hash` on the blocking pool.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the task panics.
pub async fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let password = password.to_owned();
    let stored_hash = stored_hash.to_owned();

    tokio::task::spawn_blocking(move || verify_password_blocking(&password, &stored_hash))
        .await
        .map_err(join_failed)
}

fn join_failed(e: tokio::task::JoinError) -> AppError {
    AppError::internal(
        "Password task failed",
        json!({ "reason": e.to_string() }),
    )
}

/// Hashes a plaintext password with a fresh random salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the hasher rejects its input.
pub fn hash_password_blocking(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            AppError::internal(
                "Failed to hash password",
                json!({ "reason": e.to_string() }),
            )
        })
}

/// Checks a plaintext password against a stored PHC hash.
///
/// A malformed stored hash never verifies.
pub fn verify_password_blocking(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

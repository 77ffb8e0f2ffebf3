//! Authentication service: credential checks and bearer tokens.

use std::sync::Arc;

use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::jwt::{Claims, TokenSigner};
use crate::utils::password::verify_password;
use serde_json::json;

/// Service for logging users in and validating their bearer tokens.
///
/// Reads the user table only; it never writes.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    signer: TokenSigner,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    pub fn new(repository: Arc<R>, signer: TokenSigner) -> Self {
        Self { repository, signer }
    }

    /// Verifies credentials and issues a signed token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no user has this username.
    /// Returns [`AppError::Unauthorized`] if the password does not match or the
    /// account is deactivated.
    /// Returns [`AppError::Internal`] on database or signing errors.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({ "user": username })))?;

        if !verify_password(password, &user.password_hash).await? {
            tracing::info!(user_id = user.id, "login rejected: wrong password");
            return Err(AppError::unauthorized(
                "Invalid credentials",
                json!({ "reason": "Password does not match" }),
            ));
        }

        if !user.is_active {
            tracing::info!(user_id = user.id, "login rejected: inactive account");
            return Err(AppError::unauthorized(
                "Invalid credentials",
                json!({ "reason": "Account is deactivated" }),
            ));
        }

        tracing::info!(user_id = user.id, "user logged in");
        self.signer.issue(user.id, &user.username)
    }

    /// Validates a bearer token and returns its claims.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for invalid or expired tokens.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        self.signer.verify(token)
    }
}

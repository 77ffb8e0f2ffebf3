//! User account management.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserUpdate};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;
use serde_json::json;

/// Service for creating, reading, replacing and deleting users.
///
/// Plaintext passwords enter here and leave as argon2 hashes.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Creates an active user with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the username already exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_user(&self, username: String, password: &str) -> Result<User, AppError> {
        if self.repository.find_by_username(&username).await?.is_some() {
            return Err(AppError::conflict(
                "User already exists",
                json!({ "username": username }),
            ));
        }

        let password_hash = hash_password(password).await?;
        let user = self
            .repository
            .create(NewUser {
                username,
                password_hash,
            })
            .await?;

        tracing::info!(user_id = user.id, "user created");
        Ok(user)
    }

    /// Replaces the username and optionally the password.
    ///
    /// `password: None` keeps the current hash.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if another user already has the username.
    pub async fn update_user(
        &self,
        id: i64,
        username: String,
        password: Option<&str>,
    ) -> Result<User, AppError> {
        self.get_user(id).await?;

        if let Some(other) = self.repository.find_by_username(&username).await?
            && other.id != id
        {
            return Err(AppError::conflict(
                "Username already taken",
                json!({ "username": username }),
            ));
        }

        let password_hash = match password {
            Some(plain) => Some(hash_password(plain).await?),
            None => None,
        };

        let user = self
            .repository
            .update(
                id,
                UserUpdate {
                    username,
                    password_hash,
                },
            )
            .await?
            .ok_or_else(|| user_not_found(id))?;

        tracing::info!(user_id = id, "user updated");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.get_user(id).await?;

        if !self.repository.delete(id).await? {
            return Err(user_not_found(id));
        }

        tracing::info!(user_id = id, "user deleted");
        Ok(())
    }

    /// Enables or disables login for a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn set_active(&self, id: i64, is_active: bool) -> Result<(), AppError> {
        if !self.repository.set_active(id, is_active).await? {
            return Err(user_not_found(id));
        }
        Ok(())
    }
}

fn user_not_found(id: i64) -> AppError {
    AppError::not_found("User not found", json!({ "id": id }))
}

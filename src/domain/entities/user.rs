//! User entity: the identity used for login.

use chrono::{DateTime, Utc};

/// A user able to authenticate against the API.
///
/// `password_hash` holds an argon2 PHC string and must never be serialized
/// to clients.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new user. New users are active.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

/// Full replacement of a user's credentials.
///
/// `password_hash: None` keeps the stored hash.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub username: String,
    pub password_hash: Option<String>,
}

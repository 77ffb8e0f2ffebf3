//! DTOs for user management.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 120))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: String,
}

/// Full replacement of a user.
///
/// Omitting `password` keeps the current one.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 120))]
    pub username: String,

    #[validate(length(min = 1, max = 128))]
    pub password: Option<String>,
}

/// Public view of a user. The password hash is never exposed.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

//! Handlers for user management endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::common::{ItemsResponse, MessageResponse};
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::api::extract::{Path, Payload};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users` (alias `GET /user`)
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(ItemsResponse::from_entities(users)))
}

/// # Endpoint
///
/// `GET /user/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn get_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.user_service.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Creates a user with a hashed password.
///
/// # Endpoint
///
/// `POST /users` (alias `POST /user`)
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 409 if the username is taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Payload(payload): Payload<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .create_user(payload.username, &payload.password)
        .await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Replaces a user's username and, if given, password.
///
/// # Endpoint
///
/// `PUT /user/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the user does not exist.
/// Returns 409 if the username belongs to another user.
pub async fn update_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Payload(payload): Payload<UpdateUserRequest>,
) -> Result<Json<UserResponse>, AppError> {
    payload.validate()?;

    let user = state
        .user_service
        .update_user(id, payload.username, payload.password.as_deref())
        .await?;

    Ok(Json(user.into()))
}

/// # Endpoint
///
/// `DELETE /user/{id}`
///
/// # Errors
///
/// Returns 404 if the user does not exist.
pub async fn delete_user_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.user_service.delete_user(id).await?;
    Ok(Json(MessageResponse::new("User deleted")))
}

//! Handler for the login endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse};
use crate::api::extract::Payload;
use crate::error::AppError;
use crate::state::AppState;

/// Exchanges credentials for a bearer token.
///
/// # Endpoint
///
/// `POST /login`
///
/// # Request Body
///
/// ```json
/// { "user": "admin", "password": "secret" }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiJ9..." }
/// ```
///
/// # Errors
///
/// Returns 400 if either field is missing or empty.
/// Returns 404 if the user does not exist.
/// Returns 401 if the password is wrong or the account is inactive.
pub async fn login_handler(
    State(state): State<AppState>,
    Payload(payload): Payload<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;

    let token = state
        .auth_service
        .login(&payload.user, &payload.password)
        .await?;

    Ok(Json(LoginResponse { token }))
}

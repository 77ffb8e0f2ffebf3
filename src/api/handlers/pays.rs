//! Handlers for payment endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::common::{ItemsResponse, MessageResponse};
use crate::api::dto::pay::{PayRequest, PayResponse};
use crate::api::extract::{Path, Payload};
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /pays`
pub async fn pay_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<PayResponse>>, AppError> {
    let pays = state.pay_service.list_pays().await?;
    Ok(Json(ItemsResponse::from_entities(pays)))
}

/// # Endpoint
///
/// `GET /pay/{id}`
pub async fn get_pay_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PayResponse>, AppError> {
    let pay = state.pay_service.get_pay(id).await?;
    Ok(Json(pay.into()))
}

/// # Endpoint
///
/// `GET /pay/record/{id_record}`
///
/// # Errors
///
/// Returns 404 if the record has no payments.
pub async fn pays_by_record_handler(
    Path(id_record): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<PayResponse>>, AppError> {
    let pays = state.pay_service.list_by_record(id_record).await?;
    Ok(Json(ItemsResponse::from_entities(pays)))
}

/// # Endpoint
///
/// `POST /pay/{id_record}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the clinical record does not exist.
pub async fn create_pay_handler(
    Path(id_record): Path<i64>,
    State(state): State<AppState>,
    Payload(payload): Payload<PayRequest>,
) -> Result<(StatusCode, Json<PayResponse>), AppError> {
    payload.validate()?;

    let pay = state
        .pay_service
        .create_pay(id_record, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(pay.into())))
}

/// Replaces every amount of a payment.
///
/// # Endpoint
///
/// `PUT /pay/{id}`
///
/// # Errors
///
/// Returns 400 if any amount is missing or negative; the row is left as is.
/// Returns 404 if the payment does not exist.
pub async fn update_pay_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Payload(payload): Payload<PayRequest>,
) -> Result<Json<PayResponse>, AppError> {
    payload.validate()?;

    let pay = state.pay_service.update_pay(id, payload.into()).await?;

    Ok(Json(pay.into()))
}

/// # Endpoint
///
/// `DELETE /pay/{id}`
pub async fn delete_pay_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.pay_service.delete_pay(id).await?;
    Ok(Json(MessageResponse::new("Payment deleted")))
}

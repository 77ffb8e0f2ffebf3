//! Handlers for clinical record endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::common::{ItemsResponse, MessageResponse};
use crate::api::dto::record::{RecordRequest, RecordResponse};
use crate::api::extract::{Path, Payload};
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /records`
pub async fn record_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<RecordResponse>>, AppError> {
    let records = state.record_service.list_records().await?;
    Ok(Json(ItemsResponse::from_entities(records)))
}

/// # Endpoint
///
/// `GET /record/{id}`
///
/// # Errors
///
/// Returns 404 if the record does not exist.
pub async fn get_record_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<RecordResponse>, AppError> {
    let record = state.record_service.get_record(id).await?;
    Ok(Json(record.into()))
}

/// Lists every record of a patient.
///
/// # Endpoint
///
/// `GET /record/patient/{id_patient}`
///
/// # Errors
///
/// Returns 404 if the patient has no records.
pub async fn records_by_patient_handler(
    Path(id_patient): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<RecordResponse>>, AppError> {
    let records = state.record_service.list_by_patient(id_patient).await?;
    Ok(Json(ItemsResponse::from_entities(records)))
}

/// Creates a record for the patient in the path.
///
/// # Endpoint
///
/// `POST /record/{id_patient}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the patient does not exist.
pub async fn create_record_handler(
    Path(id_patient): Path<i64>,
    State(state): State<AppState>,
    Payload(payload): Payload<RecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>), AppError> {
    payload.validate()?;

    let record = state
        .record_service
        .create_record(id_patient, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// # Endpoint
///
/// `PUT /record/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the record does not exist.
pub async fn update_record_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Payload(payload): Payload<RecordRequest>,
) -> Result<Json<RecordResponse>, AppError> {
    payload.validate()?;

    let record = state
        .record_service
        .update_record(id, payload.into())
        .await?;

    Ok(Json(record.into()))
}

/// # Endpoint
///
/// `DELETE /record/{id}`
///
/// # Errors
///
/// Returns 404 if the record does not exist.
/// Returns 409 if obstetric records or payments still reference it.
pub async fn delete_record_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.record_service.delete_record(id).await?;
    Ok(Json(MessageResponse::new("Record deleted")))
}

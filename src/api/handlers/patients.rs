//! Handlers for patient management endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::common::{ItemsResponse, MessageResponse};
use crate::api::dto::patient::{PatientRequest, PatientResponse};
use crate::api::extract::{Path, Payload};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all patients.
///
/// # Endpoint
///
/// `GET /patients` (alias `GET /patient`)
pub async fn patient_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<PatientResponse>>, AppError> {
    let patients = state.patient_service.list_patients().await?;
    Ok(Json(ItemsResponse::from_entities(patients)))
}

/// # Endpoint
///
/// `GET /patient/{id}`
///
/// # Errors
///
/// Returns 404 if the patient does not exist.
pub async fn get_patient_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<PatientResponse>, AppError> {
    let patient = state.patient_service.get_patient(id).await?;
    Ok(Json(patient.into()))
}

/// Registers a patient.
///
/// # Endpoint
///
/// `POST /patient`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 409 if a patient with the same `dni` exists.
pub async fn create_patient_handler(
    State(state): State<AppState>,
    Payload(payload): Payload<PatientRequest>,
) -> Result<(StatusCode, Json<PatientResponse>), AppError> {
    payload.validate()?;

    let patient = state.patient_service.create_patient(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(patient.into())))
}

/// Replaces every field of a patient.
///
/// # Endpoint
///
/// `PUT /patient/{id}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the patient does not exist.
/// Returns 409 if the `dni` belongs to another patient.
pub async fn update_patient_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Payload(payload): Payload<PatientRequest>,
) -> Result<Json<PatientResponse>, AppError> {
    payload.validate()?;

    let patient = state
        .patient_service
        .update_patient(id, payload.into())
        .await?;

    Ok(Json(patient.into()))
}

/// # Endpoint
///
/// `DELETE /patient/{id}`
///
/// # Errors
///
/// Returns 404 if the patient does not exist.
/// Returns 409 if the patient still has records.
pub async fn delete_patient_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.patient_service.delete_patient(id).await?;
    Ok(Json(MessageResponse::new("Patient deleted")))
}

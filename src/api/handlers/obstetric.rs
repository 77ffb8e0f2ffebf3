//! Handlers for obstetric record endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::common::{ItemsResponse, MessageResponse};
use crate::api::dto::obstetric::{ObstetricRequest, ObstetricResponse};
use crate::api::extract::{Path, Payload};
use crate::error::AppError;
use crate::state::AppState;

/// # Endpoint
///
/// `GET /records/obstetric`
pub async fn obstetric_list_handler(
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<ObstetricResponse>>, AppError> {
    let items = state.obstetric_service.list_obstetric().await?;
    Ok(Json(ItemsResponse::from_entities(items)))
}

/// # Endpoint
///
/// `GET /record/obstetric/{id}`
pub async fn get_obstetric_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ObstetricResponse>, AppError> {
    let obst = state.obstetric_service.get_obstetric(id).await?;
    Ok(Json(obst.into()))
}

/// Lists the obstetric entries of a clinical record.
///
/// # Endpoint
///
/// `GET /record/obstetric/record/{id_record}`
///
/// # Errors
///
/// Returns 404 if the record has no obstetric entries.
pub async fn obstetric_by_record_handler(
    Path(id_record): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ItemsResponse<ObstetricResponse>>, AppError> {
    let items = state.obstetric_service.list_by_record(id_record).await?;
    Ok(Json(ItemsResponse::from_entities(items)))
}

/// # Endpoint
///
/// `POST /record/obstetric/{id_record}`
///
/// # Errors
///
/// Returns 400 if validation fails.
/// Returns 404 if the clinical record does not exist.
pub async fn create_obstetric_handler(
    Path(id_record): Path<i64>,
    State(state): State<AppState>,
    Payload(payload): Payload<ObstetricRequest>,
) -> Result<(StatusCode, Json<ObstetricResponse>), AppError> {
    payload.validate()?;

    let obst = state
        .obstetric_service
        .create_obstetric(id_record, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(obst.into())))
}

/// # Endpoint
///
/// `PUT /record/obstetric/{id}`
pub async fn update_obstetric_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Payload(payload): Payload<ObstetricRequest>,
) -> Result<Json<ObstetricResponse>, AppError> {
    payload.validate()?;

    let obst = state
        .obstetric_service
        .update_obstetric(id, payload.into())
        .await?;

    Ok(Json(obst.into()))
}

/// # Endpoint
///
/// `DELETE /record/obstetric/{id}`
pub async fn delete_obstetric_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, AppError> {
    state.obstetric_service.delete_obstetric(id).await?;
    Ok(Json(MessageResponse::new("Obstetric record deleted")))
}

//! Patient management service.

use crate::domain::entities::{Patient, PatientFields};
use crate::domain::repositories::PatientRepository;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

/// Service for patient CRUD.
///
/// Enforces `dni` uniqueness before touching storage, so a duplicate never
/// reaches an insert.
pub struct PatientService<R: PatientRepository> {
    repository: Arc<R>,
}

impl<R: PatientRepository> PatientService<R> {
    /// Creates a new patient service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn list_patients(&self) -> Result<Vec<Patient>, AppError> {
        self.repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the patient does not exist.
    pub async fn get_patient(&self, id: i64) -> Result<Patient, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| patient_not_found(id))
    }

    /// Registers a new patient.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a patient with the same `dni` exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_patient(&self, fields: PatientFields) -> Result<Patient, AppError> {
        if self.repository.find_by_dni(&fields.dni).await?.is_some() {
            return Err(AppError::conflict(
                "Patient already exists",
                json!({ "dni": fields.dni }),
            ));
        }

        let patient = self.repository.create(fields).await?;

        tracing::info!(patient_id = patient.id, "patient created");
        Ok(patient)
    }

    /// Replaces every field of a patient.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the patient does not exist.
    /// Returns [`AppError::Conflict`] if the new `dni` belongs to another patient.
    pub async fn update_patient(&self, id: i64, fields: PatientFields) -> Result<Patient, AppError> {
        self.get_patient(id).await?;

        if let Some(other) = self.repository.find_by_dni(&fields.dni).await?
            && other.id != id
        {
            return Err(AppError::conflict(
                "Another patient already has this dni",
                json!({ "dni": fields.dni, "id": other.id }),
            ));
        }

        let patient = self
            .repository
            .update(id, fields)
            .await?
            .ok_or_else(|| patient_not_found(id))?;

        tracing::info!(patient_id = id, "patient updated");
        Ok(patient)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the patient does not exist.
    /// Returns [`AppError::Conflict`] while clinical records still reference it.
    pub async fn delete_patient(&self, id: i64) -> Result<(), AppError> {
        self.get_patient(id).await?;

        if !self.repository.delete(id).await? {
            return Err(patient_not_found(id));
        }

        tracing::info!(patient_id = id, "patient deleted");
        Ok(())
    }
}

fn patient_not_found(id: i64) -> AppError {
    AppError::not_found("Patient not found", json!({ "id": id }))
}

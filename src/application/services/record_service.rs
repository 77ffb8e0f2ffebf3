//! Clinical record service.

use std::sync::Arc;

use crate::domain::entities::{Record, RecordFields};
use crate::domain::repositories::{PatientRepository, RecordRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for clinical records.
///
/// A record is always created under an existing patient; the patient is
/// checked before the insert so a bad id yields 404 rather than a storage
/// failure.
pub struct RecordService<R: RecordRepository, P: PatientRepository> {
    record_repository: Arc<R>,
    patient_repository: Arc<P>,
}

impl<R: RecordRepository, P: PatientRepository> RecordService<R, P> {
    /// Creates a new record service.
    pub fn new(record_repository: Arc<R>, patient_repository: Arc<P>) -> Self {
        Self {
            record_repository,
            patient_repository,
        }
    }

    pub async fn list_records(&self) -> Result<Vec<Record>, AppError> {
        self.record_repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn get_record(&self, id: i64) -> Result<Record, AppError> {
        self.record_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| record_not_found(id))
    }

    /// Lists every record of a patient.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the patient has no records.
    pub async fn list_by_patient(&self, id_patient: i64) -> Result<Vec<Record>, AppError> {
        let records = self.record_repository.list_by_patient(id_patient).await?;

        if records.is_empty() {
            return Err(AppError::not_found(
                "Records not found",
                json!({ "id_patient": id_patient }),
            ));
        }

        Ok(records)
    }

    /// Creates a record under an existing patient.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the patient does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create_record(
        &self,
        id_patient: i64,
        fields: RecordFields,
    ) -> Result<Record, AppError> {
        if self
            .patient_repository
            .find_by_id(id_patient)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(
                "Patient not found",
                json!({ "id_patient": id_patient }),
            ));
        }

        let record = self.record_repository.create(id_patient, fields).await?;

        tracing::info!(record_id = record.id, id_patient, "record created");
        Ok(record)
    }

    /// Replaces the clinical content of a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    pub async fn update_record(&self, id: i64, fields: RecordFields) -> Result<Record, AppError> {
        self.get_record(id).await?;

        let record = self
            .record_repository
            .update(id, fields)
            .await?
            .ok_or_else(|| record_not_found(id))?;

        tracing::info!(record_id = id, "record updated");
        Ok(record)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record does not exist.
    /// Returns [`AppError::Conflict`] while obstetric entries or payments reference it.
    pub async fn delete_record(&self, id: i64) -> Result<(), AppError> {
        self.get_record(id).await?;

        if !self.record_repository.delete(id).await? {
            return Err(record_not_found(id));
        }

        tracing::info!(record_id = id, "record deleted");
        Ok(())
    }
}

fn record_not_found(id: i64) -> AppError {
    AppError::not_found("Record not found", json!({ "id": id }))
}

//! Obstetric record service.

use std::sync::Arc;

use crate::domain::entities::{ObstetricFields, RecordObst};
use crate::domain::repositories::{ObstetricRepository, RecordRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for obstetric history entries attached to clinical records.
pub struct ObstetricService<O: ObstetricRepository, R: RecordRepository> {
    obstetric_repository: Arc<O>,
    record_repository: Arc<R>,
}

impl<O: ObstetricRepository, R: RecordRepository> ObstetricService<O, R> {
    /// Creates a new obstetric service.
    pub fn new(obstetric_repository: Arc<O>, record_repository: Arc<R>) -> Self {
        Self {
            obstetric_repository,
            record_repository,
        }
    }

    pub async fn list_obstetric(&self) -> Result<Vec<RecordObst>, AppError> {
        self.obstetric_repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn get_obstetric(&self, id: i64) -> Result<RecordObst, AppError> {
        self.obstetric_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| obstetric_not_found(id))
    }

    /// Lists the obstetric entries of one clinical record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record has none.
    pub async fn list_by_record(&self, id_record: i64) -> Result<Vec<RecordObst>, AppError> {
        let items = self.obstetric_repository.list_by_record(id_record).await?;

        if items.is_empty() {
            return Err(AppError::not_found(
                "Obstetric records not found",
                json!({ "id_record": id_record }),
            ));
        }

        Ok(items)
    }

    /// Attaches an obstetric entry to an existing clinical record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the clinical record does not exist.
    pub async fn create_obstetric(
        &self,
        id_record: i64,
        fields: ObstetricFields,
    ) -> Result<RecordObst, AppError> {
        if self
            .record_repository
            .find_by_id(id_record)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(
                "Record not found",
                json!({ "id_record": id_record }),
            ));
        }

        let obst = self
            .obstetric_repository
            .create(id_record, fields)
            .await?;

        tracing::info!(obstetric_id = obst.id, id_record, "obstetric record created");
        Ok(obst)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn update_obstetric(
        &self,
        id: i64,
        fields: ObstetricFields,
    ) -> Result<RecordObst, AppError> {
        self.get_obstetric(id).await?;

        let obst = self
            .obstetric_repository
            .update(id, fields)
            .await?
            .ok_or_else(|| obstetric_not_found(id))?;

        tracing::info!(obstetric_id = id, "obstetric record updated");
        Ok(obst)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the entry does not exist.
    pub async fn delete_obstetric(&self, id: i64) -> Result<(), AppError> {
        self.get_obstetric(id).await?;

        if !self.obstetric_repository.delete(id).await? {
            return Err(obstetric_not_found(id));
        }

        tracing::info!(obstetric_id = id, "obstetric record deleted");
        Ok(())
    }
}

fn obstetric_not_found(id: i64) -> AppError {
    AppError::not_found("Obstetric record not found", json!({ "id": id }))
}

//! Repository trait for clinical records.

use crate::domain::entities::{Record, RecordFields};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Inserts a record owned by `id_patient`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the patient row is missing at commit time.
    async fn create(&self, id_patient: i64, fields: RecordFields) -> Result<Record, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>, AppError>;

    async fn list(&self) -> Result<Vec<Record>, AppError>;

    /// All records of one patient, oldest first.
    async fn list_by_patient(&self, id_patient: i64) -> Result<Vec<Record>, AppError>;

    /// Overwrites the clinical content. Returns `Ok(None)` if the record does not exist.
    async fn update(&self, id: i64, fields: RecordFields) -> Result<Option<Record>, AppError>;

    /// Removes a record. Returns `false` if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

//! Repository trait for patients.

use crate::domain::entities::{Patient, PatientFields};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for patient storage.
///
/// `dni` is unique; inserts or updates that collide surface as
/// [`AppError::Conflict`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PatientRepository: Send + Sync {
    async fn create(&self, fields: PatientFields) -> Result<Patient, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError>;

    /// Finds a patient by national ID.
    async fn find_by_dni(&self, dni: &str) -> Result<Option<Patient>, AppError>;

    async fn list(&self) -> Result<Vec<Patient>, AppError>;

    /// Overwrites every column. Returns `Ok(None)` if the patient does not exist.
    async fn update(&self, id: i64, fields: PatientFields) -> Result<Option<Patient>, AppError>;

    /// Removes a patient. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] while records still reference the patient.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

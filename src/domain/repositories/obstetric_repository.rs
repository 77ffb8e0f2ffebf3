//! Repository trait for obstetric records.

use crate::domain::entities::{ObstetricFields, RecordObst};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObstetricRepository: Send + Sync {
    async fn create(&self, id_record: i64, fields: ObstetricFields)
    -> Result<RecordObst, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<RecordObst>, AppError>;

    async fn list(&self) -> Result<Vec<RecordObst>, AppError>;

    /// Obstetric entries attached to one clinical record.
    async fn list_by_record(&self, id_record: i64) -> Result<Vec<RecordObst>, AppError>;

    async fn update(
        &self,
        id: i64,
        fields: ObstetricFields,
    ) -> Result<Option<RecordObst>, AppError>;

    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

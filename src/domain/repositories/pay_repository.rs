//! Repository trait for payments.

use crate::domain::entities::{Pay, PayFields};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PayRepository: Send + Sync {
    async fn create(&self, id_record: i64, fields: PayFields) -> Result<Pay, AppError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Pay>, AppError>;

    async fn list(&self) -> Result<Vec<Pay>, AppError>;

    /// Payments attached to one clinical record.
    async fn list_by_record(&self, id_record: i64) -> Result<Vec<Pay>, AppError>;

    /// Overwrites every amount. Returns `Ok(None)` if the payment does not exist.
    async fn update(&self, id: i64, fields: PayFields) -> Result<Option<Pay>, AppError>;

    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}

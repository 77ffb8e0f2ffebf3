//! Payment service.

use std::sync::Arc;

use crate::domain::entities::{Pay, PayFields};
use crate::domain::repositories::{PayRepository, RecordRepository};
use crate::error::AppError;
use serde_json::json;

/// Service for payments attached to clinical records.
///
/// Updates are full replacements: callers resubmit every amount.
pub struct PayService<P: PayRepository, R: RecordRepository> {
    pay_repository: Arc<P>,
    record_repository: Arc<R>,
}

impl<P: PayRepository, R: RecordRepository> PayService<P, R> {
    /// Creates a new payment service.
    pub fn new(pay_repository: Arc<P>, record_repository: Arc<R>) -> Self {
        Self {
            pay_repository,
            record_repository,
        }
    }

    pub async fn list_pays(&self) -> Result<Vec<Pay>, AppError> {
        self.pay_repository.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the payment does not exist.
    pub async fn get_pay(&self, id: i64) -> Result<Pay, AppError> {
        self.pay_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| pay_not_found(id))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the record has no payments.
    pub async fn list_by_record(&self, id_record: i64) -> Result<Vec<Pay>, AppError> {
        let pays = self.pay_repository.list_by_record(id_record).await?;

        if pays.is_empty() {
            return Err(AppError::not_found(
                "Payments not found",
                json!({ "id_record": id_record }),
            ));
        }

        Ok(pays)
    }

    /// Records a payment against an existing clinical record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the clinical record does not exist.
    pub async fn create_pay(&self, id_record: i64, fields: PayFields) -> Result<Pay, AppError> {
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

        let pay = self.pay_repository.create(id_record, fields).await?;

        tracing::info!(pay_id = pay.id, id_record, "payment created");
        Ok(pay)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the payment does not exist.
    pub async fn update_pay(&self, id: i64, fields: PayFields) -> Result<Pay, AppError> {
        self.get_pay(id).await?;

        let pay = self
            .pay_repository
            .update(id, fields)
            .await?
            .ok_or_else(|| pay_not_found(id))?;

        tracing::info!(pay_id = id, "payment updated");
        Ok(pay)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the payment does not exist.
    pub async fn delete_pay(&self, id: i64) -> Result<(), AppError> {
        self.get_pay(id).await?;

        if !self.pay_repository.delete(id).await? {
            return Err(pay_not_found(id));
        }

        tracing::info!(pay_id = id, "payment deleted");
        Ok(())
    }
}

fn pay_not_found(id: i64) -> AppError {
    AppError::not_found("Payment not found", json!({ "id": id }))
}

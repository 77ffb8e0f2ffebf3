//! PostgreSQL implementation of clinical record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Record, RecordFields};
use crate::domain::repositories::RecordRepository;
use crate::error::AppError;

const RECORD_COLUMNS: &str = "id, diagnosis, recommendations, treatment, date, diagnosis_diff, \
     diagnosis_eco, exams, medications, symptoms, phy_exa, signs, type_pat, observations, \
     id_patient";

/// PostgreSQL repository for clinical records.
pub struct PgRecordRepository {
    pool: Arc<PgPool>,
}

impl PgRecordRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordRepository for PgRecordRepository {
    async fn create(&self, id_patient: i64, fields: RecordFields) -> Result<Record, AppError> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, Record>(&format!(
            r#"
            INSERT INTO records
                (diagnosis, recommendations, treatment, date, diagnosis_diff, diagnosis_eco,
                 exams, medications, symptoms, phy_exa, signs, type_pat, observations, id_patient)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(&fields.diagnosis)
        .bind(&fields.recommendations)
        .bind(&fields.treatment)
        .bind(fields.date)
        .bind(&fields.diagnosis_diff)
        .bind(&fields.diagnosis_eco)
        .bind(&fields.exams)
        .bind(&fields.medications)
        .bind(&fields.symptoms)
        .bind(&fields.phy_exa)
        .bind(&fields.signs)
        .bind(&fields.type_pat)
        .bind(&fields.observations)
        .bind(id_patient)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Record>, AppError> {
        let record = sqlx::query_as::<_, Record>(&format!(
            "SELECT {RECORD_COLUMNS} FROM records WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn list(&self) -> Result<Vec<Record>, AppError> {
        let records = sqlx::query_as::<_, Record>(&format!(
            "SELECT {RECORD_COLUMNS} FROM records ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn list_by_patient(&self, id_patient: i64) -> Result<Vec<Record>, AppError> {
        let records = sqlx::query_as::<_, Record>(&format!(
            "SELECT {RECORD_COLUMNS} FROM records WHERE id_patient = $1 ORDER BY date, id"
        ))
        .bind(id_patient)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(records)
    }

    async fn update(&self, id: i64, fields: RecordFields) -> Result<Option<Record>, AppError> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, Record>(&format!(
            r#"
            UPDATE records SET
                diagnosis       = $2,
                recommendations = $3,
                treatment       = $4,
                date            = $5,
                diagnosis_diff  = $6,
                diagnosis_eco   = $7,
                exams           = $8,
                medications     = $9,
                symptoms        = $10,
                phy_exa         = $11,
                signs           = $12,
                type_pat        = $13,
                observations    = $14
            WHERE id = $1
            RETURNING {RECORD_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.diagnosis)
        .bind(&fields.recommendations)
        .bind(&fields.treatment)
        .bind(fields.date)
        .bind(&fields.diagnosis_diff)
        .bind(&fields.diagnosis_eco)
        .bind(&fields.exams)
        .bind(&fields.medications)
        .bind(&fields.symptoms)
        .bind(&fields.phy_exa)
        .bind(&fields.signs)
        .bind(&fields.type_pat)
        .bind(&fields.observations)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM records WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

//! PostgreSQL implementation of obstetric record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{ObstetricFields, RecordObst};
use crate::domain::repositories::ObstetricRepository;
use crate::error::AppError;

const OBST_COLUMNS: &str = "id, num_births, num_abort, menst_date, type_preg, id_record";

/// PostgreSQL repository for obstetric records (`records_obst` table).
pub struct PgObstetricRepository {
    pool: Arc<PgPool>,
}

impl PgObstetricRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ObstetricRepository for PgObstetricRepository {
    async fn create(
        &self,
        id_record: i64,
        fields: ObstetricFields,
    ) -> Result<RecordObst, AppError> {
        let mut tx = self.pool.begin().await?;

        let obst = sqlx::query_as::<_, RecordObst>(&format!(
            r#"
            INSERT INTO records_obst (num_births, num_abort, menst_date, type_preg, id_record)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {OBST_COLUMNS}
            "#
        ))
        .bind(fields.num_births)
        .bind(fields.num_abort)
        .bind(fields.menst_date)
        .bind(&fields.type_preg)
        .bind(id_record)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(obst)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<RecordObst>, AppError> {
        let obst = sqlx::query_as::<_, RecordObst>(&format!(
            "SELECT {OBST_COLUMNS} FROM records_obst WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(obst)
    }

    async fn list(&self) -> Result<Vec<RecordObst>, AppError> {
        let items = sqlx::query_as::<_, RecordObst>(&format!(
            "SELECT {OBST_COLUMNS} FROM records_obst ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(items)
    }

    async fn list_by_record(&self, id_record: i64) -> Result<Vec<RecordObst>, AppError> {
        let items = sqlx::query_as::<_, RecordObst>(&format!(
            "SELECT {OBST_COLUMNS} FROM records_obst WHERE id_record = $1 ORDER BY id"
        ))
        .bind(id_record)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(items)
    }

    async fn update(
        &self,
        id: i64,
        fields: ObstetricFields,
    ) -> Result<Option<RecordObst>, AppError> {
        let mut tx = self.pool.begin().await?;

        let obst = sqlx::query_as::<_, RecordObst>(&format!(
            r#"
            UPDATE records_obst SET
                num_births = $2,
                num_abort  = $3,
                menst_date = $4,
                type_preg  = $5
            WHERE id = $1
            RETURNING {OBST_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(fields.num_births)
        .bind(fields.num_abort)
        .bind(fields.menst_date)
        .bind(&fields.type_preg)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(obst)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM records_obst WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

//! PostgreSQL implementation of payment repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Pay, PayFields};
use crate::domain::repositories::PayRepository;
use crate::error::AppError;

const PAY_COLUMNS: &str = "id, pesos, cash, pay_mov, biopago, point, id_record";

/// PostgreSQL repository for payments.
pub struct PgPayRepository {
    pool: Arc<PgPool>,
}

impl PgPayRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PayRepository for PgPayRepository {
    async fn create(&self, id_record: i64, fields: PayFields) -> Result<Pay, AppError> {
        let mut tx = self.pool.begin().await?;

        let pay = sqlx::query_as::<_, Pay>(&format!(
            r#"
            INSERT INTO pays (pesos, cash, pay_mov, biopago, point, id_record)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PAY_COLUMNS}
            "#
        ))
        .bind(fields.pesos)
        .bind(fields.cash)
        .bind(fields.pay_mov)
        .bind(fields.biopago)
        .bind(fields.point)
        .bind(id_record)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(pay)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Pay>, AppError> {
        let pay = sqlx::query_as::<_, Pay>(&format!("SELECT {PAY_COLUMNS} FROM pays WHERE id = $1"))
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(pay)
    }

    async fn list(&self) -> Result<Vec<Pay>, AppError> {
        let pays = sqlx::query_as::<_, Pay>(&format!("SELECT {PAY_COLUMNS} FROM pays ORDER BY id"))
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(pays)
    }

    async fn list_by_record(&self, id_record: i64) -> Result<Vec<Pay>, AppError> {
        let pays = sqlx::query_as::<_, Pay>(&format!(
            "SELECT {PAY_COLUMNS} FROM pays WHERE id_record = $1 ORDER BY id"
        ))
        .bind(id_record)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(pays)
    }

    async fn update(&self, id: i64, fields: PayFields) -> Result<Option<Pay>, AppError> {
        let mut tx = self.pool.begin().await?;

        let pay = sqlx::query_as::<_, Pay>(&format!(
            r#"
            UPDATE pays SET
                pesos   = $2,
                cash    = $3,
                pay_mov = $4,
                biopago = $5,
                point   = $6
            WHERE id = $1
            RETURNING {PAY_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(fields.pesos)
        .bind(fields.cash)
        .bind(fields.pay_mov)
        .bind(fields.biopago)
        .bind(fields.point)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(pay)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM pays WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

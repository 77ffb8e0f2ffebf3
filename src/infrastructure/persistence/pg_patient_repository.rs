//! PostgreSQL implementation of patient repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Patient, PatientFields};
use crate::domain::repositories::PatientRepository;
use crate::error::AppError;

const PATIENT_COLUMNS: &str =
    "id, name, last_name, dni, parish, city, mun, date, gender, number, ant_fam, ant_per";

/// PostgreSQL repository for patients.
///
/// `dni` carries a unique constraint (`patients_dni_key`); deleting a patient
/// that still has records is refused by the `records.id_patient` foreign key.
pub struct PgPatientRepository {
    pool: Arc<PgPool>,
}

impl PgPatientRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PatientRepository for PgPatientRepository {
    async fn create(&self, fields: PatientFields) -> Result<Patient, AppError> {
        let mut tx = self.pool.begin().await?;

        let patient = sqlx::query_as::<_, Patient>(&format!(
            r#"
            INSERT INTO patients
                (name, last_name, dni, parish, city, mun, date, gender, number, ant_fam, ant_per)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING {PATIENT_COLUMNS}
            "#
        ))
        .bind(&fields.name)
        .bind(&fields.last_name)
        .bind(&fields.dni)
        .bind(&fields.parish)
        .bind(&fields.city)
        .bind(&fields.mun)
        .bind(fields.date)
        .bind(&fields.gender)
        .bind(&fields.number)
        .bind(&fields.ant_fam)
        .bind(&fields.ant_per)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(patient)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError> {
        let patient = sqlx::query_as::<_, Patient>(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(patient)
    }

    async fn find_by_dni(&self, dni: &str) -> Result<Option<Patient>, AppError> {
        let patient = sqlx::query_as::<_, Patient>(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients WHERE dni = $1"
        ))
        .bind(dni)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(patient)
    }

    async fn list(&self) -> Result<Vec<Patient>, AppError> {
        let patients = sqlx::query_as::<_, Patient>(&format!(
            "SELECT {PATIENT_COLUMNS} FROM patients ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(patients)
    }

    async fn update(&self, id: i64, fields: PatientFields) -> Result<Option<Patient>, AppError> {
        let mut tx = self.pool.begin().await?;

        let patient = sqlx::query_as::<_, Patient>(&format!(
            r#"
            UPDATE patients SET
                name      = $2,
                last_name = $3,
                dni       = $4,
                parish    = $5,
                city      = $6,
                mun       = $7,
                date      = $8,
                gender    = $9,
                number    = $10,
                ant_fam   = $11,
                ant_per   = $12
            WHERE id = $1
            RETURNING {PATIENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.last_name)
        .bind(&fields.dni)
        .bind(&fields.parish)
        .bind(&fields.city)
        .bind(&fields.mun)
        .bind(fields.date)
        .bind(&fields.gender)
        .bind(&fields.number)
        .bind(&fields.ant_fam)
        .bind(&fields.ant_per)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(patient)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}

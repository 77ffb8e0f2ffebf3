//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx. Rows map
//! onto entities through `sqlx::FromRow`; every write runs in its own
//! transaction, which rolls back when dropped without a commit.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User accounts
//! - [`PgPatientRepository`] - Patients
//! - [`PgRecordRepository`] - Clinical records
//! - [`PgObstetricRepository`] - Obstetric records
//! - [`PgPayRepository`] - Payments

pub mod pg_obstetric_repository;
pub mod pg_patient_repository;
pub mod pg_pay_repository;
pub mod pg_record_repository;
pub mod pg_user_repository;

pub use pg_obstetric_repository::PgObstetricRepository;
pub use pg_patient_repository::PgPatientRepository;
pub use pg_pay_repository::PgPayRepository;
pub use pg_record_repository::PgRecordRepository;
pub use pg_user_repository::PgUserRepository;

//! Repository trait definitions for the domain layer.
//!
//! This module defines the repository interfaces (traits) that abstract data access
//! operations following the Repository pattern. These traits are implemented by
//! concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Login identities
//! - [`PatientRepository`] - Patients
//! - [`RecordRepository`] - Clinical records
//! - [`ObstetricRepository`] - Obstetric records
//! - [`PayRepository`] - Payments
//!
//! # Write semantics
//!
//! Lookups return `Ok(None)` / `Ok(false)` for missing rows; deciding whether
//! that is a 404 is left to the services.

pub mod obstetric_repository;
pub mod patient_repository;
pub mod pay_repository;
pub mod record_repository;
pub mod user_repository;

pub use obstetric_repository::ObstetricRepository;
pub use patient_repository::PatientRepository;
pub use pay_repository::PayRepository;
pub use record_repository::RecordRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use obstetric_repository::MockObstetricRepository;
#[cfg(test)]
pub use patient_repository::MockPatientRepository;
#[cfg(test)]
pub use pay_repository::MockPayRepository;
#[cfg(test)]
pub use record_repository::MockRecordRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;

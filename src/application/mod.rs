//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! existence checks and uniqueness rules. Services consume repository traits
//! and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::auth_service::AuthService`] - Login and bearer token validation
//! - [`services::user_service::UserService`] - User accounts
//! - [`services::patient_service::PatientService`] - Patients
//! - [`services::record_service::RecordService`] - Clinical records
//! - [`services::obstetric_service::ObstetricService`] - Obstetric records
//! - [`services::pay_service::PayService`] - Payments

pub mod services;

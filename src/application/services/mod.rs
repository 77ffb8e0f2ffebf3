//! Business logic services for the application layer.

pub mod auth_service;
pub mod obstetric_service;
pub mod patient_service;
pub mod pay_service;
pub mod record_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use obstetric_service::ObstetricService;
pub use patient_service::PatientService;
pub use pay_service::PayService;
pub use record_service::RecordService;
pub use user_service::UserService;

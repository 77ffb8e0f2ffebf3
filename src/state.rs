//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    AuthService, ObstetricService, PatientService, PayService, RecordService, UserService,
};
use crate::infrastructure::persistence::{
    PgObstetricRepository, PgPatientRepository, PgPayRepository, PgRecordRepository,
    PgUserRepository,
};
use crate::utils::jwt::TokenSigner;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub user_service: Arc<UserService<PgUserRepository>>,
    pub patient_service: Arc<PatientService<PgPatientRepository>>,
    pub record_service: Arc<RecordService<PgRecordRepository, PgPatientRepository>>,
    pub obstetric_service: Arc<ObstetricService<PgObstetricRepository, PgRecordRepository>>,
    pub pay_service: Arc<PayService<PgPayRepository, PgRecordRepository>>,
}

impl AppState {
    /// Wires repositories and services on top of a shared pool.
    pub fn new(pool: Arc<PgPool>, signer: TokenSigner) -> Self {
        let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
        let patient_repo = Arc::new(PgPatientRepository::new(pool.clone()));
        let record_repo = Arc::new(PgRecordRepository::new(pool.clone()));
        let obstetric_repo = Arc::new(PgObstetricRepository::new(pool.clone()));
        let pay_repo = Arc::new(PgPayRepository::new(pool.clone()));

        Self {
            db: pool,
            auth_service: Arc::new(AuthService::new(user_repo.clone(), signer)),
            user_service: Arc::new(UserService::new(user_repo)),
            patient_service: Arc::new(PatientService::new(patient_repo.clone())),
            record_service: Arc::new(RecordService::new(record_repo.clone(), patient_repo)),
            obstetric_service: Arc::new(ObstetricService::new(
                obstetric_repo,
                record_repo.clone(),
            )),
            pay_service: Arc::new(PayService::new(pay_repo, record_repo)),
        }
    }
}

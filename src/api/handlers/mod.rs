//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod auth;
pub mod health;
pub mod obstetric;
pub mod patients;
pub mod pays;
pub mod records;
pub mod users;

pub use auth::login_handler;
pub use health::health_handler;
pub use obstetric::{
    create_obstetric_handler, delete_obstetric_handler, get_obstetric_handler,
    obstetric_by_record_handler, obstetric_list_handler, update_obstetric_handler,
};
pub use patients::{
    create_patient_handler, delete_patient_handler, get_patient_handler, patient_list_handler,
    update_patient_handler,
};
pub use pays::{
    create_pay_handler, delete_pay_handler, get_pay_handler, pay_list_handler,
    pays_by_record_handler, update_pay_handler,
};
pub use records::{
    create_record_handler, delete_record_handler, get_record_handler, record_list_handler,
    records_by_patient_handler, update_record_handler,
};
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, update_user_handler,
    user_list_handler,
};

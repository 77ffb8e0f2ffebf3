//! API route configuration.

use crate::api::handlers::{
    create_obstetric_handler, create_patient_handler, create_pay_handler, create_record_handler,
    create_user_handler, delete_obstetric_handler, delete_patient_handler, delete_pay_handler,
    delete_record_handler, delete_user_handler, get_obstetric_handler, get_patient_handler,
    get_pay_handler, get_record_handler, get_user_handler, health_handler, login_handler,
    obstetric_by_record_handler, obstetric_list_handler, patient_list_handler, pay_list_handler,
    pays_by_record_handler, record_list_handler, records_by_patient_handler,
    update_obstetric_handler, update_patient_handler, update_pay_handler, update_record_handler,
    update_user_handler, user_list_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// CRUD routes, guarded by bearer authentication when it is enabled.
///
/// `POST` on an item path creates a child of the row named by the id:
/// `POST /record/{id_patient}` creates a record for that patient,
/// `POST /record/obstetric/{id_record}` and `POST /pay/{id_record}` attach
/// to a clinical record. Every other verb on an item path addresses the row
/// itself.
///
/// # Endpoints
///
/// - `GET    /users`, `/user`                     - List users
/// - `POST   /users`, `/user`                     - Create a user
/// - `GET|PUT|DELETE /user/{id}`                  - Read, replace, delete a user
/// - `GET    /patients`, `/patient`               - List patients
/// - `POST   /patient`                            - Create a patient
/// - `GET|PUT|DELETE /patient/{id}`               - Read, replace, delete a patient
/// - `GET    /records`                            - List records
/// - `GET    /record/patient/{id_patient}`        - Records of a patient
/// - `POST   /record/{id_patient}`                - Create a record
/// - `GET|PUT|DELETE /record/{id}`                - Read, replace, delete a record
/// - `GET    /records/obstetric`                  - List obstetric records
/// - `GET    /record/obstetric/record/{id_record}`- Obstetric records of a record
/// - `POST   /record/obstetric/{id_record}`       - Create an obstetric record
/// - `GET|PUT|DELETE /record/obstetric/{id}`      - Read, replace, delete one
/// - `GET    /pays`                               - List payments
/// - `GET    /pay/record/{id_record}`             - Payments of a record
/// - `POST   /pay/{id_record}`                    - Create a payment
/// - `GET|PUT|DELETE /pay/{id}`                   - Read, replace, delete a payment
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(user_list_handler).post(create_user_handler),
        )
        .route("/user", get(user_list_handler).post(create_user_handler))
        .route(
            "/user/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .route("/patients", get(patient_list_handler))
        .route(
            "/patient",
            get(patient_list_handler).post(create_patient_handler),
        )
        .route(
            "/patient/{id}",
            get(get_patient_handler)
                .put(update_patient_handler)
                .delete(delete_patient_handler),
        )
        .route("/records", get(record_list_handler))
        .route("/record/patient/{id_patient}", get(records_by_patient_handler))
        .route(
            "/record/{id}",
            get(get_record_handler)
                .post(create_record_handler)
                .put(update_record_handler)
                .delete(delete_record_handler),
        )
        .route("/records/obstetric", get(obstetric_list_handler))
        .route(
            "/record/obstetric/record/{id_record}",
            get(obstetric_by_record_handler),
        )
        .route(
            "/record/obstetric/{id}",
            get(get_obstetric_handler)
                .post(create_obstetric_handler)
                .put(update_obstetric_handler)
                .delete(delete_obstetric_handler),
        )
        .route("/pays", get(pay_list_handler))
        .route("/pay/record/{id_record}", get(pays_by_record_handler))
        .route(
            "/pay/{id}",
            get(get_pay_handler)
                .post(create_pay_handler)
                .put(update_pay_handler)
                .delete(delete_pay_handler),
        )
}

/// Routes that never require a token.
///
/// - `POST /login`  - Exchange credentials for a bearer token
/// - `GET  /health` - Database connectivity check
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/health", get(health_handler))
}

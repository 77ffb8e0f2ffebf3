#![allow(dead_code)]

use axum::{Router, middleware};
use axum_test::TestServer;
use medical_records::api::middleware::auth;
use medical_records::api::routes::{protected_routes, public_routes};
use medical_records::state::AppState;
use medical_records::utils::jwt::TokenSigner;
use medical_records::utils::password::hash_password_blocking;
use serde_json::{Value, json};
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), TokenSigner::new(TEST_JWT_SECRET, 900))
}

/// Full API surface without path normalization, optionally behind bearer auth.
pub fn make_app(pool: PgPool, auth_required: bool) -> Router {
    let state = create_test_state(pool);

    let mut protected = protected_routes();
    if auth_required {
        protected =
            protected.route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
    }

    Router::new()
        .merge(protected)
        .merge(public_routes())
        .with_state(state)
}

pub fn make_server(pool: PgPool) -> TestServer {
    TestServer::new(make_app(pool, false)).unwrap()
}

pub async fn create_test_user(pool: &PgPool, username: &str, password: &str) -> i64 {
    let hash = hash_password_blocking(password).unwrap();

    sqlx::query_scalar("INSERT INTO users (username, password) VALUES ($1, $2) RETURNING id")
        .bind(username)
        .bind(hash)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn deactivate_user(pool: &PgPool, id: i64) {
    sqlx::query("UPDATE users SET is_active = FALSE WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_patient(pool: &PgPool, dni: &str) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO patients
            (name, last_name, dni, parish, city, mun, date, gender, number, ant_fam, ant_per)
        VALUES ('Ana', 'Pérez', $1, 'Catedral', 'Mérida', 'Libertador', '1990-05-17', 'F',
                '04141234567', '', '')
        RETURNING id
        "#,
    )
    .bind(dni)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_record(pool: &PgPool, id_patient: i64) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO records
            (diagnosis, recommendations, treatment, date, diagnosis_diff, diagnosis_eco,
             exams, medications, symptoms, phy_exa, signs, type_pat, observations, id_patient)
        VALUES ('Migraine', 'Rest', 'Ibuprofen', '2024-03-01', '', '', '', '', 'Headache',
                '', '', 'general', '', $1)
        RETURNING id
        "#,
    )
    .bind(id_patient)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_obstetric(pool: &PgPool, id_record: i64) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO records_obst (num_births, num_abort, menst_date, type_preg, id_record)
        VALUES (1, 0, '2024-01-10', 'simple', $1)
        RETURNING id
        "#,
    )
    .bind(id_record)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_pay(pool: &PgPool, id_record: i64) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO pays (pesos, cash, pay_mov, biopago, point, id_record)
        VALUES (100, 20, 1.5, 0, 3.25, $1)
        RETURNING id
        "#,
    )
    .bind(id_record)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn patient_body(dni: &str) -> Value {
    json!({
        "name": "Ana",
        "last_name": "Pérez",
        "dni": dni,
        "parish": "Catedral",
        "city": "Mérida",
        "mun": "Libertador",
        "date": "1990-05-17",
        "gender": "F",
        "number": "04141234567",
        "ant_fam": "Diabetes",
        "ant_per": "None"
    })
}

pub fn record_body() -> Value {
    json!({
        "diagnosis": "Migraine",
        "recommendations": "Rest",
        "treatment": "Ibuprofen",
        "date": "2024-03-01",
        "diagnosis_diff": "Tension headache",
        "diagnosis_eco": "",
        "exams": "CBC",
        "medications": "Ibuprofen 400mg",
        "symptoms": "Headache",
        "phy_exa": "Normal",
        "signs": "",
        "type_pat": "general",
        "observations": ""
    })
}

pub fn obstetric_body() -> Value {
    json!({
        "num_births": 2,
        "num_abort": 1,
        "menst_date": "2024-01-10",
        "type_preg": "simple"
    })
}

pub fn pay_body() -> Value {
    json!({
        "pesos": 100,
        "cash": 20,
        "pay_mov": 1.5,
        "biopago": 0.0,
        "point": 3.25
    })
}

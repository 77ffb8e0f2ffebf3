mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

// ─── CREATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_then_get_patient(pool: PgPool) {
    let server = common::make_server(pool);
    let body = common::patient_body("V-12345678");

    let response = server.post("/patient").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<serde_json::Value>();
    let id = created["id"].as_i64().unwrap();

    let fetched = server
        .get(&format!("/patient/{id}"))
        .await
        .json::<serde_json::Value>();

    assert_eq!(fetched, created);
    for (key, value) in body.as_object().unwrap() {
        assert_eq!(&fetched[key], value, "field {key}");
    }
}

#[sqlx::test]
async fn test_create_patient_duplicate_dni(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let body = common::patient_body("V-1");

    server
        .post("/patient")
        .json(&body)
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.post("/patient").json(&body).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(response.json::<serde_json::Value>()["error"], "conflict");
    assert_eq!(common::count_rows(&pool, "patients").await, 1);
}

#[sqlx::test]
async fn test_create_patient_empty_date(pool: PgPool) {
    let server = common::make_server(pool);
    let mut body = common::patient_body("V-2");
    body["date"] = json!("");

    let response = server.post("/patient").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.json::<serde_json::Value>()["date"].is_null());
}

#[sqlx::test]
async fn test_create_patient_ignores_country(pool: PgPool) {
    let server = common::make_server(pool);
    let mut body = common::patient_body("V-3");
    body["country"] = json!("Venezuela");

    let response = server.post("/patient").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    assert!(response.json::<serde_json::Value>().get("country").is_none());
}

#[sqlx::test]
async fn test_create_patient_missing_field(pool: PgPool) {
    let server = common::make_server(pool.clone());
    let mut body = common::patient_body("V-4");
    body.as_object_mut().unwrap().remove("name");

    let response = server.post("/patient").json(&body).await;

    response.assert_status_bad_request();
    assert_eq!(common::count_rows(&pool, "patients").await, 0);
}

#[sqlx::test]
async fn test_create_patient_dni_too_long(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/patient")
        .json(&common::patient_body("V-1234567890123456"))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "validation_error");
    assert!(json["details"]["dni"].is_array());
}

#[sqlx::test]
async fn test_malformed_json(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server
        .post("/patient")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "validation_error"
    );
}

// ─── READ ────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_patients(pool: PgPool) {
    common::create_test_patient(&pool, "V-1").await;
    common::create_test_patient(&pool, "V-2").await;
    let server = common::make_server(pool);

    for path in ["/patients", "/patient"] {
        let response = server.get(path).await;
        response.assert_status_ok();
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["items"].as_array().unwrap().len(), 2);
    }
}

#[sqlx::test]
async fn test_list_patients_empty(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/patients").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!({ "items": [] }));
}

#[sqlx::test]
async fn test_get_missing_patient(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/patient/42").await;

    response.assert_status_not_found();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "not_found");
    assert_eq!(json["details"]["id"], 42);
}

// ─── UPDATE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_patient(pool: PgPool) {
    let id = common::create_test_patient(&pool, "V-1").await;
    let server = common::make_server(pool);

    let mut body = common::patient_body("V-1");
    body["city"] = json!("Caracas");

    let response = server.put(&format!("/patient/{id}")).json(&body).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["city"], "Caracas");
    assert_eq!(json["id"], id);
}

#[sqlx::test]
async fn test_update_patient_to_taken_dni(pool: PgPool) {
    common::create_test_patient(&pool, "V-1").await;
    let id = common::create_test_patient(&pool, "V-2").await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/patient/{id}"))
        .json(&common::patient_body("V-1"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_update_missing_patient(pool: PgPool) {
    let server = common::make_server(pool);

    server
        .put("/patient/99")
        .json(&common::patient_body("V-1"))
        .await
        .assert_status_not_found();
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_patient(pool: PgPool) {
    let id = common::create_test_patient(&pool, "V-1").await;
    let server = common::make_server(pool.clone());

    server
        .delete(&format!("/patient/{id}"))
        .await
        .assert_status_ok();

    assert_eq!(common::count_rows(&pool, "patients").await, 0);
}

#[sqlx::test]
async fn test_delete_missing_patient(pool: PgPool) {
    common::create_test_patient(&pool, "V-1").await;
    let server = common::make_server(pool.clone());

    server.delete("/patient/999").await.assert_status_not_found();

    assert_eq!(common::count_rows(&pool, "patients").await, 1);
}

#[sqlx::test]
async fn test_delete_patient_with_records(pool: PgPool) {
    let id = common::create_test_patient(&pool, "V-1").await;
    common::create_test_record(&pool, id).await;
    let server = common::make_server(pool.clone());

    let response = server.delete(&format!("/patient/{id}")).await;

    response.assert_status(StatusCode::CONFLICT);
    assert_eq!(common::count_rows(&pool, "patients").await, 1);
}

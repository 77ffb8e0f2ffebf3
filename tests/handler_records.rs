mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_then_list_by_patient(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    let other = common::create_test_patient(&pool, "V-2").await;
    common::create_test_record(&pool, other).await;
    let server = common::make_server(pool);

    let response = server
        .post(&format!("/record/{id_patient}"))
        .json(&common::record_body())
        .await;

    response.assert_status(StatusCode::CREATED);
    let created = response.json::<serde_json::Value>();
    assert_eq!(created["id_patient"], id_patient);

    let listed = server
        .get(&format!("/record/patient/{id_patient}"))
        .await
        .json::<serde_json::Value>();

    assert_eq!(listed, json!({ "items": [created] }));
}

#[sqlx::test]
async fn test_create_record_accepts_legacy_symptoms_key(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    let server = common::make_server(pool);

    let mut body = common::record_body();
    let symptoms = body.as_object_mut().unwrap().remove("symptoms").unwrap();
    body["symtomps"] = symptoms;

    let response = server
        .post(&format!("/record/{id_patient}"))
        .json(&body)
        .await;

    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["symptoms"], "Headache");
}

#[sqlx::test]
async fn test_create_record_for_missing_patient(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server.post("/record/42").json(&common::record_body()).await;

    response.assert_status_not_found();
    assert_eq!(common::count_rows(&pool, "records").await, 0);
}

#[sqlx::test]
async fn test_create_record_missing_date(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    let server = common::make_server(pool.clone());

    let mut body = common::record_body();
    body.as_object_mut().unwrap().remove("date");

    let response = server
        .post(&format!("/record/{id_patient}"))
        .json(&body)
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_rows(&pool, "records").await, 0);
}

#[sqlx::test]
async fn test_list_by_patient_without_records(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    let server = common::make_server(pool);

    server
        .get(&format!("/record/patient/{id_patient}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_list_records(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    common::create_test_record(&pool, id_patient).await;
    common::create_test_record(&pool, id_patient).await;
    let server = common::make_server(pool);

    let response = server.get("/records").await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>()["items"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[sqlx::test]
async fn test_get_record(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    let id = common::create_test_record(&pool, id_patient).await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/record/{id}")).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id"], id);
    assert_eq!(json["diagnosis"], "Migraine");
    assert_eq!(json["date"], "2024-03-01");
}

#[sqlx::test]
async fn test_update_record(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    let id = common::create_test_record(&pool, id_patient).await;
    let server = common::make_server(pool);

    let mut body = common::record_body();
    body["diagnosis"] = json!("Cluster headache");

    let response = server.put(&format!("/record/{id}")).json(&body).await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["diagnosis"], "Cluster headache");
    assert_eq!(json["id_patient"], id_patient);
}

#[sqlx::test]
async fn test_update_missing_record(pool: PgPool) {
    let server = common::make_server(pool);

    server
        .put("/record/7")
        .json(&common::record_body())
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_record(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    let id = common::create_test_record(&pool, id_patient).await;
    let server = common::make_server(pool.clone());

    server
        .delete(&format!("/record/{id}"))
        .await
        .assert_status_ok();

    assert_eq!(common::count_rows(&pool, "records").await, 0);
}

#[sqlx::test]
async fn test_delete_missing_record(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    common::create_test_record(&pool, id_patient).await;
    let server = common::make_server(pool.clone());

    server.delete("/record/999").await.assert_status_not_found();

    assert_eq!(common::count_rows(&pool, "records").await, 1);
}

#[sqlx::test]
async fn test_delete_record_with_obstetric_children(pool: PgPool) {
    let id_patient = common::create_test_patient(&pool, "V-1").await;
    let id = common::create_test_record(&pool, id_patient).await;
    common::create_test_obstetric(&pool, id).await;
    let server = common::make_server(pool.clone());

    server
        .delete(&format!("/record/{id}"))
        .await
        .assert_status(StatusCode::CONFLICT);

    assert_eq!(common::count_rows(&pool, "records").await, 1);
}

mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

async fn setup_record(pool: &PgPool, dni: &str) -> i64 {
    let id_patient = common::create_test_patient(pool, dni).await;
    common::create_test_record(pool, id_patient).await
}

#[sqlx::test]
async fn test_create_pay(pool: PgPool) {
    let id_record = setup_record(&pool, "V-1").await;
    let server = common::make_server(pool);

    let response = server
        .post(&format!("/pay/{id_record}"))
        .json(&common::pay_body())
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["id_record"], id_record);
    assert_eq!(json["cash"], 20);
    assert_eq!(json["point"], 3.25);
}

#[sqlx::test]
async fn test_create_pay_for_missing_record(pool: PgPool) {
    let server = common::make_server(pool.clone());

    server
        .post("/pay/31")
        .json(&common::pay_body())
        .await
        .assert_status_not_found();

    assert_eq!(common::count_rows(&pool, "pays").await, 0);
}

#[sqlx::test]
async fn test_update_pay_partial_body_rejected(pool: PgPool) {
    let id_record = setup_record(&pool, "V-1").await;
    let id = common::create_test_pay(&pool, id_record).await;
    let server = common::make_server(pool.clone());

    let response = server
        .put(&format!("/pay/{id}"))
        .json(&json!({ "cash": 40 }))
        .await;

    response.assert_status_bad_request();

    let (pesos, cash): (i32, i32) = sqlx::query_as("SELECT pesos, cash FROM pays WHERE id = $1")
        .bind(id)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(pesos, 100);
    assert_eq!(cash, 20);
}

#[sqlx::test]
async fn test_update_pay_full_replace(pool: PgPool) {
    let id_record = setup_record(&pool, "V-1").await;
    let id = common::create_test_pay(&pool, id_record).await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/pay/{id}"))
        .json(&json!({
            "pesos": 0,
            "cash": 40,
            "pay_mov": 0.0,
            "biopago": 12.5,
            "point": 0.0
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["cash"], 40);
    assert_eq!(json["pesos"], 0);
    assert_eq!(json["biopago"], 12.5);
}

#[sqlx::test]
async fn test_list_pays_by_record(pool: PgPool) {
    let first = setup_record(&pool, "V-1").await;
    let second = setup_record(&pool, "V-2").await;
    common::create_test_pay(&pool, first).await;
    common::create_test_pay(&pool, first).await;
    common::create_test_pay(&pool, second).await;
    let server = common::make_server(pool);

    let by_record = server.get(&format!("/pay/record/{first}")).await;
    by_record.assert_status_ok();
    let items = by_record.json::<serde_json::Value>()["items"]
        .as_array()
        .unwrap()
        .clone();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|p| p["id_record"] == first));

    let all = server.get("/pays").await;
    all.assert_status_ok();
    assert_eq!(
        all.json::<serde_json::Value>()["items"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}

#[sqlx::test]
async fn test_list_pays_by_record_empty(pool: PgPool) {
    let id_record = setup_record(&pool, "V-1").await;
    let server = common::make_server(pool);

    server
        .get(&format!("/pay/record/{id_record}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_get_pay(pool: PgPool) {
    let id_record = setup_record(&pool, "V-1").await;
    let id = common::create_test_pay(&pool, id_record).await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/pay/{id}")).await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["pesos"], 100);
}

#[sqlx::test]
async fn test_delete_pay(pool: PgPool) {
    let id_record = setup_record(&pool, "V-1").await;
    let id = common::create_test_pay(&pool, id_record).await;
    let server = common::make_server(pool.clone());

    server.delete(&format!("/pay/{id}")).await.assert_status_ok();
    server
        .delete(&format!("/pay/{id}"))
        .await
        .assert_status_not_found();

    assert_eq!(common::count_rows(&pool, "pays").await, 0);
}

#[sqlx::test]
async fn test_get_missing_pay(pool: PgPool) {
    let id_record = setup_record(&pool, "V-1").await;
    let id = common::create_test_pay(&pool, id_record).await;
    let server = common::make_server(pool.clone());

    let response = server.get(&format!("/pay/{}", id + 100)).await;

    response.assert_status_not_found();
    assert_eq!(response.json::<serde_json::Value>()["error"], "not_found");
    assert_eq!(common::count_rows(&pool, "pays").await, 1);
}

#[sqlx::test]
async fn test_update_missing_pay(pool: PgPool) {
    let id_record = setup_record(&pool, "V-1").await;
    let id = common::create_test_pay(&pool, id_record).await;
    let server = common::make_server(pool.clone());

    server
        .put(&format!("/pay/{}", id + 100))
        .json(&common::pay_body())
        .await
        .assert_status_not_found();

    assert_eq!(common::count_rows(&pool, "pays").await, 1);
}

mod common;

use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_create_user(pool: PgPool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/users")
        .json(&json!({ "username": "alice", "password": "pw" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["username"], "alice");
    assert!(json["id"].as_i64().unwrap() > 0);
    assert!(json.get("password").is_none());

    let stored: String = sqlx::query_scalar("SELECT password FROM users WHERE username = 'alice'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert!(stored.starts_with("$argon2"));
}

#[sqlx::test]
async fn test_create_user_alias_route(pool: PgPool) {
    let server = common::make_server(pool);

    server
        .post("/user")
        .json(&json!({ "username": "bob", "password": "pw" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);
}

#[sqlx::test]
async fn test_create_duplicate_user(pool: PgPool) {
    common::create_test_user(&pool, "alice", "pw").await;
    let server = common::make_server(pool.clone());

    let response = server
        .post("/users")
        .json(&json!({ "username": "alice", "password": "other" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(common::count_rows(&pool, "users").await, 1);
}

#[sqlx::test]
async fn test_list_users(pool: PgPool) {
    common::create_test_user(&pool, "alice", "pw").await;
    common::create_test_user(&pool, "bob", "pw").await;
    let server = common::make_server(pool);

    let response = server.get("/users").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    let items = json["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|u| u.get("password").is_none()));
}

#[sqlx::test]
async fn test_get_user(pool: PgPool) {
    let id = common::create_test_user(&pool, "alice", "pw").await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/user/{id}")).await;

    response.assert_status_ok();
    assert_eq!(
        response.json::<serde_json::Value>(),
        json!({ "id": id, "username": "alice" })
    );
}

#[sqlx::test]
async fn test_update_user_keeps_password_when_omitted(pool: PgPool) {
    let id = common::create_test_user(&pool, "alice", "pw").await;
    let server = common::make_server(pool);

    server
        .put(&format!("/user/{id}"))
        .json(&json!({ "username": "alicia" }))
        .await
        .assert_status_ok();

    server
        .post("/login")
        .json(&json!({ "user": "alicia", "password": "pw" }))
        .await
        .assert_status_ok();
}

#[sqlx::test]
async fn test_update_user_to_taken_name(pool: PgPool) {
    common::create_test_user(&pool, "alice", "pw").await;
    let id = common::create_test_user(&pool, "bob", "pw").await;
    let server = common::make_server(pool);

    let response = server
        .put(&format!("/user/{id}"))
        .json(&json!({ "username": "alice" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[sqlx::test]
async fn test_delete_user(pool: PgPool) {
    let id = common::create_test_user(&pool, "alice", "pw").await;
    let server = common::make_server(pool.clone());

    let response = server.delete(&format!("/user/{id}")).await;

    response.assert_status_ok();
    assert!(response.json::<serde_json::Value>()["message"].is_string());
    assert_eq!(common::count_rows(&pool, "users").await, 0);
}

#[sqlx::test]
async fn test_delete_missing_user(pool: PgPool) {
    common::create_test_user(&pool, "alice", "pw").await;
    let server = common::make_server(pool.clone());

    let response = server.delete("/user/999").await;

    response.assert_status_not_found();
    assert_eq!(common::count_rows(&pool, "users").await, 1);
}

#[sqlx::test]
async fn test_non_numeric_user_id(pool: PgPool) {
    let server = common::make_server(pool);

    let response = server.get("/user/abc").await;

    response.assert_status_bad_request();
    assert_eq!(
        response.json::<serde_json::Value>()["error"],
        "validation_error"
    );
}

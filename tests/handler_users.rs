mod common;

use axum::{
    Router,
    routing::{get, put},
};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;
use user_registry::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};

/// Build a test server with the user routes, without the access gate.
///
/// The gate is covered separately in `tests/gate_auth.rs`; here the handlers
/// are exercised directly, matching how they sit behind the gate in
/// production.
fn make_server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/users", get(list_users_handler).post(create_user_handler))
        .route(
            "/api/users/{id}",
            put(update_user_handler)
                .get(get_user_handler)
                .delete(delete_user_handler),
        )
        .with_state(state);
    TestServer::new(app).unwrap()
}

// ─── POST (create) ───────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_user(pool: PgPool) {
    let server = make_server(pool);

    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Ada", "email": "ada@x.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert!(body["id"].is_i64());
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@x.com");
}

#[sqlx::test]
async fn test_create_then_get_roundtrip(pool: PgPool) {
    let server = make_server(pool);

    let created = server
        .post("/api/users")
        .json(&json!({ "name": "Grace", "email": "grace@x.com" }))
        .await
        .json::<serde_json::Value>();

    let id = created["id"].as_i64().unwrap();

    let fetched = server
        .get(&format!("/api/users/{id}"))
        .await
        .json::<serde_json::Value>();

    assert_eq!(fetched, created);
}

#[sqlx::test]
async fn test_create_user_missing_field(pool: PgPool) {
    let server = make_server(pool);

    // Body must carry both name and email; the framework rejects the rest.
    let response = server
        .post("/api/users")
        .json(&json!({ "name": "Ada" }))
        .await;

    response.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

// ─── GET ─────────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_get_user_not_found(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/users/4242").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[sqlx::test]
async fn test_list_users_empty(pool: PgPool) {
    let server = make_server(pool);

    let response = server.get("/api/users").await;

    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>(), json!([]));
}

#[sqlx::test]
async fn test_list_users_tracks_created_minus_deleted(pool: PgPool) {
    let a = common::create_test_user(&pool, "A", "a@x.com").await;
    common::create_test_user(&pool, "B", "b@x.com").await;
    common::create_test_user(&pool, "C", "c@x.com").await;

    let server = make_server(pool);

    let listed = server.get("/api/users").await.json::<serde_json::Value>();
    assert_eq!(listed.as_array().unwrap().len(), 3);

    server
        .delete(&format!("/api/users/{a}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    let listed = server.get("/api/users").await.json::<serde_json::Value>();
    assert_eq!(listed.as_array().unwrap().len(), 2);
}

// ─── PUT (update) ────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_user_replaces_fields(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ada", "ada@x.com").await;

    let server = make_server(pool);
    let response = server
        .put(&format!("/api/users/{id}"))
        .json(&json!({ "name": "Ada L", "email": "lovelace@x.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], id);
    assert_eq!(body["name"], "Ada L");
    assert_eq!(body["email"], "lovelace@x.com");
}

#[sqlx::test]
async fn test_update_missing_id_creates_row(pool: PgPool) {
    let server = make_server(pool);

    // The store upserts, so updating an id that does not exist plants a new
    // row there instead of returning 404.
    let response = server
        .put("/api/users/4242")
        .json(&json!({ "name": "Ghost", "email": "ghost@x.com" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["id"], 4242);

    let fetched = server.get("/api/users/4242").await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<serde_json::Value>()["name"], "Ghost");
}

// ─── DELETE ──────────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_user(pool: PgPool) {
    let id = common::create_test_user(&pool, "Ada", "ada@x.com").await;

    let server = make_server(pool);

    server
        .delete(&format!("/api/users/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/users/{id}"))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_user_idempotent(pool: PgPool) {
    let server = make_server(pool);

    // No such row; delete succeeds anyway.
    server
        .delete("/api/users/4242")
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);
}

// ─── Full lifecycle ──────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_user_lifecycle(pool: PgPool) {
    let server = make_server(pool);

    let created = server
        .post("/api/users")
        .json(&json!({ "name": "Ada", "email": "ada@x.com" }))
        .await
        .json::<serde_json::Value>();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Ada");
    assert_eq!(created["email"], "ada@x.com");

    let updated = server
        .put(&format!("/api/users/{id}"))
        .json(&json!({ "name": "Ada L", "email": "ada@x.com" }))
        .await
        .json::<serde_json::Value>();
    assert_eq!(updated["id"], id);
    assert_eq!(updated["name"], "Ada L");

    server
        .get(&format!("/api/users/{}", id + 1))
        .await
        .assert_status_not_found();

    server
        .delete(&format!("/api/users/{id}"))
        .await
        .assert_status(axum::http::StatusCode::NO_CONTENT);

    server
        .get(&format!("/api/users/{id}"))
        .await
        .assert_status_not_found();
}

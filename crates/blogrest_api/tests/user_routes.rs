mod common;

use axum::http::StatusCode;
use blogrest_core::{Argon2Hasher, CredentialHasher, SqliteUserRepository, UserRepository};
use common::test_app;
use serde_json::json;

#[tokio::test]
async fn test_create_user_hides_password_and_stores_digest() {
    let app = test_app();

    let (status, created) = app
        .post(
            "/users",
            json!({ "username": "u", "email": "e@x", "password": "pw" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({ "id": 1, "username": "u", "email": "e@x", "fullname": null, "disabled": true })
    );
    assert!(created.get("password").is_none());
    assert!(created.get("password_hash").is_none());

    let conn = app.database.acquire().unwrap();
    let stored = SqliteUserRepository::new(&conn).get(1).unwrap().unwrap();
    assert_ne!(stored.password_hash, "pw");
    let hasher = Argon2Hasher::new();
    assert!(hasher.verify("pw", &stored.password_hash).unwrap());
    assert!(!hasher.verify("other", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn test_create_user_explicit_fields() {
    let app = test_app();

    let (status, created) = app
        .post(
            "/users",
            json!({
                "username": "ada",
                "email": "ada@example.com",
                "fullname": "Ada L",
                "password": "secret",
                "disabled": false
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["fullname"], "Ada L");
    assert_eq!(created["disabled"], false);
}

#[tokio::test]
async fn test_create_user_without_password_is_422() {
    let app = test_app();

    let (status, body) = app
        .post("/users", json!({ "username": "u", "email": "e@x" }))
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "password");
    assert_eq!(body["code"], 422);
}

#[tokio::test]
async fn test_patch_user_merges_and_rehashes_password() {
    let app = test_app();
    app.post(
        "/users",
        json!({ "username": "u", "email": "e@x", "password": "pw" }),
    )
    .await;

    let (status, patched) = app
        .patch("/users/1", json!({ "fullname": "Full Name" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        patched,
        json!({ "id": 1, "username": "u", "email": "e@x", "fullname": "Full Name", "disabled": true })
    );

    let (status, patched) = app.patch("/users/1", json!({ "password": "new" })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(patched.get("password").is_none());

    let conn = app.database.acquire().unwrap();
    let stored = SqliteUserRepository::new(&conn).get(1).unwrap().unwrap();
    let hasher = Argon2Hasher::new();
    assert!(hasher.verify("new", &stored.password_hash).unwrap());
    assert!(!hasher.verify("pw", &stored.password_hash).unwrap());
}

#[tokio::test]
async fn test_user_not_found_paths() {
    let app = test_app();

    let (status, body) = app.get("/users/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User with id 7 not found");

    let (status, _) = app.patch("/users/7", json!({ "email": "x@y" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/users/7").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_then_get_is_404() {
    let app = test_app();
    app.post(
        "/users",
        json!({ "username": "u", "email": "e@x", "password": "pw" }),
    )
    .await;

    let (status, _) = app.delete("/users/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get("/users/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_is_ordered_public_projection() {
    let app = test_app();
    for name in ["first", "second"] {
        app.post(
            "/users",
            json!({ "username": name, "email": format!("{name}@x"), "password": "pw" }),
        )
        .await;
    }

    let (status, list) = app.get("/users?limit=10").await;

    assert_eq!(status, StatusCode::OK);
    let users = list.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["username"], "first");
    assert_eq!(users[1]["username"], "second");
    assert!(users.iter().all(|user| user.get("password_hash").is_none()));
}

#[tokio::test]
async fn test_patch_null_username_is_422_and_record_untouched() {
    let app = test_app();
    app.post(
        "/users",
        json!({ "username": "u", "email": "e@x", "password": "pw" }),
    )
    .await;

    let (status, body) = app.patch("/users/1", json!({ "username": null })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "username");

    let (_, fetched) = app.get("/users/1").await;
    assert_eq!(fetched["username"], "u");
}

#[tokio::test]
async fn test_list_users_limit_above_cap_is_422() {
    let app = test_app();

    let (status, body) = app.get("/users?limit=101").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "limit");

    let (status, _) = app.get("/users?limit=100").await;
    assert_eq!(status, StatusCode::OK);
}

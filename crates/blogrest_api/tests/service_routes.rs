mod common;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use blogrest_api::{build_router, AppState, ServerError};
use blogrest_core::{Argon2Hasher, Database};
use common::{test_app, test_app_with_origins};
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_openapi_document_tags_both_resources() {
    let app = test_app();

    let (status, doc) = app.get("/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    let tags: Vec<&str> = doc["tags"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|tag| tag["name"].as_str())
        .collect();
    assert!(tags.contains(&"blogs"));
    assert!(tags.contains(&"users"));

    assert_eq!(doc["paths"]["/blogs"]["post"]["tags"][0], "blogs");
    assert_eq!(doc["paths"]["/users/{id}"]["patch"]["tags"][0], "users");
}

#[tokio::test]
async fn test_configured_origin_gets_cors_header() {
    let app = test_app_with_origins(&["http://allowed.example".to_string()]);
    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://allowed.example")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "http://allowed.example"
    );
}

#[test]
fn test_unparsable_origin_fails_router_build() {
    let dir = tempfile::tempdir().unwrap();
    let database = Database::open(dir.path().join("api.db")).unwrap();
    let state = AppState::new(database, Arc::new(Argon2Hasher::new()));

    let err = build_router(state, &["bad\norigin".to_string()]).err().unwrap();

    assert!(matches!(err, ServerError::InvalidCorsOrigin(ref origin) if origin == "bad\norigin"));
}

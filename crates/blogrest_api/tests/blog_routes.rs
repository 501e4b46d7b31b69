mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::test_app;
use serde_json::json;

#[tokio::test]
async fn test_health_reports_version() {
    let app = test_app();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], blogrest_core::core_version());
}

#[tokio::test]
async fn test_blog_lifecycle_scenario() {
    let app = test_app();

    let (status, created) = app
        .post(
            "/blogs",
            json!({ "title": "A", "description": "d", "published": true }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        created,
        json!({ "id": 1, "title": "A", "description": "d", "published": true })
    );

    let (status, patched) = app.patch("/blogs/1", json!({ "description": "d2" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        patched,
        json!({ "id": 1, "title": "A", "description": "d2", "published": true })
    );

    let (status, body) = app.delete("/blogs/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());

    let (status, body) = app.get("/blogs/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Blog with id 1 not found");
    assert_eq!(body["code"], 404);
}

#[tokio::test]
async fn test_create_then_get_returns_same_fields() {
    let app = test_app();

    let (_, created) = app
        .post("/blogs", json!({ "title": "T", "description": "D" }))
        .await;
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = app.get(&format!("/blogs/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        fetched,
        json!({ "id": id, "title": "T", "description": "D", "published": null })
    );
}

#[tokio::test]
async fn test_create_missing_field_is_422_naming_field() {
    let app = test_app();

    let (status, body) = app.post("/blogs", json!({ "title": "only" })).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "description");

    let (_, list) = app.get("/blogs").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_create_wrong_type_is_422() {
    let app = test_app();

    let (status, body) = app
        .post(
            "/blogs",
            json!({ "title": "A", "description": "d", "published": "yes" }),
        )
        .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "published");
}

#[tokio::test]
async fn test_malformed_json_body_is_422() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/blogs")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = app.send_request(request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "body");
}

#[tokio::test]
async fn test_patch_missing_blog_is_404() {
    let app = test_app();

    let (status, body) = app.patch("/blogs/99", json!({ "title": "x" })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Blog with id 99 not found");
}

#[tokio::test]
async fn test_patch_null_title_is_rejected_and_record_untouched() {
    let app = test_app();
    app.post("/blogs", json!({ "title": "A", "description": "d" }))
        .await;

    let (status, body) = app.patch("/blogs/1", json!({ "title": null })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "title");

    let (_, fetched) = app.get("/blogs/1").await;
    assert_eq!(fetched["title"], "A");
}

#[tokio::test]
async fn test_patch_explicit_null_clears_published() {
    let app = test_app();
    app.post(
        "/blogs",
        json!({ "title": "A", "description": "d", "published": false }),
    )
    .await;

    let (status, patched) = app.patch("/blogs/1", json!({ "published": null })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["published"], json!(null));
    assert_eq!(patched["description"], "d");
}

#[tokio::test]
async fn test_delete_missing_blog_is_404() {
    let app = test_app();

    let (status, _) = app.delete("/blogs/5").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_non_integer_id_is_422() {
    let app = test_app();

    let (status, body) = app.get("/blogs/abc").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "id");
}

#[tokio::test]
async fn test_list_pagination_bounds() {
    let app = test_app();
    for index in 0..3 {
        app.post(
            "/blogs",
            json!({ "title": format!("post {index}"), "description": "d" }),
        )
        .await;
    }

    let (status, all) = app.get("/blogs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 3);

    let (_, window) = app.get("/blogs?offset=1&limit=1").await;
    assert_eq!(window, json!([{ "id": 2, "title": "post 1", "description": "d", "published": null }]));

    let (status, _) = app.get("/blogs?limit=100").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = app.get("/blogs?limit=101").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "limit");

    let (status, body) = app.get("/blogs?offset=-1").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "offset");

    let (status, body) = app.get("/blogs?limit=many").await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "query");
}

#[tokio::test]
async fn test_list_never_exceeds_cap() {
    let app = test_app();
    {
        let conn = app.database.acquire().unwrap();
        for index in 0..120 {
            conn.execute(
                "INSERT INTO blog_posts (title, description) VALUES (?1, 'd');",
                [format!("post {index}")],
            )
            .unwrap();
        }
    }

    let (status, page) = app.get("/blogs?offset=0&limit=100").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.as_array().unwrap().len(), 100);
}

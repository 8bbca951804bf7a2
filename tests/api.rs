//! Black-box tests over the full router, backed by the in-memory store.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use posts_api::{app, states::AppState, store::MemoryStore};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_app() -> Router {
    app(AppState {
        store: Arc::new(MemoryStore::new()),
    })
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(value) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(value.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

fn sample_post() -> Value {
    json!({
        "title": "A",
        "content": "B",
        "description": "C",
        "dateCreation": "2024-01-01T00:00:00Z"
    })
}

fn sample_user() -> Value {
    json!({
        "nom": "Doe",
        "prenom": "Jane",
        "email": "jane@example.com",
        "address": "1 rue de la Paix",
        "password": "hunter2"
    })
}

#[tokio::test]
async fn create_post_echoes_fields_in_added_envelope() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/create", Some(sample_post())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Post Added");
    assert_eq!(body["post"]["title"], "A");
    assert_eq!(body["post"]["content"], "B");
    assert_eq!(body["post"]["description"], "C");
    assert_eq!(body["post"]["dateCreation"], "2024-01-01T00:00:00Z");
    assert!(body["post"]["id"].is_i64());
}

#[tokio::test]
async fn create_assigns_unique_ids() {
    let app = test_app();

    let (_, first) = send(&app, Method::POST, "/create", Some(sample_post())).await;
    let (_, second) = send(&app, Method::POST, "/create", Some(sample_post())).await;

    assert_ne!(first["post"]["id"], second["post"]["id"]);
}

#[tokio::test]
async fn listing_round_trips_created_posts() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, created) = send(&app, Method::POST, "/create", Some(sample_post())).await;

    let (status, listed) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    // the created record appears verbatim, no asserted order
    assert!(listed.contains(&created["post"]));
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let app = test_app();
    let (_, created) = send(&app, Method::POST, "/create", Some(sample_post())).await;
    let id = created["post"]["id"].as_i64().unwrap();

    // only `title` supplied: the other fields must become null, not
    // keep their previous values
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/update/{id}"),
        Some(json!({ "title": "A2" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Post Updated");
    assert_eq!(body["post"]["title"], "A2");
    assert_eq!(body["post"]["content"], Value::Null);
    assert_eq!(body["post"]["description"], Value::Null);
    assert_eq!(body["post"]["dateCreation"], Value::Null);

    let (_, listed) = send(&app, Method::GET, "/", None).await;
    assert!(listed.as_array().unwrap().contains(&body["post"]));
}

#[tokio::test]
async fn update_missing_post_returns_404() {
    let app = test_app();

    let (status, body) = send(&app, Method::PUT, "/update/999", Some(sample_post())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "Post not found" }));
}

#[tokio::test]
async fn delete_post_returns_former_record() {
    let app = test_app();
    let (_, created) = send(&app, Method::POST, "/create", Some(sample_post())).await;
    let id = created["post"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/delete/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Post Deleted");
    assert_eq!(body["post"], created["post"]);

    let (_, listed) = send(&app, Method::GET, "/", None).await;
    assert_eq!(listed, json!([]));
}

// Deleting a nonexistent post answers 200, not 404 — the user resource
// 404s in the same situation. The asymmetry is intentional legacy
// behavior; this test exists to notice if someone "fixes" it.
#[tokio::test]
async fn delete_missing_post_returns_200_without_post_key() {
    let app = test_app();

    let (status, body) = send(&app, Method::DELETE, "/delete/999", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "msg": "Post Deleted" }));
    assert!(body.get("post").is_none());
}

#[tokio::test]
async fn created_user_echoes_password() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/users/create", Some(sample_user())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "User Created");
    assert_eq!(body["user"]["nom"], "Doe");
    assert_eq!(body["user"]["prenom"], "Jane");
    assert_eq!(body["user"]["email"], "jane@example.com");
    assert_eq!(body["user"]["address"], "1 rue de la Paix");
    // plaintext round-trip, deliberately carried over (DESIGN.md)
    assert_eq!(body["user"]["password"], "hunter2");
}

#[tokio::test]
async fn listing_users_round_trips() {
    let app = test_app();
    let (_, created) = send(&app, Method::POST, "/users/create", Some(sample_user())).await;

    let (status, listed) = send(&app, Method::GET, "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(listed.as_array().unwrap().contains(&created["user"]));
}

#[tokio::test]
async fn update_user_overwrites_every_field() {
    let app = test_app();
    let (_, created) = send(&app, Method::POST, "/users/create", Some(sample_user())).await;
    let id = created["user"]["id"].as_i64().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/users/update/{id}"),
        Some(json!({ "nom": "Smith", "email": "smith@example.com" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "User Updated");
    assert_eq!(body["user"]["nom"], "Smith");
    assert_eq!(body["user"]["email"], "smith@example.com");
    assert_eq!(body["user"]["prenom"], Value::Null);
    assert_eq!(body["user"]["address"], Value::Null);
    assert_eq!(body["user"]["password"], Value::Null);
}

#[tokio::test]
async fn update_missing_user_returns_404() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::PUT,
        "/users/update/999",
        Some(sample_user()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "User not found" }));
}

#[tokio::test]
async fn delete_missing_user_returns_404() {
    let app = test_app();

    let (status, body) = send(&app, Method::DELETE, "/users/delete/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "msg": "User not found" }));
}

#[tokio::test]
async fn delete_user_returns_former_record() {
    let app = test_app();
    let (_, created) = send(&app, Method::POST, "/users/create", Some(sample_user())).await;
    let id = created["user"]["id"].as_i64().unwrap();

    let (status, body) = send(&app, Method::DELETE, &format!("/users/delete/{id}"), None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "User Deleted");
    assert_eq!(body["user"], created["user"]);

    let (_, listed) = send(&app, Method::GET, "/users", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn api_docs_serves_openapi_document() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/api-docs", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["openapi"], "3.0.0");
    assert!(body["paths"].get("/users/update/{id}").is_some());
}

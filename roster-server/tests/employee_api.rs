//! Integration tests for the employee CRUD API
//!
//! Drives the real router over an in-memory SQLite database.

use axum::{Router, body::Body};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use roster_server::{Config, ServerState, api};
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> Router {
    let config = Config::with_overrides(":memory:", 0);
    let state = ServerState::initialize(&config).await.unwrap();
    api::router(state, &config)
}

async fn send(app: &Router, method: &str, path: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn ann() -> Value {
    json!({ "name": "Ann", "email": "ann@x.com", "salary": 50000.0 })
}

#[tokio::test]
async fn health_check() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn list_starts_empty() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/Employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_then_get_returns_same_record() {
    let app = app().await;

    let (status, created) = send(&app, "POST", "/api/Employees", Some(ann())).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(created["name"], "Ann");
    assert_eq!(created["email"], "ann@x.com");
    assert_eq!(created["phone"], Value::Null);
    assert_eq!(created["salary"], 50000.0);

    let (status, fetched) = send(&app, "GET", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn crud_lifecycle() {
    let app = app().await;

    // Create
    let (_, created) = send(&app, "POST", "/api/Employees", Some(ann())).await;
    let id = created["id"].as_i64().unwrap();

    // List includes the record
    let (_, list) = send(&app, "GET", "/api/Employees", None).await;
    assert!(list.as_array().unwrap().iter().any(|e| e["id"] == id));

    // Update replaces fields, id unchanged
    let update = json!({
        "name": "Ann",
        "email": "ann@x.com",
        "phone": "555-0100",
        "salary": 60000.0,
    });
    let (status, updated) =
        send(&app, "PUT", &format!("/api/Employees/{id}"), Some(update)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"].as_i64().unwrap(), id);
    assert_eq!(updated["salary"], 60000.0);
    assert_eq!(updated["phone"], "555-0100");

    let (_, fetched) = send(&app, "GET", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(fetched["salary"], 60000.0);

    // Delete, then get is a 404
    let (status, body) = send(&app, "DELETE", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, "GET", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_cardinality_after_creates_and_deletes() {
    let app = app().await;

    let mut ids = Vec::new();
    for i in 0..5 {
        let payload = json!({
            "name": format!("Emp {i}"),
            "email": format!("emp{i}@x.com"),
            "salary": 1000.0 * i as f64,
        });
        let (status, created) = send(&app, "POST", "/api/Employees", Some(payload)).await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(created["id"].as_i64().unwrap());
    }

    for id in ids.iter().take(2) {
        let (status, _) = send(&app, "DELETE", &format!("/api/Employees/{id}"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (_, list) = send(&app, "GET", "/api/Employees", None).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_with_blank_name_is_rejected_and_not_persisted() {
    let app = app().await;

    let payload = json!({ "name": "", "email": "ann@x.com", "salary": 50000.0 });
    let (status, body) = send(&app, "POST", "/api/Employees", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"));

    let (_, list) = send(&app, "GET", "/api/Employees", None).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn create_with_missing_fields_is_400() {
    let app = app().await;
    let (status, _) = send(&app, "POST", "/api/Employees", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_blank_name_is_rejected_and_record_unchanged() {
    let app = app().await;

    let (_, created) = send(&app, "POST", "/api/Employees", Some(ann())).await;
    let id = created["id"].as_i64().unwrap();

    let payload = json!({ "name": "  ", "email": "ann@x.com", "salary": 50000.0 });
    let (status, body) = send(&app, "PUT", &format!("/api/Employees/{id}"), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("name"));

    let (_, fetched) = send(&app, "GET", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn update_with_negative_salary_is_rejected() {
    let app = app().await;

    let (_, created) = send(&app, "POST", "/api/Employees", Some(ann())).await;
    let id = created["id"].as_i64().unwrap();

    let payload = json!({ "name": "Ann", "email": "ann@x.com", "salary": -5.0 });
    let (status, _) = send(&app, "PUT", &format!("/api/Employees/{id}"), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, "GET", &format!("/api/Employees/{id}"), None).await;
    assert_eq!(fetched["salary"], 50000.0);
}

#[tokio::test]
async fn negative_salary_is_rejected() {
    let app = app().await;
    let payload = json!({ "name": "Ann", "email": "ann@x.com", "salary": -1.0 });
    let (status, body) = send(&app, "POST", "/api/Employees", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["code"].as_u64().unwrap(),
        shared::ErrorCode::ValueOutOfRange.code() as u64
    );
}

#[tokio::test]
async fn update_and_delete_of_missing_id_are_404() {
    let app = app().await;

    let (status, _) = send(&app, "PUT", "/api/Employees/999", Some(ann())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "DELETE", "/api/Employees/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/api/Employees/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn error_body_carries_error_code() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/api/Employees/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["code"].as_u64().unwrap(),
        shared::ErrorCode::EmployeeNotFound.code() as u64
    );
}

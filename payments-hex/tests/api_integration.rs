//! End-to-end HTTP tests against an in-memory SQLite repository.
//!
//! These tests drive the full router (middleware included) with `oneshot`.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::SqliteRepo;
use payments_types::Validator;
use serde_json::{Value, json};
use tower::ServiceExt;

const VALID: &str = include_str!("../../testdata/valid_payment.json");
const INVALID: &str = include_str!("../../testdata/invalid_payment.json");

/// Helper to create a router over a fresh in-memory database.
async fn create_app() -> Router {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let service = PaymentService::new(repo, Validator::new());
    HttpServer::new(service).router()
}

fn request(method: Method, uri: &str, body: Option<String>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Creates the fixture payment and returns its path from `Location`.
async fn create_payment(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(request(Method::POST, "/payments", Some(VALID.to_string())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn test_health() {
    let app = create_app().await;

    let response = app
        .oneshot(request(Method::GET, "/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": "healthy" }));
}

#[tokio::test]
async fn test_create_then_get() {
    let app = create_app().await;

    let location = create_payment(&app).await;
    assert!(location.starts_with("/payments/"));
    let id = location.trim_start_matches("/payments/").to_string();

    let response = app
        .clone()
        .oneshot(request(Method::GET, &location, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["type"], "Payment");
    assert_eq!(json["version"], 0);
    assert_eq!(json["id"], id);
    assert_eq!(json["attributes"]["amount"], "100.21");
    assert_eq!(json["attributes"]["beneficiary_party"]["account_number_code"], "BBAN");
}

#[tokio::test]
async fn test_create_returns_no_body() {
    let app = create_app().await;

    let response = app
        .oneshot(request(Method::POST, "/payments", Some(VALID.to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let location = response.headers().get(header::LOCATION).unwrap();
    assert!(location.to_str().unwrap().starts_with("/payments/"));
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_create_with_id_is_bad_request() {
    let app = create_app().await;
    let mut payment: Value = serde_json::from_str(VALID).unwrap();
    payment["id"] = json!("abc");

    let response = app
        .oneshot(request(Method::POST, "/payments", Some(payment.to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);
}

#[tokio::test]
async fn test_create_invalid_payment_lists_violations() {
    let app = create_app().await;

    let response = app
        .oneshot(request(Method::POST, "/payments", Some(INVALID.to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let fields: Vec<&str> = json["violations"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"attributes.amount"));
    assert!(fields.contains(&"attributes.fx.contract_reference"));
}

#[tokio::test]
async fn test_malformed_body_is_bad_request() {
    let app = create_app().await;

    let response = app
        .oneshot(request(Method::POST, "/payments", Some("{not json".into())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);
}

#[tokio::test]
async fn test_list_payments() {
    let app = create_app().await;
    for _ in 0..3 {
        create_payment(&app).await;
    }

    let response = app
        .oneshot(request(Method::GET, "/payments", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_update_payment() {
    let app = create_app().await;
    let location = create_payment(&app).await;
    let id = location.trim_start_matches("/payments/");

    let mut payment: Value = serde_json::from_str(VALID).unwrap();
    payment["id"] = json!(id);
    payment["attributes"]["amount"] = json!("250.00");

    let response = app
        .clone()
        .oneshot(request(Method::PUT, "/payments", Some(payment.to_string())))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(request(Method::GET, &location, None))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["attributes"]["amount"], "250.00");
}

#[tokio::test]
async fn test_update_unknown_payment_is_not_found() {
    let app = create_app().await;
    let mut payment: Value = serde_json::from_str(VALID).unwrap();
    payment["id"] = json!("4ee3a8d8-ca7b-4290-a52c-dd5b6165ec43");

    let response = app
        .oneshot(request(Method::PUT, "/payments", Some(payment.to_string())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_unknown_payment_is_not_found() {
    let app = create_app().await;

    let response = app
        .oneshot(request(Method::GET, "/payments/does-not-exist", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], 404);
}

#[tokio::test]
async fn test_delete_twice() {
    let app = create_app().await;
    let location = create_payment(&app).await;

    let first = app
        .clone()
        .oneshot(request(Method::DELETE, &location, None))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::NO_CONTENT);

    let second = app
        .oneshot(request(Method::DELETE, &location, None))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let app = create_app().await;

    let response = app
        .oneshot(request(Method::GET, "/health", None))
        .await
        .unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = create_app().await;

    let response = app
        .oneshot(request(Method::GET, "/api-docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["paths"]["/payments"].is_object());
}

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use inquiry_service::{
    build_router,
    config::{InquiryConfig, SecurityConfig},
    services::InquiryResponder,
    AppState,
};
use std::sync::Arc;
use tower::util::ServiceExt;

const TEST_ORIGIN: &str = "http://localhost:3000";

async fn test_router() -> Router {
    let config = InquiryConfig {
        common: service_core::config::Config { port: 0 },
        service_name: "inquiry-service-test".to_string(),
        log_level: "error".to_string(),
        security: SecurityConfig {
            allowed_origin: TEST_ORIGIN.to_string(),
        },
    };

    let state = AppState {
        config,
        responder: Arc::new(InquiryResponder::with_default_rules()),
    };

    build_router(state).await.expect("Failed to build router")
}

fn ask_request(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn services_query_returns_success_category() {
    let app = test_router().await;

    let response = app
        .oneshot(ask_request(r#"{"query": "What services do you offer?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["category"], "success");
    assert!(body["message"].as_str().unwrap().contains("services"));
}

#[tokio::test]
async fn keyword_matching_is_case_insensitive() {
    let app = test_router().await;

    let response = app
        .oneshot(ask_request(r#"{"query": "TELL ME ABOUT YOUR SERVICES"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["category"], "success");
    assert!(body["message"].as_str().unwrap().contains("strategic planning"));
}

#[tokio::test]
async fn first_matching_rule_wins_with_multiple_keywords() {
    let app = test_router().await;

    // Query mentions "hello", "about" and "services"; the services rule is
    // checked first.
    let response = app
        .oneshot(ask_request(r#"{"query": "hello, tell me about services"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["message"].as_str().unwrap().contains("strategic planning"));
}

#[tokio::test]
async fn contact_query_returns_contact_details() {
    let app = test_router().await;

    let response = app
        .oneshot(ask_request(r#"{"query": "How do I contact you?"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["category"], "success");
    assert!(body["message"].as_str().unwrap().contains("contact@endersconsulting.cloud"));
}

#[tokio::test]
async fn unmatched_query_returns_info_fallback() {
    let app = test_router().await;

    let response = app
        .oneshot(ask_request(r#"{"query": "quarterly weather forecast"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["category"], "info");
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let app = test_router().await;

    let response = app
        .oneshot(ask_request(r#"{"query": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert!(body["error"].as_str().is_some());
}

#[tokio::test]
async fn whitespace_only_query_is_rejected() {
    let app = test_router().await;

    let response = app
        .oneshot(ask_request(r#"{"query": "   \t  "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Query cannot be empty.");
}

#[tokio::test]
async fn missing_query_field_is_rejected() {
    let app = test_router().await;

    let response = app
        .oneshot(ask_request(r#"{"message": "hi"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn preflight_allows_only_trusted_origin() {
    let app = test_router().await;

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/ask")
        .header(header::ORIGIN, TEST_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(TEST_ORIGIN)
    );
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

//! HTTP API integration tests
//!
//! Exercises the router with an in-process mock classifier so the wire
//! contract (verdict shape, error surface) is verified without a trained
//! artifact on disk.

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use scamcheck_classifiers::{ScamScore, TextClassifier};
use scamcheck_core::Result;
use scamcheck_rules::{DecisionPipeline, RuleConfig};
use scamcheck_server::{create_router, AppState, ServerConfig};

struct MockClassifier {
    probability: f32,
}

#[async_trait]
impl TextClassifier for MockClassifier {
    async fn scam_probability(&self, _text: &str) -> Result<ScamScore> {
        Ok(ScamScore::new(self.probability))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

struct FailingClassifier;

#[async_trait]
impl TextClassifier for FailingClassifier {
    async fn scam_probability(&self, _text: &str) -> Result<ScamScore> {
        Err(scamcheck_core::Error::model("artifact unavailable"))
    }

    fn name(&self) -> &str {
        "failing"
    }
}

fn app_with(classifier: Arc<dyn TextClassifier>) -> axum::Router {
    let pipeline = DecisionPipeline::new(classifier, RuleConfig::default())
        .expect("default rule config is valid");
    let state = AppState::new(Arc::new(pipeline), ServerConfig::default());
    create_router(state)
}

fn predict_request(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_returns_ok() {
    let app = app_with(Arc::new(MockClassifier { probability: 0.5 }));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn service_info_lists_endpoints() {
    let app = app_with(Arc::new(MockClassifier { probability: 0.5 }));

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "running");
    assert!(body["endpoints"].get("/predict").is_some());
}

#[tokio::test]
async fn predict_returns_scam_verdict() {
    let app = app_with(Arc::new(MockClassifier { probability: 0.95 }));

    let response = app
        .oneshot(predict_request(json!({
            "message": "urgent action required your account is blocked"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["prediction"], "SCAM");
    assert!((body["confidence"].as_f64().unwrap() - 0.95).abs() < 1e-6);
    assert_eq!(
        body["reason"],
        "Highly likely SCAM based on ML model prediction (0.95 confidence)."
    );
}

#[tokio::test]
async fn predict_greeting_bypasses_the_model() {
    // The mock would flag anything it sees; greetings must not reach it.
    let app = app_with(Arc::new(MockClassifier { probability: 1.0 }));

    let response = app
        .oneshot(predict_request(json!({ "message": "hi there" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["prediction"], "SAFE");
    assert!((body["confidence"].as_f64().unwrap() - 0.99).abs() < 1e-6);
    assert_eq!(body["reason"], "Classified as SAFE by greeting rule.");
}

#[tokio::test]
async fn predict_empty_message_is_safe() {
    let app = app_with(Arc::new(MockClassifier { probability: 1.0 }));

    let response = app
        .oneshot(predict_request(json!({ "message": "" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["prediction"], "SAFE");
    assert!((body["confidence"].as_f64().unwrap() - 1.0).abs() < 1e-6);
    assert_eq!(body["reason"], "empty/whitespace message treated as SAFE");
}

#[tokio::test]
async fn predict_without_message_field_is_invalid_input() {
    let app = app_with(Arc::new(MockClassifier { probability: 0.5 }));

    let response = app.oneshot(predict_request(json!({}))).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["type"], "invalid_input");
    assert!(body.get("prediction").is_none(), "errors are not verdicts");
}

#[tokio::test]
async fn predict_with_null_message_is_invalid_input() {
    let app = app_with(Arc::new(MockClassifier { probability: 0.5 }));

    let response = app
        .oneshot(predict_request(json!({ "message": null })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn classifier_failure_maps_to_service_unavailable() {
    let app = app_with(Arc::new(FailingClassifier));

    let response = app
        .oneshot(predict_request(json!({
            "message": "please verify your account credentials"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["error"]["type"], "model_unavailable");
}

#[tokio::test]
async fn classifier_failure_does_not_break_overrides() {
    let app = app_with(Arc::new(FailingClassifier));

    let response = app
        .oneshot(predict_request(json!({ "message": "hello" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["prediction"], "SAFE");
}

#[tokio::test]
async fn stats_reflect_served_requests() {
    let app = app_with(Arc::new(MockClassifier { probability: 0.95 }));

    let _ = app
        .clone()
        .oneshot(predict_request(json!({
            "message": "urgent account verification needed right now"
        })))
        .await
        .unwrap();

    let response = app
        .oneshot(Request::builder().uri("/stats").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total_requests"], 1);
    assert_eq!(body["scam_verdicts"], 1);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = app_with(Arc::new(MockClassifier { probability: 0.5 }));

    let response = app
        .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

mod common;

use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use url_classifier::api::handlers::batch_predict_handler;
use url_classifier::state::AppState;

fn server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/predict/batch", post(batch_predict_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_batch_predict_success() {
    let server = server(common::create_test_state());

    let response = server
        .post("/api/predict/batch")
        .json(&json!({
            "urls": ["google.com", "http://bit.ly/abc", "evil.com/%41%42%43"]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["total"], 3);
    assert_eq!(json["summary"]["successful"], 3);
    assert_eq!(json["summary"]["failed"], 0);

    let items = json["items"].as_array().unwrap();
    assert_eq!(items[0], json!({ "url": "google.com", "prediction": "SAFE" }));
    assert_eq!(items[1], json!({ "url": "http://bit.ly/abc", "prediction": "PHISHING" }));
    assert_eq!(items[2], json!({ "url": "evil.com/%41%42%43", "prediction": "MALWARE" }));
}

#[tokio::test]
async fn test_batch_predict_reports_item_failures() {
    let server = server(common::create_state_with(common::FailingClassifier));

    let response = server
        .post("/api/predict/batch")
        .json(&json!({ "urls": ["a.com", "b.com"] }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["summary"]["successful"], 0);
    assert_eq!(json["summary"]["failed"], 2);
    assert_eq!(
        json["items"][0],
        json!({ "url": "a.com", "error": "Prediction failed" })
    );
}

#[tokio::test]
async fn test_batch_predict_empty_list() {
    let server = server(common::create_test_state());

    let response = server
        .post("/api/predict/batch")
        .json(&json!({ "urls": [] }))
        .await;

    response.assert_status_bad_request();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
}

#[tokio::test]
async fn test_batch_predict_too_many_urls() {
    let server = server(common::create_test_state());
    let urls: Vec<String> = (0..=common::MAX_BATCH_SIZE)
        .map(|i| format!("site{i}.com"))
        .collect();

    let response = server
        .post("/api/predict/batch")
        .json(&json!({ "urls": urls }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Too many URLs: 6 (max 5)");
}

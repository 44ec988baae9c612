//! Tests for the unauthenticated endpoints

use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::Value;

use crate::helpers::{spawn_bare_app, test_config};

#[tokio::test]
async fn health_requires_no_auth_and_reports_operational() {
    let app = spawn_bare_app(test_config()).await;

    let response = reqwest::get(app.url("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["status"], "operational");
    assert_eq!(json["version"], "test");
    assert!(json["timestamp"].is_string());
    assert_eq!(
        json["systems"],
        serde_json::json!(["Sheets Integration", "Payment Processor", "Monitoring"])
    );
    assert_eq!(json["revenue"]["today"], "$0.00");
    assert_eq!(json["revenue"]["mtd"], "$0.00");
    assert_eq!(json["revenue"]["target"], "$100,000.00");
}

#[tokio::test]
async fn health_is_operational_even_when_integrations_are_degraded() {
    let mut config = test_config();
    config.sheets.spreadsheet_id = None;
    config.paypal.client_id = None;
    let app = spawn_bare_app(config).await;

    let response = reqwest::get(app.url("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["status"], "operational");
}

#[tokio::test]
async fn automations_run_stub() {
    let app = spawn_bare_app(test_config()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(app.url("/api/automations/run"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["successCount"], 1);
    assert_eq!(json["totalTasks"], 1);
}

#[tokio::test]
async fn automations_simulate_month_stub() {
    let app = spawn_bare_app(test_config()).await;

    let client = reqwest::Client::new();
    let response = client
        .post(app.url("/api/automations/simulate-month"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json: Value = response.json().await.unwrap();
    assert_eq!(json["totalRevenue"], 0);
}

#[tokio::test]
async fn unknown_route_returns_404_without_frontend_bundle() {
    let app = spawn_bare_app(test_config()).await;

    let response = reqwest::get(app.url("/no-such-page")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn dashboard_served_when_bundle_exists() {
    let frontend = tempfile::tempdir().unwrap();
    std::fs::write(
        frontend.path().join("index.html"),
        "<html><body>quiet systems</body></html>",
    )
    .unwrap();

    let mut config = test_config();
    config.frontend_dir = frontend.path().to_path_buf();
    let app = spawn_bare_app(config).await;

    let response = reqwest::get(app.url("/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.text().await.unwrap().contains("quiet systems"));

    // root falls back to the same bundle
    let response = reqwest::get(app.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

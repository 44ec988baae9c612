//! Helper functions for integration tests

use std::net::SocketAddr;
use std::time::Duration;

use quiet_systems::{
    alerts::{Alert, AlertRegistry},
    api::{ApiState, spawn_api_server},
    config::{AppEnv, Config, PaypalConfig, SheetsConfig},
    payments::PaymentProcessor,
    sheets::SheetsClient,
};
use serde_json::{Map, Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

pub const TEST_ADMIN_KEY: &str = "test-admin-key";

pub const TEST_SPREADSHEET_ID: &str = "sheet-1";

pub fn test_config() -> Config {
    Config {
        port: 0,
        version: "test".to_string(),
        app_env: AppEnv::Development,
        admin_api_key: Some(TEST_ADMIN_KEY.to_string()),
        cors_origins: vec![],
        paypal: PaypalConfig {
            client_id: Some("test-client".to_string()),
            secret: Some("test-secret".to_string()),
            live: false,
            webhook_id: None,
        },
        sheets: SheetsConfig {
            spreadsheet_id: Some(TEST_SPREADSHEET_ID.to_string()),
            api_key: Some("test-sheets-key".to_string()),
        },
        upstream_timeout: Duration::from_secs(5),
        frontend_dir: "./no-such-frontend".into(),
    }
}

pub struct TestApp {
    pub addr: SocketAddr,
    pub alerts: AlertRegistry,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

/// Spawn the full HTTP surface with both upstreams pointed at the
/// given base URLs (usually one wiremock server for both).
pub async fn spawn_app(config: Config, sheets_base: &str, paypal_base: &str) -> TestApp {
    let sheets = SheetsClient::with_base_url(&config, sheets_base);
    let payments = PaymentProcessor::with_base_url(&config, paypal_base);
    let alerts = AlertRegistry::new();

    let state = ApiState::new(config, sheets, payments, alerts.clone());
    let addr = spawn_api_server(state).await.unwrap();

    TestApp { addr, alerts }
}

/// Spawn an app whose upstreams point at a closed port; fine for tests
/// that never reach an upstream or expect soft failures.
pub async fn spawn_bare_app(config: Config) -> TestApp {
    spawn_app(config, "http://127.0.0.1:1", "http://127.0.0.1:1").await
}

pub fn test_alert(id: &str) -> Alert {
    let mut extra = Map::new();
    extra.insert("message".to_string(), json!("revenue below target"));
    extra.insert("severity".to_string(), json!("warning"));
    extra.insert("timestamp".to_string(), json!("2025-01-01T00:00:00Z"));
    Alert {
        id: id.to_string(),
        acknowledged: false,
        extra,
    }
}

/// Mount the Sheets values endpoint returning the given cell.
pub async fn mock_sheets_cell(server: &MockServer, cell: Value) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/v4/spreadsheets/{TEST_SPREADSHEET_ID}/values/Revenue!B2"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "range": "Revenue!B2",
            "values": [[cell]],
        })))
        .mount(server)
        .await;
}

/// Mount a failing Sheets values endpoint.
pub async fn mock_sheets_failure(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/v4/spreadsheets/{TEST_SPREADSHEET_ID}/values/Revenue!B2"
        )))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Mount the PayPal OAuth endpoint returning a usable bearer token.
pub async fn mock_paypal_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "test-access-token",
            "token_type": "Bearer",
            "expires_in": 32400,
        })))
        .mount(server)
        .await;
}

//! Google Sheets revenue source.
//!
//! One spreadsheet cell holds the month-to-date revenue figure. Every
//! failure talking to the Sheets API is returned as a [`RevenueError`]
//! value so callers can degrade instead of aborting the request.

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::{ComponentHealth, config::Config, util::upstream_client};

pub const NAME: &str = "Sheets Integration";

const DEFAULT_BASE_URL: &str = "https://sheets.googleapis.com";

/// Sheet range holding the month-to-date revenue figure.
const MTD_RANGE: &str = "Revenue!B2";

#[derive(Debug, Clone, PartialEq)]
pub enum RevenueError {
    /// Spreadsheet id missing from configuration
    NotConfigured,
    /// Transport-level failure talking to the Sheets API
    Transport(String),
    /// Non-success HTTP status from the Sheets API
    Upstream(String),
    /// Response body did not contain a usable revenue figure
    Malformed(String),
}

impl std::fmt::Display for RevenueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevenueError::NotConfigured => write!(f, "sheets integration is not configured"),
            RevenueError::Transport(msg) => write!(f, "sheets request failed: {msg}"),
            RevenueError::Upstream(msg) => write!(f, "sheets API error: {msg}"),
            RevenueError::Malformed(msg) => write!(f, "unusable sheets response: {msg}"),
        }
    }
}

impl std::error::Error for RevenueError {}

#[derive(Debug, Clone)]
pub struct SheetsClient {
    client: Client,
    base_url: String,
    spreadsheet_id: Option<String>,
    api_key: Option<String>,
}

impl SheetsClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Point the client at an alternative API host. Used by tests to
    /// target a mock server.
    pub fn with_base_url(config: &Config, base_url: &str) -> Self {
        Self {
            client: upstream_client(config.upstream_timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
            spreadsheet_id: config.sheets.spreadsheet_id.clone(),
            api_key: config.sheets.api_key.clone(),
        }
    }

    /// Fetch the month-to-date revenue figure, fresh on every call.
    pub async fn month_to_date(&self) -> Result<f64, RevenueError> {
        let Some(spreadsheet_id) = &self.spreadsheet_id else {
            return Err(RevenueError::NotConfigured);
        };

        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.base_url, spreadsheet_id, MTD_RANGE
        );

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key.as_str())]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| RevenueError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(RevenueError::Upstream(format!(
                "sheets API returned {status}"
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| RevenueError::Malformed(e.to_string()))?;

        let amount = body
            .get("values")
            .and_then(|rows| rows.get(0))
            .and_then(|row| row.get(0))
            .and_then(parse_amount)
            .ok_or_else(|| {
                RevenueError::Malformed("no revenue figure in response".to_string())
            })?;

        if amount < 0.0 {
            return Err(RevenueError::Malformed(format!(
                "negative revenue figure: {amount}"
            )));
        }

        debug!("fetched MTD revenue: {amount}");
        Ok(amount)
    }

    /// Readiness is decided once at construction from configuration,
    /// not by probing the API.
    pub fn health(&self) -> ComponentHealth {
        ComponentHealth::from_readiness(self.spreadsheet_id.is_some())
    }
}

/// Parse a revenue cell, accepting raw numbers and currency-formatted
/// strings like `"$1,234.50"`.
fn parse_amount(cell: &Value) -> Option<f64> {
    match cell {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s
            .trim()
            .trim_start_matches('$')
            .replace(',', "")
            .parse()
            .ok(),
        _ => None,
    }
}

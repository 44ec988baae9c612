//! Payment provider integration.
//!
//! PayPal order creation is a two-step handshake: fetch a bearer token
//! with the client credentials, then create the order. Both steps
//! soft-fail into a [`PaymentError`] carrying the upstream payload so
//! the HTTP surface can answer with a structured `success: false` body.
//!
//! Google Pay is a local placeholder pending a real processor
//! integration; it synthesizes a transaction id and always succeeds.

use chrono::Utc;
use rand::Rng;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::{ComponentHealth, config::Config, util::upstream_client};

pub const NAME: &str = "Payment Processor";

const SANDBOX_BASE_URL: &str = "https://api-m.sandbox.paypal.com";
const LIVE_BASE_URL: &str = "https://api-m.paypal.com";

const DEFAULT_RETURN_URL: &str = "https://example.com/success";
const DEFAULT_CANCEL_URL: &str = "https://example.com/cancel";

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentError {
    /// PayPal credentials missing from configuration
    NotConfigured,
    /// Transport-level failure talking to PayPal
    Transport(String),
    /// PayPal rejected the call; carries the upstream error payload
    Upstream(Value),
    /// Webhook signature did not verify
    InvalidSignature,
}

impl std::fmt::Display for PaymentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentError::NotConfigured => write!(f, "payment processor is not configured"),
            PaymentError::Transport(msg) => write!(f, "paypal request failed: {msg}"),
            PaymentError::Upstream(payload) => write!(f, "paypal API error: {payload}"),
            PaymentError::InvalidSignature => write!(f, "webhook signature verification failed"),
        }
    }
}

impl std::error::Error for PaymentError {}

impl PaymentError {
    /// Error payload for `success: false` responses: the upstream body
    /// when PayPal answered, otherwise our own message.
    pub fn to_payload(&self) -> Value {
        match self {
            PaymentError::Upstream(payload) => payload.clone(),
            other => json!(other.to_string()),
        }
    }
}

/// Body of `POST /api/payments/paypal`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub amount: f64,

    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default = "default_description")]
    pub description: String,

    #[serde(default)]
    pub return_url: Option<String>,

    #[serde(default)]
    pub cancel_url: Option<String>,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_description() -> String {
    "Digital Product".to_string()
}

/// Successful PayPal order creation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaypalOrder {
    pub order_id: String,
    pub status: String,
    pub links: Value,
}

/// Body of `POST /api/payments/google-pay`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GooglePayRequest {
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GooglePayReceipt {
    pub success: bool,
    pub provider: &'static str,
    pub transaction_id: String,
    pub amount: f64,
    pub currency: String,
}

/// Transmission headers PayPal attaches to webhook deliveries.
#[derive(Debug, Clone)]
pub struct WebhookSignature {
    pub transmission_id: String,
    pub transmission_time: String,
    pub transmission_sig: String,
    pub cert_url: String,
    pub auth_algo: String,
}

#[derive(Debug, Clone)]
pub struct PaymentProcessor {
    client: Client,
    base_url: String,
    client_id: Option<String>,
    secret: Option<String>,
    webhook_id: Option<String>,
}

impl PaymentProcessor {
    pub fn new(config: &Config) -> Self {
        let base_url = if config.paypal.live {
            LIVE_BASE_URL
        } else {
            SANDBOX_BASE_URL
        };
        Self::with_base_url(config, base_url)
    }

    /// Point the processor at an alternative API host. Used by tests to
    /// target a mock server.
    pub fn with_base_url(config: &Config, base_url: &str) -> Self {
        Self {
            client: upstream_client(config.upstream_timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
            client_id: config.paypal.client_id.clone(),
            secret: config.paypal.secret.clone(),
            webhook_id: config.paypal.webhook_id.clone(),
        }
    }

    /// Create a CAPTURE order with one purchase unit.
    pub async fn create_order(&self, order: OrderRequest) -> Result<PaypalOrder, PaymentError> {
        let token = self.access_token().await?;

        let body = json!({
            "intent": "CAPTURE",
            "purchase_units": [{
                "amount": {
                    "currency_code": order.currency,
                    "value": format_amount(order.amount),
                },
                "description": order.description,
            }],
            "application_context": {
                "return_url": order
                    .return_url
                    .unwrap_or_else(|| DEFAULT_RETURN_URL.to_string()),
                "cancel_url": order
                    .cancel_url
                    .unwrap_or_else(|| DEFAULT_CANCEL_URL.to_string()),
            },
        });

        let response = self
            .client
            .post(format!("{}/v2/checkout/orders", self.base_url))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(PaymentError::Upstream(payload));
        }

        debug!("created paypal order {}", payload["id"]);
        Ok(PaypalOrder {
            order_id: payload["id"].as_str().unwrap_or_default().to_string(),
            status: payload["status"].as_str().unwrap_or_default().to_string(),
            links: payload["links"].clone(),
        })
    }

    /// Placeholder pending a real Google Pay processor integration.
    pub fn google_pay(&self, request: GooglePayRequest) -> GooglePayReceipt {
        let suffix: u32 = rand::thread_rng().r#gen();
        GooglePayReceipt {
            success: true,
            provider: "google_pay",
            transaction_id: format!("GP_{}_{suffix:08x}", Utc::now().timestamp_millis()),
            amount: request.amount.unwrap_or(0.0),
            currency: request.currency.unwrap_or_else(default_currency),
        }
    }

    /// Verify a webhook delivery against PayPal's signature endpoint.
    ///
    /// Without a configured webhook id the delivery is accepted as-is;
    /// with one, anything but a `SUCCESS` verdict rejects it.
    pub async fn verify_webhook(
        &self,
        signature: Option<WebhookSignature>,
        event: &Value,
    ) -> Result<(), PaymentError> {
        let Some(webhook_id) = &self.webhook_id else {
            warn!("PAYPAL_WEBHOOK_ID not set, accepting webhook without signature verification");
            return Ok(());
        };

        let Some(signature) = signature else {
            return Err(PaymentError::InvalidSignature);
        };

        let token = self.access_token().await?;

        let body = json!({
            "transmission_id": signature.transmission_id,
            "transmission_time": signature.transmission_time,
            "transmission_sig": signature.transmission_sig,
            "cert_url": signature.cert_url,
            "auth_algo": signature.auth_algo,
            "webhook_id": webhook_id,
            "webhook_event": event,
        });

        let response = self
            .client
            .post(format!(
                "{}/v1/notifications/verify-webhook-signature",
                self.base_url
            ))
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(PaymentError::Upstream(payload));
        }

        match payload["verification_status"].as_str() {
            Some("SUCCESS") => Ok(()),
            _ => Err(PaymentError::InvalidSignature),
        }
    }

    /// Readiness is decided once at construction from configuration,
    /// not by probing the API.
    pub fn health(&self) -> ComponentHealth {
        ComponentHealth::from_readiness(self.client_id.is_some() && self.secret.is_some())
    }

    async fn access_token(&self) -> Result<String, PaymentError> {
        let (Some(client_id), Some(secret)) = (&self.client_id, &self.secret) else {
            return Err(PaymentError::NotConfigured);
        };

        let response = self
            .client
            .post(format!("{}/v1/oauth2/token", self.base_url))
            .basic_auth(client_id, Some(secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        let status = response.status();
        let payload: Value = response
            .json()
            .await
            .map_err(|e| PaymentError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(PaymentError::Upstream(payload));
        }

        match payload["access_token"].as_str() {
            Some(token) => Ok(token.to_string()),
            None => Err(PaymentError::Upstream(payload)),
        }
    }
}

/// PayPal wants the amount as a string; keep integers bare and round
/// fractional amounts to cents.
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{amount:.0}")
    } else {
        format!("{amount:.2}")
    }
}

//! Payment endpoints

use axum::{
    Json,
    extract::State,
    http::HeaderMap,
};
use serde_json::{Value, json};
use tracing::warn;

use crate::{
    api::{
        error::{ApiError, ApiResult},
        state::ApiState,
    },
    payments::{GooglePayReceipt, GooglePayRequest, OrderRequest, PaymentError, WebhookSignature},
};

/// POST /api/payments/paypal
///
/// Creates a PayPal order. Provider failures come back as
/// `success: false` with the upstream error payload, HTTP 200.
pub async fn create_paypal_order(
    State(state): State<ApiState>,
    Json(order): Json<OrderRequest>,
) -> Json<Value> {
    match state.payments.create_order(order).await {
        Ok(order) => Json(json!({
            "success": true,
            "provider": "paypal",
            "orderId": order.order_id,
            "status": order.status,
            "links": order.links,
        })),
        Err(e) => {
            warn!("paypal order creation failed: {e}");
            Json(json!({
                "success": false,
                "provider": "paypal",
                "error": e.to_payload(),
            }))
        }
    }
}

/// POST /api/payments/google-pay
pub async fn google_pay(
    State(state): State<ApiState>,
    body: Option<Json<GooglePayRequest>>,
) -> Json<GooglePayReceipt> {
    let request = body.map(|Json(body)| body).unwrap_or_default();
    Json(state.payments.google_pay(request))
}

/// POST /api/payments/webhook/paypal
///
/// Acknowledges a provider webhook after signature verification (when
/// a webhook id is configured).
pub async fn paypal_webhook(
    State(state): State<ApiState>,
    headers: HeaderMap,
    Json(event): Json<Value>,
) -> ApiResult<Json<Value>> {
    let signature = signature_from_headers(&headers);

    state
        .payments
        .verify_webhook(signature, &event)
        .await
        .map_err(|e| match e {
            PaymentError::InvalidSignature => {
                ApiError::BadRequest("Webhook signature verification failed".to_string())
            }
            other => {
                warn!("webhook verification call failed: {other}");
                ApiError::BadRequest("Unable to verify webhook signature".to_string())
            }
        })?;

    Ok(Json(json!({ "success": true, "received": true })))
}

/// Extract PayPal's transmission headers from a webhook delivery.
fn signature_from_headers(headers: &HeaderMap) -> Option<WebhookSignature> {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    Some(WebhookSignature {
        transmission_id: header("paypal-transmission-id")?,
        transmission_time: header("paypal-transmission-time")?,
        transmission_sig: header("paypal-transmission-sig")?,
        cert_url: header("paypal-cert-url")?,
        auth_algo: header("paypal-auth-algo")?,
    })
}

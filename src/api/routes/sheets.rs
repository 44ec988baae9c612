//! Revenue endpoints backed by the spreadsheet integration

use axum::{Json, extract::State};
use serde_json::{Value, json};

use crate::api::state::ApiState;

/// GET /api/sheets/mtd
///
/// Month-to-date revenue as a soft-failure payload; upstream errors
/// are reported as data with HTTP 200.
pub async fn month_to_date(State(state): State<ApiState>) -> Json<Value> {
    match state.sheets.month_to_date().await {
        Ok(amount) => Json(json!({ "success": true, "amount": amount })),
        Err(e) => Json(json!({ "success": false, "error": e.to_string() })),
    }
}

//! Automation endpoints
//!
//! Stub responses pending the real automation engine.

use axum::Json;
use serde_json::{Value, json};

/// POST /api/automations/run
pub async fn run() -> Json<Value> {
    Json(json!({ "successCount": 1, "totalTasks": 1 }))
}

/// POST /api/automations/simulate-month
pub async fn simulate_month() -> Json<Value> {
    Json(json!({ "totalRevenue": 0 }))
}

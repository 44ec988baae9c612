//! Health check endpoint

use axum::{Json, extract::State};

use crate::{
    api::{
        state::ApiState,
        types::{HealthResponse, RevenueBanner},
    },
    monitoring, payments, sheets,
};

/// GET /health
///
/// Unauthenticated liveness banner. Reports "operational" regardless
/// of downstream health; the revenue figures here are fixed banner
/// values, not live data.
pub async fn health_check(State(state): State<ApiState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "operational",
        version: state.config.version.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        systems: vec![sheets::NAME, payments::NAME, monitoring::NAME],
        revenue: RevenueBanner::default(),
    })
}

//! Admin status and alert endpoints

use axum::{
    Json,
    extract::{Path, State},
};
use tokio::join;
use tracing::warn;

use crate::{
    REVENUE_TARGET,
    api::{
        error::{ApiError, ApiResult},
        state::ApiState,
        types::{
            AcknowledgeResponse, AlertsResponse, ComponentsView, RevenueView, StatusResponse,
        },
    },
    monitoring,
};

/// GET /api/admin/status
///
/// Fans out to both integration health checks, the revenue fetch and
/// the dashboard composition concurrently, then merges the results.
/// Collaborator failures are soft; the join itself never fails.
pub async fn get_status(State(state): State<ApiState>) -> Json<StatusResponse> {
    let (sheets_health, payments_health, revenue, dashboard) = join!(
        async { state.sheets.health() },
        async { state.payments.health() },
        state.sheets.month_to_date(),
        monitoring::dashboard(&state.sheets),
    );

    let revenue = match revenue {
        Ok(amount) => RevenueView::Available {
            mtd: amount,
            target: REVENUE_TARGET as u64,
            progress: monitoring::progress_percent(amount),
        },
        Err(e) => {
            warn!("admin status revenue fetch failed: {e}");
            RevenueView::Unavailable {
                error: "Unable to fetch revenue".to_string(),
            }
        }
    };

    Json(StatusResponse {
        system: "quiet-systems",
        version: state.config.version.clone(),
        status: "operational",
        timestamp: chrono::Utc::now().to_rfc3339(),
        components: ComponentsView {
            sheets: sheets_health,
            payments: payments_health,
        },
        revenue,
        dashboard,
    })
}

/// GET /api/admin/alerts
pub async fn list_alerts(State(state): State<ApiState>) -> Json<AlertsResponse> {
    let alerts = state.alerts.list().await;
    Json(AlertsResponse {
        count: alerts.len(),
        alerts,
    })
}

/// POST /api/admin/alert/:id/acknowledge
pub async fn acknowledge_alert(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<AcknowledgeResponse>> {
    let alert = state
        .alerts
        .acknowledge(&id)
        .await
        .ok_or_else(|| ApiError::NotFound("Alert not found".to_string()))?;

    Ok(Json(AcknowledgeResponse {
        success: true,
        alert,
    }))
}

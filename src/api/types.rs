//! Shared API response types
//!
//! Typed responses for the operator-facing endpoints, so the dashboard
//! and the tests agree on one serialization.

use serde::Serialize;

use crate::{ComponentHealth, alerts::Alert, monitoring::DashboardData};

/// Response for GET /health
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: String,
    pub timestamp: String,
    pub systems: Vec<&'static str>,
    pub revenue: RevenueBanner,
}

/// Fixed banner figures reported by the liveness endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RevenueBanner {
    pub today: &'static str,
    pub mtd: &'static str,
    pub target: &'static str,
}

impl Default for RevenueBanner {
    fn default() -> Self {
        Self {
            today: "$0.00",
            mtd: "$0.00",
            target: "$100,000.00",
        }
    }
}

/// Response for GET /api/admin/status
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub system: &'static str,
    pub version: String,
    pub status: &'static str,
    pub timestamp: String,
    pub components: ComponentsView,
    pub revenue: RevenueView,
    pub dashboard: DashboardData,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentsView {
    pub sheets: ComponentHealth,
    pub payments: ComponentHealth,
}

/// Revenue summary inside the admin status payload. A failed fetch is
/// reported as data, never as a non-200 response.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RevenueView {
    Available {
        mtd: f64,
        target: u64,
        progress: String,
    },
    Unavailable {
        error: String,
    },
}

/// Response for GET /api/admin/alerts
#[derive(Debug, Clone, Serialize)]
pub struct AlertsResponse {
    pub alerts: Vec<Alert>,
    pub count: usize,
}

/// Response for POST /api/admin/alert/:id/acknowledge
#[derive(Debug, Clone, Serialize)]
pub struct AcknowledgeResponse {
    pub success: bool,
    pub alert: Alert,
}

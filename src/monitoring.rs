//! Dashboard aggregation.
//!
//! Composes the revenue figure with a static API check into the
//! structure the operator dashboard renders. This never fails: a
//! failed revenue fetch is reported as zero.

use serde::Serialize;
use tracing::warn;

use crate::{ComponentState, REVENUE_TARGET, sheets::SheetsClient};

pub const NAME: &str = "Monitoring";

#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub metrics: DashboardMetrics,
    pub checks: DashboardChecks,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardMetrics {
    pub revenue: RevenueMetric,
}

#[derive(Debug, Clone, Serialize)]
pub struct RevenueMetric {
    pub current: f64,
    pub target: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardChecks {
    pub apis: ApiCheck,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiCheck {
    pub status: ComponentState,
}

/// Build the dashboard summary, substituting zero when the revenue
/// source fails.
pub async fn dashboard(sheets: &SheetsClient) -> DashboardData {
    let current = match sheets.month_to_date().await {
        Ok(amount) => amount,
        Err(e) => {
            warn!("dashboard revenue fetch failed: {e}");
            0.0
        }
    };

    DashboardData {
        metrics: DashboardMetrics {
            revenue: RevenueMetric {
                current,
                target: REVENUE_TARGET as u64,
            },
        },
        checks: DashboardChecks {
            apis: ApiCheck {
                status: ComponentState::Healthy,
            },
        },
    }
}

/// Progress toward the revenue target as a percentage string with one
/// decimal place. No upper clamp; values past 100% are reported as-is.
pub fn progress_percent(amount: f64) -> String {
    format!("{:.1}%", (amount / REVENUE_TARGET) * 100.0)
}

//! In-memory alert registry.
//!
//! Alerts are raised by an external monitor through [`AlertRegistry::push`]
//! and live for the lifetime of the process. The only mutation after
//! creation is acknowledgment.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,

    #[serde(default)]
    pub acknowledged: bool,

    /// Descriptive fields (message, severity, timestamp) carried through
    /// untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Process-lifetime alert store shared across request handlers.
///
/// Cloning shares the underlying storage. Mutation is a single field
/// write guarded by the lock, so concurrent acknowledgments of
/// different alerts cannot lose updates.
#[derive(Debug, Clone, Default)]
pub struct AlertRegistry {
    alerts: Arc<RwLock<Vec<Alert>>>,
}

impl AlertRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an alert. Nothing in this process raises alerts on its
    /// own; this is the entry point for an out-of-process monitor.
    pub async fn push(&self, alert: Alert) {
        self.alerts.write().await.push(alert);
    }

    /// All alerts in insertion order.
    pub async fn list(&self) -> Vec<Alert> {
        self.alerts.read().await.clone()
    }

    /// Lookup by id. Linear scan; the registry stays small.
    pub async fn get(&self, id: &str) -> Option<Alert> {
        self.alerts
            .read()
            .await
            .iter()
            .find(|alert| alert.id == id)
            .cloned()
    }

    /// Mark an alert acknowledged and return the updated copy.
    ///
    /// Acknowledging an already-acknowledged alert is not an error.
    /// Returns `None` when no alert has the given id.
    pub async fn acknowledge(&self, id: &str) -> Option<Alert> {
        let mut alerts = self.alerts.write().await;
        let alert = alerts.iter_mut().find(|alert| alert.id == id)?;
        alert.acknowledged = true;
        Some(alert.clone())
    }
}

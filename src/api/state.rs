//! API shared state containing collaborator handles

use std::sync::Arc;

use crate::{
    alerts::AlertRegistry, config::Config, payments::PaymentProcessor, sheets::SheetsClient,
};

/// Shared state passed to all API handlers.
///
/// Collaborators are constructed once at startup and injected here;
/// handlers never build their own clients.
#[derive(Clone)]
pub struct ApiState {
    pub config: Arc<Config>,
    pub sheets: Arc<SheetsClient>,
    pub payments: Arc<PaymentProcessor>,
    pub alerts: AlertRegistry,
}

impl ApiState {
    pub fn new(
        config: Config,
        sheets: SheetsClient,
        payments: PaymentProcessor,
        alerts: AlertRegistry,
    ) -> Self {
        Self {
            config: Arc::new(config),
            sheets: Arc::new(sheets),
            payments: Arc::new(payments),
            alerts,
        }
    }
}

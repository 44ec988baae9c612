use std::path::PathBuf;
use std::time::Duration;

use tracing::trace;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_FRONTEND_DIR: &str = "./frontend";

/// Deployment environment, selected via `APP_ENV`.
///
/// Controls whether 500 responses carry the raw error message or a
/// generic one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port (`PORT`)
    pub port: u16,

    /// Reported service version (`VERSION`)
    pub version: String,

    pub app_env: AppEnv,

    /// Shared secret for the admin surface (`ADMIN_API_KEY`).
    /// When unset, every admin request is rejected.
    pub admin_api_key: Option<String>,

    /// CORS allow-list (`CORS_ORIGIN`, comma-separated).
    /// Empty means permissive.
    pub cors_origins: Vec<String>,

    pub paypal: PaypalConfig,
    pub sheets: SheetsConfig,

    /// Timeout applied to every upstream HTTP call
    /// (`UPSTREAM_TIMEOUT_SECS`).
    pub upstream_timeout: Duration,

    /// Static dashboard bundle (`FRONTEND_DIR`); served only when the
    /// directory exists.
    pub frontend_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PaypalConfig {
    pub client_id: Option<String>,
    pub secret: Option<String>,

    /// `PAYPAL_ENV=live` selects the live API, anything else sandbox.
    pub live: bool,

    /// Webhook id registered with PayPal (`PAYPAL_WEBHOOK_ID`).
    /// When unset, webhook signatures are not verified.
    pub webhook_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SheetsConfig {
    pub spreadsheet_id: Option<String>,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        let config = Self {
            port: env_var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            version: env_var("VERSION")
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            app_env: match env_var("APP_ENV").as_deref() {
                Some("development") => AppEnv::Development,
                _ => AppEnv::Production,
            },
            admin_api_key: env_var("ADMIN_API_KEY"),
            cors_origins: parse_origins(&env_var("CORS_ORIGIN").unwrap_or_default()),
            paypal: PaypalConfig {
                client_id: env_var("PAYPAL_CLIENT_ID"),
                secret: env_var("PAYPAL_SECRET"),
                live: env_var("PAYPAL_ENV").as_deref() == Some("live"),
                webhook_id: env_var("PAYPAL_WEBHOOK_ID"),
            },
            sheets: SheetsConfig {
                spreadsheet_id: env_var("GOOGLE_SHEETS_ID"),
                api_key: env_var("GOOGLE_SHEETS_API_KEY"),
            },
            upstream_timeout: Duration::from_secs(
                env_var("UPSTREAM_TIMEOUT_SECS")
                    .and_then(|t| t.parse().ok())
                    .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            ),
            frontend_dir: env_var("FRONTEND_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FRONTEND_DIR)),
        };
        trace!("loaded config: {config:?}");
        config
    }
}

/// Read an environment variable, treating empty values as unset.
fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

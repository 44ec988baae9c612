//! REST API server for the quiet-systems backend
//!
//! Single-port HTTP surface stitching the spreadsheet revenue source,
//! the payment processor and the alert registry together, plus the
//! static operator dashboard.
//!
//! ## Architecture
//!
//! - **Axum** web framework with Tower middleware
//! - **Injected collaborators** constructed once at startup ([`ApiState`])
//! - **Shared-secret auth** on the `/api/admin` subtree
//! - **Catch-all 500** (`QS_500`) for anything that panics in a handler
//!
//! ## Endpoints
//!
//! - `GET /health` - Liveness banner (no auth)
//! - `GET /api/admin/status` - Aggregated system status
//! - `GET /api/admin/alerts` - Alert registry contents
//! - `POST /api/admin/alert/:id/acknowledge` - Acknowledge an alert
//! - `GET /api/sheets/mtd` - Month-to-date revenue
//! - `POST /api/payments/paypal` - Create a PayPal order
//! - `POST /api/payments/google-pay` - Google Pay placeholder
//! - `POST /api/payments/webhook/paypal` - Provider webhook
//! - `POST /api/automations/run`, `POST /api/automations/simulate-month` - Stubs

pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;

pub use error::{ApiError, ApiResult};
pub use state::ApiState;

use std::any::Any;
use std::net::SocketAddr;

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any as CorsAny, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppEnv;

/// Build the application router around the injected state.
pub fn build_router(state: ApiState) -> Router {
    let admin = Router::new()
        .route("/status", get(routes::admin::get_status))
        .route("/alerts", get(routes::admin::list_alerts))
        .route(
            "/alert/:id/acknowledge",
            post(routes::admin::acknowledge_alert),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_admin_key,
        ));

    let mut app = Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/api/admin", admin)
        .route("/api/sheets/mtd", get(routes::sheets::month_to_date))
        .route(
            "/api/payments/paypal",
            post(routes::payments::create_paypal_order),
        )
        .route("/api/payments/google-pay", post(routes::payments::google_pay))
        .route(
            "/api/payments/webhook/paypal",
            post(routes::payments::paypal_webhook),
        )
        .route("/api/automations/run", post(routes::automations::run))
        .route(
            "/api/automations/simulate-month",
            post(routes::automations::simulate_month),
        );

    // Serve the dashboard bundle if it has been deployed next to us
    let frontend = state.config.frontend_dir.clone();
    if frontend.exists() {
        info!("serving dashboard from {}", frontend.display());
        app = app
            .route_service("/dashboard", ServeFile::new(frontend.join("index.html")))
            .fallback_service(ServeDir::new(&frontend));
    }

    let expose_errors = state.config.app_env == AppEnv::Development;
    let cors = cors_layer(&state.config.cors_origins);

    app.with_state(state)
        .layer(CatchPanicLayer::custom(
            move |err: Box<dyn Any + Send + 'static>| panic_response(err, expose_errors),
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Spawn the API server
///
/// This starts an Axum HTTP server in a background task.
/// Returns the server's local address.
pub async fn spawn_api_server(state: ApiState) -> anyhow::Result<SocketAddr> {
    let bind_addr = SocketAddr::from(([0, 0, 0, 0], state.config.port));
    info!("starting API server on {bind_addr}");

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let addr = listener.local_addr()?;

    info!("API server listening on {addr}");

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("API server error: {e}");
        }
    });

    Ok(addr)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(CorsAny)
            .allow_methods(CorsAny)
            .allow_headers(CorsAny);
    }

    // Credentialed CORS cannot use wildcards, so the allow-list branch
    // names the methods and headers the dashboard actually sends.
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(middleware::auth::ADMIN_KEY_HEADER),
        ])
        .allow_credentials(true)
}

/// Last line of defense: anything that panics in the request path
/// becomes a QS_500 body instead of a dropped connection.
fn panic_response(err: Box<dyn Any + Send + 'static>, expose: bool) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("unhandled panic in request path: {detail}");

    ApiError::internal(detail, expose).into_response()
}

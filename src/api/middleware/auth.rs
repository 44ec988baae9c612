//! Admin API key authentication middleware

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::api::{error::ApiError, state::ApiState};

/// Header carrying the shared admin secret.
pub const ADMIN_KEY_HEADER: &str = "x-api-key";

/// Authentication middleware for the admin subtree
///
/// Compares the `x-api-key` header verbatim against the configured
/// secret. An unset `ADMIN_API_KEY` rejects every request rather than
/// leaving the surface open.
pub async fn require_admin_key(
    State(state): State<ApiState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(expected) = state.config.admin_api_key.as_deref() else {
        return Err(ApiError::Unauthorized);
    };

    let provided = request
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    if provided != Some(expected) {
        return Err(ApiError::Unauthorized);
    }

    Ok(next.run(request).await)
}

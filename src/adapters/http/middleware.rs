//! HTTP middleware construction.
//!
//! Builds the CORS and timeout layers from server configuration so the
//! binary applies exactly what was configured.

use std::time::Duration;

use axum::http::HeaderValue;
use http::header::InvalidHeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;

use crate::config::ServerConfig;

/// Build the CORS layer from the configured origins.
///
/// With no configured origins the layer is permissive; otherwise only the
/// listed origins are allowed.
///
/// # Errors
///
/// Returns `InvalidHeaderValue` if a configured origin is not a valid
/// header value.
pub fn cors_layer(config: &ServerConfig) -> Result<CorsLayer, InvalidHeaderValue> {
    let origins = config.cors_origins_list();
    if origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

/// Build the request timeout layer from the configured timeout.
pub fn timeout_layer(config: &ServerConfig) -> TimeoutLayer {
    TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs))
}

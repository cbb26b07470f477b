use crate::error::ApiError;
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};

/// Catch-all for unmatched routes and unsupported methods
///
/// `OPTIONS` on any path is a CORS pre-flight and gets an empty 204; the
/// CORS headers themselves are added by the router's layers.
pub async fn fallback_handler(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::NO_CONTENT.into_response();
    }
    tracing::debug!("No route for {} request", method);
    ApiError::RouteNotFound.into_response()
}

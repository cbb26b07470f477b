use axum::{
    http::{header, HeaderValue},
    routing::{get, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

use crate::handlers::{
    create_handler, delete_handler, fallback_handler, health_handler, list_handler,
    openapi_handler, update_handler,
};
use crate::state::AppState;

// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SHOPPING_LIST: &str = "/shopping-list";
pub const SHOPPING_LIST_ITEM: &str = "/shopping-list/{id}";

const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

/// Build the application router
///
/// Unknown paths and unsupported methods on known paths both end up in
/// [`fallback_handler`]. Every response, errors included, carries
/// permissive CORS headers.
pub fn router(state: AppState) -> Router {
    let cors = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ));

    Router::new()
        .route(HEALTH, get(health_handler).fallback(fallback_handler))
        .route(OPENAPI_JSON, get(openapi_handler).fallback(fallback_handler))
        .route(
            SHOPPING_LIST,
            get(list_handler).post(create_handler).fallback(fallback_handler),
        )
        .route(
            SHOPPING_LIST_ITEM,
            put(update_handler).delete(delete_handler).fallback(fallback_handler),
        )
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

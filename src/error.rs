use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Response type for unhealthy status
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UnhealthyResponse {
    pub status: String,
    pub error: String,
}

/// Custom error type for API endpoints
///
/// Every variant maps to a status code and a JSON `ErrorResponse`, so
/// handlers can simply return `Result<_, ApiError>`.
#[derive(Debug)]
pub enum ApiError {
    /// Request body is not valid JSON, or not a JSON object
    InvalidJson(String),
    /// Path segment is not an integer id, or could not be decoded at all
    InvalidId(String),
    /// PUT body tried to change the item's id
    IdMismatch { path: i64, body: serde_json::Value },
    /// No item carries the requested id
    ItemNotFound(i64),
    /// No route matches method and path
    RouteNotFound,
    /// Writing the data file failed
    StorageError(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::InvalidJson(details) => {
                (StatusCode::BAD_REQUEST, "Invalid JSON", Some(details))
            }
            ApiError::InvalidId(details) => {
                (StatusCode::BAD_REQUEST, "Invalid item id", Some(details))
            }
            ApiError::IdMismatch { path, body } => (
                StatusCode::BAD_REQUEST,
                "Item id cannot be changed",
                Some(format!("path id is {}, body id is {}", path, body)),
            ),
            ApiError::ItemNotFound(_) => (StatusCode::NOT_FOUND, "Item not found", None),
            ApiError::RouteNotFound => (StatusCode::NOT_FOUND, "Route not found", None),
            ApiError::StorageError(err) => {
                tracing::error!("Storage error: {:#}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", None)
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::StorageError(err)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidId(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::InvalidJson(err.to_string())
    }
}

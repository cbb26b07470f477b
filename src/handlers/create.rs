use crate::error::{ApiError, ErrorResponse};
use crate::models::parse_object_body;
use crate::routes;
use crate::shopping_list::Item;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /shopping-list handler - Append a new item
///
/// The body must be a JSON object. The server assigns the `id`; any `id`
/// sent by the client is ignored.
#[utoipa::path(
    post,
    path = routes::SHOPPING_LIST,
    request_body = serde_json::Value,
    responses(
        (status = 201, description = "Item created", body = serde_json::Value),
        (status = 400, description = "Invalid JSON or not an object", body = ErrorResponse),
        (status = 500, description = "Data file could not be written", body = ErrorResponse)
    ),
    tag = "shopping-list"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    tracing::debug!("Received data: {}", String::from_utf8_lossy(&body));

    let fields = parse_object_body(&body).inspect_err(|err| {
        tracing::warn!("Rejected create request: {:?}", err);
    })?;

    let item = state.store.create(fields).await?;

    tracing::info!("Created item with id: {:?}", item.id());
    Ok((StatusCode::CREATED, Json(item)))
}

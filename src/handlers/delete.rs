use crate::error::{ApiError, ErrorResponse};
use crate::models::{parse_item_id, DeleteResponse};
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

/// DELETE /shopping-list/:id handler - Remove an item
#[utoipa::path(
    delete,
    path = routes::SHOPPING_LIST_ITEM,
    params(
        ("id" = i64, Path, description = "Integer id of the item")
    ),
    responses(
        (status = 200, description = "Item deleted", body = DeleteResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Data file could not be written", body = ErrorResponse)
    ),
    tag = "shopping-list"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Json<DeleteResponse>), ApiError> {
    let Path(id_str) = path?;
    let id = parse_item_id(&id_str)?;

    match state.store.delete(id).await? {
        Some(item) => {
            tracing::info!("Deleted item with id: {}", id);
            Ok((
                StatusCode::OK,
                Json(DeleteResponse {
                    message: "Item deleted successfully".to_string(),
                    deleted_item: item,
                }),
            ))
        }
        None => {
            tracing::info!("Item not found for delete: {}", id);
            Err(ApiError::ItemNotFound(id))
        }
    }
}

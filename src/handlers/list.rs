use crate::routes;
use crate::shopping_list::Item;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /shopping-list handler - Return every item
///
/// A missing or unreadable data file yields an empty array, never an error.
#[utoipa::path(
    get,
    path = routes::SHOPPING_LIST,
    responses(
        (status = 200, description = "All shopping list items", body = [serde_json::Value])
    ),
    tag = "shopping-list"
)]
pub async fn list_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let list = state.store.list().await;
    if list.is_empty() {
        tracing::info!("Shopping list is empty");
    } else {
        tracing::info!("Fetched {} items", list.len());
    }
    (StatusCode::OK, Json(list.into_items()))
}

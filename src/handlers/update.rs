use crate::error::{ApiError, ErrorResponse};
use crate::models::{parse_item_id, parse_object_body};
use crate::routes;
use crate::shopping_list::{ID_FIELD, Item};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};

/// PUT /shopping-list/:id handler - Shallow-merge fields into an item
///
/// Fields in the body replace or extend the stored ones; fields absent from
/// the body are kept. A body `id` is accepted only when it equals the path id.
#[utoipa::path(
    put,
    path = routes::SHOPPING_LIST_ITEM,
    params(
        ("id" = i64, Path, description = "Integer id of the item")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Item updated", body = serde_json::Value),
        (status = 400, description = "Invalid id, invalid JSON, or id change attempted", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse),
        (status = 500, description = "Data file could not be written", body = ErrorResponse)
    ),
    tag = "shopping-list"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let Path(id_str) = path?;
    let id = parse_item_id(&id_str)?;
    tracing::debug!("Received data for update of {}: {}", id, String::from_utf8_lossy(&body));

    let patch = parse_object_body(&body).inspect_err(|err| {
        tracing::warn!("Rejected update request for {}: {:?}", id, err);
    })?;

    if let Some(body_id) = patch.get(ID_FIELD) {
        if body_id.as_i64() != Some(id) {
            return Err(ApiError::IdMismatch {
                path: id,
                body: body_id.clone(),
            });
        }
    }

    match state.store.update(id, patch).await? {
        Some(item) => {
            tracing::info!("Updated item with id: {}", id);
            Ok((StatusCode::OK, Json(item)))
        }
        None => {
            tracing::info!("Item not found for update: {}", id);
            Err(ApiError::ItemNotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::test_support::*;
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_update_endpoint_merges() {
        let (app, storage) = setup_test_app(json!([
            {"id": 1, "name": "milk", "qty": 2},
            {"id": 2, "name": "bread"}
        ]));

        let response = app
            .oneshot(json_request("PUT", "/shopping-list/1", r#"{"qty": 3}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": 1, "name": "milk", "qty": 3})
        );
        assert_eq!(
            stored(&storage),
            json!([
                {"id": 1, "name": "milk", "qty": 3},
                {"id": 2, "name": "bread"}
            ])
        );
    }

    #[tokio::test]
    async fn test_update_endpoint_adds_and_replaces_nested() {
        let (app, _) = setup_test_app(json!([
            {"id": 4, "name": "cheese", "meta": {"aisle": 2, "brand": "x"}}
        ]));

        let response = app
            .oneshot(json_request(
                "PUT",
                "/shopping-list/4",
                r#"{"meta": {"aisle": 5}, "done": true}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": 4, "name": "cheese", "meta": {"aisle": 5}, "done": true})
        );
    }

    #[tokio::test]
    async fn test_update_endpoint_not_found() {
        let items = json!([{"id": 1, "name": "milk"}]);
        let (app, storage) = setup_test_app(items.clone());

        let response = app
            .oneshot(json_request("PUT", "/shopping-list/42", r#"{"qty": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({"error": "Item not found"}));
        assert_eq!(stored(&storage), items);
    }

    #[tokio::test]
    async fn test_update_endpoint_invalid_json() {
        let items = json!([{"id": 1, "name": "milk"}]);
        let (app, storage) = setup_test_app(items.clone());

        let response = app
            .oneshot(json_request("PUT", "/shopping-list/1", "{invalid json}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid JSON");
        assert_eq!(stored(&storage), items);
    }

    #[tokio::test]
    async fn test_update_endpoint_invalid_id() {
        let (app, _) = setup_test_app(json!([{"id": 1, "name": "milk"}]));

        let response = app
            .oneshot(json_request("PUT", "/shopping-list/milk", r#"{"qty": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Invalid item id");
    }

    #[tokio::test]
    async fn test_update_endpoint_same_id_in_body() {
        let (app, _) = setup_test_app(json!([{"id": 1, "name": "milk"}]));

        let response = app
            .oneshot(json_request("PUT", "/shopping-list/1", r#"{"id": 1, "qty": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"id": 1, "name": "milk", "qty": 1})
        );
    }

    #[tokio::test]
    async fn test_update_endpoint_rejects_id_change() {
        let items = json!([{"id": 1, "name": "milk"}]);
        let (app, storage) = setup_test_app(items.clone());

        let response = app
            .oneshot(json_request("PUT", "/shopping-list/1", r#"{"id": 2}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Item id cannot be changed");
        assert_eq!(stored(&storage), items);
    }

    #[tokio::test]
    async fn test_update_endpoint_undecodable_id() {
        let (app, _) = setup_test_app(json!([{"id": 1, "name": "milk"}]));

        let response = app
            .oneshot(json_request("PUT", "/shopping-list/%FF", r#"{"qty": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()["content-type"], "application/json");
        let error = body_json(response).await;
        assert_eq!(error["error"], "Invalid item id");
        assert!(error["details"].is_string());
    }
}

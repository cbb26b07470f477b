pub mod health;
pub mod list;
pub mod create;
pub mod update;
pub mod delete;
pub mod fallback;
pub mod openapi;

pub use health::health_handler;
pub use list::list_handler;
pub use create::create_handler;
pub use update::update_handler;
pub use delete::delete_handler;
pub use fallback::fallback_handler;
pub use openapi::openapi_handler;

#[cfg(test)]
pub(crate) mod test_support {
    use crate::routes;
    use crate::shopping_list::ShoppingList;
    use crate::state::AppState;
    use crate::store::{MemoryStorage, ShoppingListStore, Storage};
    use axum::{body::Body, http::Request, Router};
    use std::sync::Arc;

    /// Full router over an in-memory store, plus the storage for inspection
    pub fn setup_test_app(initial: serde_json::Value) -> (Router, Arc<MemoryStorage>) {
        let list: ShoppingList = serde_json::from_value(initial).unwrap();
        setup_with_storage(Arc::new(MemoryStorage::with_items(list)))
    }

    pub fn setup_with_storage(storage: Arc<MemoryStorage>) -> (Router, Arc<MemoryStorage>) {
        let state = AppState {
            store: ShoppingListStore::new(storage.clone() as Arc<dyn Storage>),
        };
        (routes::router(state), storage)
    }

    pub fn json_request(method: &str, uri: &str, body: impl Into<Body>) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap()
    }

    pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    pub fn stored(storage: &MemoryStorage) -> serde_json::Value {
        serde_json::to_value(storage.load()).unwrap()
    }
}

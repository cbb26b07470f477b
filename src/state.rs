use crate::store::ShoppingListStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ShoppingListStore,
}

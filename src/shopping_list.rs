use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Name of the server-owned identifier field
pub const ID_FIELD: &str = "id";

/// A single shopping list entry
///
/// Stored exactly as the JSON object it was read from, so records written
/// without an `id` (or with an odd one) survive a rewrite untouched and keys
/// keep their original position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item {
    fields: Map<String, JsonValue>,
}

impl Item {
    /// Build an item from a client payload. The server id goes first; any
    /// `id` in the payload is discarded.
    pub fn new(id: i64, payload: Map<String, JsonValue>) -> Self {
        let mut fields = Map::with_capacity(payload.len() + 1);
        fields.insert(ID_FIELD.to_string(), JsonValue::from(id));
        fields.extend(payload.into_iter().filter(|(key, _)| key != ID_FIELD));
        Self { fields }
    }

    /// Integer id, if the record carries one that fits an `i64`
    pub fn id(&self) -> Option<i64> {
        self.fields.get(ID_FIELD).and_then(JsonValue::as_i64)
    }

    #[cfg(test)]
    pub fn fields(&self) -> &Map<String, JsonValue> {
        &self.fields
    }

    /// Shallow merge: top-level fields of `patch` replace or extend ours.
    /// Nested values are replaced wholesale. `id` is never touched.
    pub fn merge(&mut self, patch: Map<String, JsonValue>) {
        for (key, value) in patch {
            if key == ID_FIELD {
                continue;
            }
            self.fields.insert(key, value);
        }
    }
}

/// The whole persisted collection, serialized as a bare JSON array
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    #[cfg(test)]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Next identifier: one past the largest positive id in use, or 1.
    /// Records without a usable id count as 0. `None` once ids run out.
    pub fn next_id(&self) -> Option<i64> {
        self.items
            .iter()
            .filter_map(Item::id)
            .fold(0, i64::max)
            .checked_add(1)
    }

    /// Append a new item with a freshly assigned id and return it
    pub fn insert(&mut self, payload: Map<String, JsonValue>) -> Option<Item> {
        let item = Item::new(self.next_id()?, payload);
        self.items.push(item.clone());
        Some(item)
    }

    /// Shallow-merge `patch` into the item with `id`, returning the result
    pub fn update(&mut self, id: i64, patch: Map<String, JsonValue>) -> Option<Item> {
        let item = self.items.iter_mut().find(|item| item.id() == Some(id))?;
        item.merge(patch);
        Some(item.clone())
    }

    /// Remove the item with `id`, keeping the order of the rest
    pub fn remove(&mut self, id: i64) -> Option<Item> {
        let index = self.items.iter().position(|item| item.id() == Some(id))?;
        Some(self.items.remove(index))
    }
}

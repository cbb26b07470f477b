use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::error::ApiError;
use crate::shopping_list::Item;

/// Response type for successful DELETE operations
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    #[serde(rename = "deletedItem")]
    #[schema(value_type = Object)]
    pub deleted_item: Item,
}

/// Parse a request body that must be a JSON object
pub fn parse_object_body(body: &[u8]) -> Result<Map<String, JsonValue>, ApiError> {
    match serde_json::from_slice::<JsonValue>(body)? {
        JsonValue::Object(fields) => Ok(fields),
        other => Err(ApiError::InvalidJson(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Parse the `{id}` path segment
pub fn parse_item_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse::<i64>()
        .map_err(|_| ApiError::InvalidId(format!("expected an integer id, got '{}'", raw)))
}

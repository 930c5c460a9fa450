pub mod activity;
pub mod api;
pub mod id;
pub mod item;
pub mod shopping_list;
pub mod store;
pub mod user;

use serde_json::Value;

/// Renders an optional loosely-typed API value for display, using `N/A` when it is missing.
///
/// The API reports prices and sale status either as typed values or as the literal string
/// `"N/A"`, so both arrive here as raw JSON.
pub fn display_or_na(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => "N/A".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

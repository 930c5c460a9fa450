use dioxus::prelude::*;
use serde_json::Value;

/// Loads `location` as a new page, the way the server-rendered pages link to each other.
pub fn navigate(location: &str) {
    let script = format!("window.location.href = {};", Value::from(location));
    let _ = document::eval(&script);
}

//! JSON bodies in the shapes the external API returns.

use serde_json::{json, Value};

pub fn store(id: i64, name: &str, location: &str) -> Value {
    json!({ "id": id, "name": name, "location": location })
}

/// An item as listed for one store, joined with that store's price
pub fn store_item(id: i64, name: &str, brand: &str, price: f64, sale_status: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "brand": brand,
        "tags": [],
        "price": price,
        "sale_status": sale_status,
    })
}

/// A shopping list entry; items without a known price are reported as `"N/A"`
pub fn shopping_list_entry(id: i64, name: &str, brand: &str, price: Option<f64>) -> Value {
    match price {
        Some(price) => json!({
            "id": id,
            "name": name,
            "brand": brand,
            "price": price,
            "sale_status": false,
        }),
        None => json!({
            "id": id,
            "name": name,
            "brand": brand,
            "price": "N/A",
            "sale_status": "N/A",
        }),
    }
}

pub fn activity(details: &str) -> Value {
    json!({ "details": details })
}

pub fn message(message: &str) -> Value {
    json!({ "message": message })
}

pub fn error(error: &str) -> Value {
    json!({ "error": error })
}

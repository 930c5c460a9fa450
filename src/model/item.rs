use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::id::ItemId;

/// A catalog item, optionally joined with the price reported at one store.
///
/// Items created by a barcode scan have no name until someone edits them, and the store
/// listing does not always include the id, so most fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub barcode: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub sale_status: Option<Value>,
}

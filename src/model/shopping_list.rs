use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::id::{ItemId, UserId};

/// Denormalized item snapshot held in a user's shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingListEntryDto {
    /// Id of the item this entry refers to
    pub id: ItemId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub sale_status: Option<Value>,
}

/// Body of `POST /api/shoppinglist`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AddToShoppingListDto {
    pub user_id: UserId,
    pub item_id: ItemId,
}

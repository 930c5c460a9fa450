//! Paths of the external API consumed by this client.

use crate::model::id::{ItemId, StoreId, UserId};

pub const CURRENT_USER: &str = "/api/current_user";
pub const SCAN: &str = "/api/scan";
pub const SHOPPING_LIST: &str = "/api/shoppinglist";
pub const STORES: &str = "/api/stores";
pub const CHANGE_PASSWORD: &str = "/api/changepassword";
pub const LOGIN: &str = "/login";
pub const CREATE_USER: &str = "/create_user";

/// `/<resource>` or `/<resource>/<id>` for the generic CRUD collections.
///
/// The id is inserted as typed; the API rejects malformed ones.
pub fn resource(collection: &str, id: Option<&str>) -> String {
    match id {
        Some(id) => format!("/{}/{}", collection, id.trim()),
        None => format!("/{}", collection),
    }
}

pub fn shopping_list(user_id: UserId) -> String {
    format!("{}/{}", SHOPPING_LIST, user_id)
}

pub fn shopping_list_remove(user_id: UserId, item_id: ItemId) -> String {
    format!("{}/{}/remove/{}", SHOPPING_LIST, user_id, item_id)
}

pub fn store_items(store_id: StoreId) -> String {
    format!("/api/store/{}/items", store_id)
}

pub fn item(item_id: ItemId) -> String {
    format!("/api/item/{}", item_id)
}

pub fn user_profile(user_id: UserId) -> String {
    format!("/api/users/{}", user_id)
}

pub fn activity_log(user_id: UserId) -> String {
    format!("/api/activitylogs/user/{}", user_id)
}

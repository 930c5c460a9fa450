mod new;
mod round_trip;
mod view;

use std::cell::RefCell;

use aisle_test_utils::prelude::*;
use serde_json::{json, Value};

use crate::{
    action::{parse_item_id, ShoppingListActions},
    api::{ApiRequest, ApiResponse, Method, Transport},
    error::Error,
    list::ListContainer,
    model::id::{ItemId, UserId},
    session::SessionContext,
    util::test::{transport, RecordingTransport},
};

fn session() -> SessionContext {
    SessionContext::Authenticated(UserId(TEST_USER_ID))
}

/// In-memory shopping list API for one user, answering the way the real one does
struct FakeShoppingListApi {
    catalog: Vec<Value>,
    list: RefCell<Vec<Value>>,
}

impl FakeShoppingListApi {
    fn new(list: Vec<Value>) -> Self {
        Self {
            catalog: vec![
                factory::shopping_list_entry(5, "Milk", "Dairyland", Some(1.29)),
                factory::shopping_list_entry(6, "Bread", "Bakehouse", Some(2.5)),
                factory::shopping_list_entry(7, "Eggs", "Farm", None),
            ],
            list: RefCell::new(list),
        }
    }

    fn ids(&self) -> Vec<i64> {
        self.list
            .borrow()
            .iter()
            .filter_map(|entry| entry["id"].as_i64())
            .collect()
    }
}

impl Transport for FakeShoppingListApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let list_path = format!("/api/shoppinglist/{}", TEST_USER_ID);
        let remove_prefix = format!("{}/remove/", list_path);

        match (request.method, request.path.as_str()) {
            (Method::Get, path) if path == list_path => {
                Ok(ApiResponse::new(200, Value::Array(self.list.borrow().clone())))
            }
            (Method::Post, "/api/shoppinglist") => {
                let body = request.body.unwrap_or_default();
                let entry = self
                    .catalog
                    .iter()
                    .find(|entry| entry["id"] == body["item_id"])
                    .cloned();

                match entry {
                    Some(entry) => {
                        self.list.borrow_mut().push(entry);
                        Ok(ApiResponse::new(
                            201,
                            factory::message("Item added to shopping list"),
                        ))
                    }
                    None => Ok(ApiResponse::new(404, factory::error("Item not found"))),
                }
            }
            (Method::Delete, path) if path.starts_with(&remove_prefix) => {
                let item_id: i64 = path[remove_prefix.len()..]
                    .parse()
                    .map_err(|_| Error::Transport("bad path".to_string()))?;
                let mut list = self.list.borrow_mut();
                if let Some(position) = list
                    .iter()
                    .position(|entry| entry["id"].as_i64() == Some(item_id))
                {
                    list.remove(position);
                }

                Ok(ApiResponse::new(
                    200,
                    factory::message("Item removed from shopping list"),
                ))
            }
            (_, path) => Ok(ApiResponse::new(
                404,
                json!({ "error": format!("No route {}", path) }),
            )),
        }
    }
}

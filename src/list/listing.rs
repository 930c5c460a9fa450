use serde_json::Value;

use crate::{
    api::endpoint,
    error::Error,
    list::{Action, Block, Listing, Renderable},
    model::{
        activity::{ActivityLogDto, ActivityLogEntryDto},
        display_or_na,
        id::{StoreId, UserId},
        item::ItemDto,
        shopping_list::ShoppingListEntryDto,
        store::StoreDto,
    },
};

fn text_or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "N/A".to_string())
}

/// All stores, each offering to list its items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stores;

impl Listing for Stores {
    type Entry = StoreDto;

    fn name(&self) -> &'static str {
        "stores"
    }

    fn path(&self) -> String {
        endpoint::STORES.to_string()
    }
}

impl Renderable for StoreDto {
    fn block(&self, _position: usize) -> Block {
        let id = self.id.to_string();

        Block::new(&id, "store-item", &self.name)
            .line("Location", text_or_na(&self.location))
            .action(Action::ViewItems, id)
    }
}

/// Items stocked by one store, with that store's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreItems {
    pub store_id: StoreId,
}

impl Listing for StoreItems {
    type Entry = ItemDto;

    fn name(&self) -> &'static str {
        "store items"
    }

    fn path(&self) -> String {
        endpoint::store_items(self.store_id)
    }
}

impl Renderable for ItemDto {
    fn block(&self, position: usize) -> Block {
        // An entry without id still renders; its action target is empty and rejected on click.
        let target = self.id.map(|id| id.to_string()).unwrap_or_default();
        let key = match self.id {
            Some(id) => id.to_string(),
            None => format!("position-{}", position),
        };

        Block::new(key, "item", text_or_na(&self.name))
            .line("Brand", text_or_na(&self.brand))
            .line("Price", display_or_na(&self.price))
            .line("Sale Status", display_or_na(&self.sale_status))
            .action(Action::AddToShoppingList, target)
    }
}

/// The logged in user's shopping list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShoppingList {
    pub user_id: UserId,
}

impl Listing for ShoppingList {
    type Entry = ShoppingListEntryDto;

    fn name(&self) -> &'static str {
        "shopping list"
    }

    fn path(&self) -> String {
        endpoint::shopping_list(self.user_id)
    }
}

impl Renderable for ShoppingListEntryDto {
    fn block(&self, _position: usize) -> Block {
        let id = self.id.to_string();

        Block::new(&id, "shopping-list-item", text_or_na(&self.name))
            .line("Brand", text_or_na(&self.brand))
            .line("Price", display_or_na(&self.price))
            .line("Sale Status", display_or_na(&self.sale_status))
            .action(Action::ViewItem, &id)
            .action(Action::RemoveItem, id)
    }
}

/// The logged in user's activity history, newest as the API orders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityLog {
    pub user_id: UserId,
}

impl Listing for ActivityLog {
    type Entry = ActivityLogEntryDto;

    fn name(&self) -> &'static str {
        "activity log"
    }

    fn path(&self) -> String {
        endpoint::activity_log(self.user_id)
    }

    fn extract(&self, body: Value) -> Result<Vec<Self::Entry>, Error> {
        let log: ActivityLogDto = serde_json::from_value(body)
            .map_err(|e| Error::InvalidBody(format!("Unexpected activity log shape: {}", e)))?;

        Ok(log.activities)
    }

    fn placeholder(&self) -> Option<&'static str> {
        Some("No Activity On Record")
    }
}

impl Renderable for ActivityLogEntryDto {
    fn block(&self, position: usize) -> Block {
        Block::new(position.to_string(), "activity", &self.details)
    }
}

mod render;

use aisle_test_utils::prelude::*;
use serde_json::json;

use crate::{
    error::Error,
    list::{
        Action, ActionTarget, ActivityLog, Block, Container, ListContainer, ListRenderer,
        Renderable, ShoppingList, StoreItems, Stores,
    },
    model::id::{StoreId, UserId},
    util::test::{transport, RecordingTransport},
};

//! Resource list rendering.
//!
//! A [`Listing`] names a collection endpoint and how its entries look; [`ListRenderer`] fetches
//! it and rebuilds a [`Container`] from scratch on every refresh, so the container never holds
//! a stale or duplicated block.

pub mod listing;

#[cfg(test)]
mod tests;

use std::collections::HashSet;

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{
    api::{ApiRequest, Transport},
    error::Error,
};

pub use listing::{ActivityLog, ShoppingList, StoreItems, Stores};

/// Per-entry action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Load the items of a store
    ViewItems,
    AddToShoppingList,
    /// Show one item's details
    ViewItem,
    RemoveItem,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::ViewItems => "View Items",
            Action::AddToShoppingList => "Add to Shopping List",
            Action::ViewItem => "View Item",
            Action::RemoveItem => "Remove Item",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Action::ViewItems => "view-items-btn",
            Action::AddToShoppingList => "add-to-cart-btn",
            Action::ViewItem => "btn-primary view-item-btn",
            Action::RemoveItem => "btn-danger remove-item-btn",
        }
    }
}

/// An action attached to a block, carrying the raw id it applies to.
///
/// The target is kept as text, the way it was rendered; handlers validate it on click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionTarget {
    pub action: Action,
    pub target: String,
}

/// One rendered entry of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Render key, unique within one rebuild
    pub key: String,
    /// Identifier of the entity the block shows; repeated entries share it
    pub id: String,
    pub class: &'static str,
    pub heading: String,
    /// Labelled lines, e.g. `("Brand", "Acme")`
    pub lines: Vec<(&'static str, String)>,
    pub actions: Vec<ActionTarget>,
}

impl Block {
    pub fn new(key: impl Into<String>, class: &'static str, heading: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            id: key.clone(),
            key,
            class,
            heading: heading.into(),
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    pub fn line(mut self, label: &'static str, value: impl Into<String>) -> Self {
        self.lines.push((label, value.into()));
        self
    }

    pub fn action(mut self, action: Action, target: impl Into<String>) -> Self {
        self.actions.push(ActionTarget {
            action,
            target: target.into(),
        });
        self
    }

    /// Single block shown in place of an empty collection
    pub fn placeholder(text: &str) -> Self {
        Self::new("placeholder", "placeholder", text)
    }
}

pub trait Renderable {
    /// Renders the entry found at `position` in the fetched collection.
    fn block(&self, position: usize) -> Block;
}

/// A collection endpoint rendered as a list.
pub trait Listing {
    type Entry: DeserializeOwned + Renderable;

    /// Name used in log lines
    fn name(&self) -> &'static str;

    fn path(&self) -> String;

    /// Pulls the entries out of a successful response body, a bare array by default.
    fn extract(&self, body: Value) -> Result<Vec<Self::Entry>, Error> {
        serde_json::from_value(body)
            .map_err(|e| Error::InvalidBody(format!("Unexpected {} shape: {}", self.name(), e)))
    }

    /// Text shown instead of an empty collection, if any
    fn placeholder(&self) -> Option<&'static str> {
        None
    }
}

/// Anything a list can be painted into.
pub trait Container {
    /// Replaces every block with `blocks`.
    fn rebuild(&mut self, blocks: Vec<Block>);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListContainer {
    blocks: Vec<Block>,
}

impl ListContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.key.as_str()).collect()
    }
}

impl Container for ListContainer {
    fn rebuild(&mut self, blocks: Vec<Block>) {
        self.blocks = blocks;
    }
}

pub struct ListRenderer<L: Listing> {
    listing: L,
}

impl<L: Listing> ListRenderer<L> {
    pub fn new(listing: L) -> Self {
        Self { listing }
    }

    pub fn listing(&self) -> &L {
        &self.listing
    }

    /// Fetches the collection.
    ///
    /// A body carrying an `error` field is returned as [`Error::Api`] whatever its status.
    pub async fn fetch<T: Transport>(&self, transport: &T) -> Result<Vec<L::Entry>, Error> {
        let response = transport
            .send(ApiRequest::get(self.listing.path()))
            .await?
            .into_result()?;

        self.listing.extract(response.body)
    }

    /// Renders a fetch outcome into `container`.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of entries rendered; the container was rebuilt from scratch
    /// - `Err(Error::Api)` - Logged; the container was cleared
    /// - `Err(Error::Transport)` / `Err(Error::InvalidBody)` - Logged; the container is untouched
    pub fn apply<C: Container>(
        &self,
        outcome: Result<Vec<L::Entry>, Error>,
        container: &mut C,
    ) -> Result<usize, Error> {
        match outcome {
            Ok(entries) => {
                container.rebuild(self.render(&entries));
                tracing::debug!("Rendered {} {} entries", entries.len(), self.listing.name());
                Ok(entries.len())
            }
            Err(e @ Error::Api { .. }) => {
                tracing::error!("Error fetching {}: {}", self.listing.name(), e);
                container.rebuild(self.render(&[]));
                Err(e)
            }
            Err(e) => {
                tracing::error!("Error fetching {}: {}", self.listing.name(), e);
                Err(e)
            }
        }
    }

    /// Fetches the collection and repaints `container` with it.
    pub async fn refresh<T: Transport, C: Container>(
        &self,
        transport: &T,
        container: &mut C,
    ) -> Result<usize, Error> {
        let outcome = self.fetch(transport).await;
        self.apply(outcome, container)
    }

    fn render(&self, entries: &[L::Entry]) -> Vec<Block> {
        if entries.is_empty() {
            return self
                .listing
                .placeholder()
                .map(Block::placeholder)
                .into_iter()
                .collect();
        }

        let mut seen = HashSet::new();
        entries
            .iter()
            .enumerate()
            .map(|(position, entry)| {
                let mut block = entry.block(position);
                // The same item can sit on a list twice
                if !seen.insert(block.key.clone()) {
                    block.key = format!("{}-{}", block.key, position);
                    seen.insert(block.key.clone());
                }
                block
            })
            .collect()
    }
}

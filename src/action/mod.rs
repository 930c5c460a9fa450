//! Cross-list actions.
//!
//! Buttons rendered by one list mutate the user's shopping list and then repaint it. The
//! repaint request is only issued once the mutation's response has been observed, so the
//! refreshed list always reflects the mutation.

#[cfg(test)]
mod tests;

use dioxus_logger::tracing;
use serde_json::json;

use crate::{
    api::{endpoint, ApiRequest, ApiResponse, Transport},
    error::Error,
    form::field::parse_integer,
    list::{Container, ListRenderer, ShoppingList},
    model::{
        id::{ItemId, UserId},
        item::ItemDto,
    },
    session::SessionContext,
};

/// Parses an id rendered into a list block.
///
/// Accepts what the list rendered, e.g. `"12"`; leading digits are enough. Anything else is
/// rejected and logged before a request could be made.
pub fn parse_id<I: From<i64>>(raw: &str) -> Result<I, Error> {
    parse_integer(raw).map(I::from).ok_or_else(|| {
        let e = Error::InvalidId(raw.to_string());
        tracing::error!("Rejected action: {}", e);
        e
    })
}

pub fn parse_item_id(raw: &str) -> Result<ItemId, Error> {
    parse_id(raw)
}

/// Shopping list mutations on behalf of the logged in user.
pub struct ShoppingListActions<'a, T: Transport> {
    transport: &'a T,
    user_id: UserId,
    renderer: ListRenderer<ShoppingList>,
}

impl<'a, T: Transport> ShoppingListActions<'a, T> {
    /// # Returns
    /// - `Ok(ShoppingListActions)` - The session is authenticated
    /// - `Err(Error::NotLoggedIn)` - Nobody is logged in, or the session is not resolved yet
    pub fn new(transport: &'a T, session: &SessionContext) -> Result<Self, Error> {
        let user_id = session.user_id().ok_or(Error::NotLoggedIn)?;

        Ok(Self {
            transport,
            user_id,
            renderer: ListRenderer::new(ShoppingList { user_id }),
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Repaints the shopping list into `container`.
    pub async fn refresh<C: Container>(&self, container: &mut C) -> Result<usize, Error> {
        self.renderer.refresh(self.transport, container).await
    }

    /// Adds an item to the shopping list, then repaints it.
    pub async fn add<C: Container>(
        &self,
        raw_item_id: &str,
        container: &mut C,
    ) -> Result<(), Error> {
        let item_id = parse_item_id(raw_item_id)?;
        tracing::info!("Adding item {} to shopping list of user {}", item_id, self.user_id);

        let request = ApiRequest::post(
            endpoint::SHOPPING_LIST,
            json!({ "user_id": self.user_id, "item_id": item_id }),
        );
        let response = self.mutate(request).await?;

        self.refresh_after(&response, container).await
    }

    /// Removes an item from the shopping list, then repaints it.
    pub async fn remove<C: Container>(
        &self,
        raw_item_id: &str,
        container: &mut C,
    ) -> Result<(), Error> {
        let item_id = parse_item_id(raw_item_id)?;
        tracing::info!("Removing item {} from shopping list of user {}", item_id, self.user_id);

        let request = ApiRequest::delete(endpoint::shopping_list_remove(self.user_id, item_id));
        let response = self.mutate(request).await?;

        self.refresh_after(&response, container).await
    }

    /// Fetches one item's details.
    pub async fn view(&self, raw_item_id: &str) -> Result<ItemDto, Error> {
        let item_id = parse_item_id(raw_item_id)?;

        let response = self
            .transport
            .send(ApiRequest::get(endpoint::item(item_id)))
            .await
            .and_then(ApiResponse::into_result)
            .inspect_err(|e| tracing::error!("Error fetching item {}: {}", item_id, e))?;

        response.parse()
    }

    async fn mutate(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        self.transport.send(request).await.inspect_err(|e| {
            tracing::error!("Error updating shopping list: {}", e);
        })
    }

    /// Repaints only when the mutation answered with a `message`.
    async fn refresh_after<C: Container>(
        &self,
        response: &ApiResponse,
        container: &mut C,
    ) -> Result<(), Error> {
        match response.message() {
            Some(message) => {
                tracing::info!("{}", message);
                self.refresh(container).await?;
                Ok(())
            }
            None => {
                let e = Error::from_response(response);
                tracing::error!("Error updating shopping list: {}", e);
                Err(e)
            }
        }
    }
}

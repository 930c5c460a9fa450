use dioxus::prelude::*;

use crate::{
    action::ShoppingListActions,
    api::ReqwasmTransport,
    list::{Action, ActionTarget, ListContainer},
    model::item::ItemDto,
    session::SessionContext,
};

/// Runs a shopping list action clicked in any list.
///
/// Failures are logged where they happen; the affected list simply stays as it was.
pub async fn dispatch_item_action(
    transport: ReqwasmTransport,
    session: SessionContext,
    target: ActionTarget,
    mut shopping_list: Signal<ListContainer>,
    mut viewed: Signal<Option<ItemDto>>,
) {
    let Ok(actions) = ShoppingListActions::new(&transport, &session) else {
        dioxus_logger::tracing::error!("User not logged in");
        return;
    };

    match target.action {
        Action::AddToShoppingList => {
            let _ = actions.add(&target.target, &mut shopping_list).await;
        }
        Action::RemoveItem => {
            let _ = actions.remove(&target.target, &mut shopping_list).await;
        }
        Action::ViewItem => {
            if let Ok(item) = actions.view(&target.target).await {
                viewed.set(Some(item));
            }
        }
        Action::ViewItems => {}
    }
}

use dioxus::prelude::*;

use crate::{
    api::ReqwasmTransport,
    client::{
        components::{ListView, Page},
        util::dispatch_item_action,
    },
    list::{self, ActionTarget, ListContainer, ListRenderer},
    model::{display_or_na, item::ItemDto},
    session::SessionContext,
};

#[component]
pub fn ShoppingList() -> Element {
    let transport = use_context::<ReqwasmTransport>();
    let session = use_context::<Signal<SessionContext>>();
    let mut shopping_list = use_signal(ListContainer::new);
    let viewed = use_signal(|| None::<ItemDto>);

    // Load once the session is resolved to a user
    {
        let transport = transport.clone();
        use_effect(move || {
            let Some(user_id) = session.read().user_id() else {
                return;
            };

            let transport = transport.clone();
            spawn(async move {
                let _ = ListRenderer::new(list::ShoppingList { user_id })
                    .refresh(&transport, &mut shopping_list)
                    .await;
            });
        });
    }

    let on_action = move |target: ActionTarget| {
        let transport = transport.clone();
        let session = *session.read();
        spawn(dispatch_item_action(transport, session, target, shopping_list, viewed));
    };

    rsx!(
        Page { title: "Shopping List",
            if *session.read() == SessionContext::Anonymous {
                p { "Login to see your shopping list." }
            }
            ListView { id: "shoppingList", container: shopping_list, on_action }
            ItemDetails { viewed }
        }
    )
}

/// Details of the item last opened with *View Item*.
#[component]
pub fn ItemDetails(viewed: Signal<Option<ItemDto>>) -> Element {
    let Some(item) = viewed.read().clone() else {
        return rsx!();
    };

    let name = item.name.clone().unwrap_or_else(|| "N/A".to_string());
    let brand = item.brand.clone().unwrap_or_else(|| "N/A".to_string());
    let barcode = item.barcode.clone().unwrap_or_else(|| "N/A".to_string());
    let tags = item.tags.join(", ");
    let price = display_or_na(&item.price);

    rsx!(
        div { id: "itemDetails", class: "card bg-base-200 p-4",
            h3 { class: "font-semibold", "{name}" }
            p { "Brand: {brand}" }
            p { "Barcode: {barcode}" }
            p { "Tags: {tags}" }
            p { "Price: {price}" }
        }
    )
}

use dioxus::prelude::*;

use crate::{
    action::parse_id,
    api::ReqwasmTransport,
    client::{
        components::{ListView, Page},
        routes::shopping_list::ItemDetails,
        util::dispatch_item_action,
    },
    list::{self, Action, ActionTarget, ListContainer, ListRenderer},
    model::{id::StoreId, item::ItemDto},
    session::SessionContext,
};

#[component]
pub fn Stores() -> Element {
    let transport = use_context::<ReqwasmTransport>();
    let session = use_context::<Signal<SessionContext>>();
    let mut stores = use_signal(ListContainer::new);
    let mut items = use_signal(ListContainer::new);
    let shopping_list = use_signal(ListContainer::new);
    let viewed = use_signal(|| None::<ItemDto>);

    let load_stores = {
        let transport = transport.clone();
        move |_: MouseEvent| {
            let transport = transport.clone();
            spawn(async move {
                let _ = ListRenderer::new(list::Stores)
                    .refresh(&transport, &mut stores)
                    .await;
            });
        }
    };

    let on_store_action = {
        let transport = transport.clone();
        move |target: ActionTarget| {
            if target.action != Action::ViewItems {
                return;
            }

            let Ok(store_id) = parse_id::<StoreId>(&target.target) else {
                return;
            };

            let transport = transport.clone();
            spawn(async move {
                let _ = ListRenderer::new(list::StoreItems { store_id })
                    .refresh(&transport, &mut items)
                    .await;
            });
        }
    };

    let on_item_action = move |target: ActionTarget| {
        let transport = transport.clone();
        let session = *session.read();
        spawn(dispatch_item_action(transport, session, target, shopping_list, viewed));
    };

    rsx!(
        Page { title: "Stores",
            div {
                button { class: "btn btn-primary", onclick: load_stores, "Load Stores" }
            }
            div { class: "grid gap-4 md:grid-cols-3",
                section {
                    h2 { class: "text-xl", "Stores" }
                    ListView { id: "storeList", container: stores, on_action: on_store_action }
                }
                section {
                    h2 { class: "text-xl", "Items" }
                    ListView { id: "itemList", container: items, on_action: on_item_action.clone() }
                }
                section {
                    h2 { class: "text-xl", "Shopping List" }
                    ListView {
                        id: "shoppingList",
                        container: shopping_list,
                        on_action: on_item_action,
                    }
                    ItemDetails { viewed }
                }
            }
        }
    )
}

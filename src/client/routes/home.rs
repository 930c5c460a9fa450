use dioxus::prelude::*;

use crate::{
    client::{
        components::{Page, ResourceSection},
        router::Route,
    },
    form::catalog,
};

#[component]
pub fn Home() -> Element {
    rsx!(
        Page { title: "Aisle",
            p {
                "Browse stores, keep a shopping list, and report prices by scanning barcodes."
            }
            ul { class: "flex flex-wrap gap-2",
                li { Link { to: Route::Stores {}, class: "btn btn-outline", "Stores" } }
                li {
                    Link { to: Route::ShoppingList {}, class: "btn btn-outline", "Shopping List" }
                }
                li { Link { to: Route::Scan {}, class: "btn btn-outline", "Scan an Item" } }
                li { Link { to: Route::Profile {}, class: "btn btn-outline", "Profile" } }
            }
            ResourceSection { forms: &catalog::USERS }
        }
    )
}

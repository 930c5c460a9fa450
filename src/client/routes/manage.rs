use dioxus::prelude::*;

use crate::{
    client::components::{Page, ResourceSection},
    form::catalog,
};

#[component]
pub fn ManageItems() -> Element {
    rsx!(
        Page { title: "Manage Items",
            ResourceSection { forms: &catalog::ITEMS }
        }
    )
}

#[component]
pub fn ManageStores() -> Element {
    rsx!(
        Page { title: "Manage Stores",
            ResourceSection { forms: &catalog::STORES }
        }
    )
}

#[component]
pub fn ManageShoppingLists() -> Element {
    rsx!(
        Page { title: "Manage Shopping Lists",
            ResourceSection { forms: &catalog::SHOPPING_LISTS }
        }
    )
}

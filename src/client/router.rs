use dioxus::prelude::*;

use crate::client::{
    components::Navbar,
    routes::{
        CreateAccount, Home, Login, ManageItems, ManageShoppingLists, ManageStores, NotFound,
        Profile, Scan, ShoppingList, Stores,
    },
};

/// Pages served by the API host; each path mounts one page.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/create_user")]
    CreateAccount {},

    #[route("/create_item")]
    ManageItems {},

    #[route("/create_store")]
    ManageStores {},

    #[route("/create_shoppinglist")]
    ManageShoppingLists {},

    #[route("/stores")]
    Stores {},

    #[route("/shopping_list")]
    ShoppingList {},

    #[route("/scan")]
    Scan {},

    #[route("/user")]
    Profile {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

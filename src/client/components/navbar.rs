use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBarcode, FaList, FaStore};
use dioxus_free_icons::Icon;

use crate::session::SessionContext;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    let session = use_context::<Signal<SessionContext>>();

    rsx! {
        div {
            class: "navbar bg-base-200",
            div {
                class: "navbar-start",
                Link { to: Route::Home {},
                    div { class: "flex items-center gap-2",
                        p { class: "text-xl",
                            "Aisle"
                        }
                        p { class: "text-xs",
                            "v0.1.0.Alpha-1"
                        }
                    }
                }
            }
            div {
                class: "navbar-center",
                ul { class: "menu menu-horizontal gap-1",
                    li {
                        Link { to: Route::Stores {},
                            Icon { width: 16, height: 16, icon: FaStore }
                            "Stores"
                        }
                    }
                    li {
                        Link { to: Route::ShoppingList {},
                            Icon { width: 16, height: 16, icon: FaList }
                            "Shopping List"
                        }
                    }
                    li {
                        Link { to: Route::Scan {},
                            Icon { width: 16, height: 16, icon: FaBarcode }
                            "Scan"
                        }
                    }
                    li { Link { to: Route::ManageItems {}, "Items" } }
                    li { Link { to: Route::ManageStores {}, "Manage Stores" } }
                    li { Link { to: Route::ManageShoppingLists {}, "Shopping Lists" } }
                }
            }
            div {
                class: "navbar-end",
                match *session.read() {
                    SessionContext::Authenticated(_) => rsx! {
                        Link { to: Route::Profile {}, class: "btn btn-ghost", "Profile" }
                        a { href: "/logout",
                            button { class: "btn btn-outline", "Logout" }
                        }
                    },
                    SessionContext::Anonymous => rsx! {
                        Link { to: Route::Login {}, class: "btn btn-primary", "Login" }
                        Link {
                            to: Route::CreateAccount {},
                            class: "btn btn-outline",
                            "Create Account"
                        }
                    },
                    SessionContext::Unresolved => rsx! {
                        div { class: "skeleton h-10 w-24" }
                    },
                }
            }
        }

        Outlet::<Route> {}
    }
}

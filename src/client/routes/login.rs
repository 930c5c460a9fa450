use dioxus::prelude::*;

use crate::{
    client::{
        components::{Page, ResourceForm},
        router::Route,
    },
    form::catalog,
};

#[component]
pub fn Login() -> Element {
    rsx!(
        Page { title: "Login", class: "items-center",
            ResourceForm { spec: &catalog::LOGIN }
            p {
                "No account yet? "
                Link { to: Route::CreateAccount {}, class: "link", "Create one" }
            }
        }
    )
}

#[component]
pub fn CreateAccount() -> Element {
    rsx!(
        Page { title: "Create Account", class: "items-center",
            ResourceForm { spec: &catalog::CREATE_ACCOUNT }
            p {
                "Already registered? "
                Link { to: Route::Login {}, class: "link", "Login" }
            }
        }
    )
}

use dioxus::prelude::*;

use crate::{
    client::components::{Page, ResourceForm, ScannerPanel},
    form::{catalog, FormValues},
};

#[component]
pub fn Scan() -> Element {
    let values = use_signal(FormValues::new);

    rsx!(
        Page { title: "Scan an Item",
            div { class: "flex flex-wrap gap-4",
                ScannerPanel { values }
                ResourceForm { spec: &catalog::SCAN, values }
            }
        }
    )
}

use dioxus::prelude::*;

/// Page body with the document title and a heading.
#[component]
pub fn Page(title: &'static str, class: Option<&'static str>, children: Element) -> Element {
    let class = class.unwrap_or("");

    rsx!(
        document::Title { "{title} | Aisle" }
        div {
            class: "min-h-screen p-4 flex flex-col gap-4 {class}",
            h1 { class: "text-2xl font-semibold",
                "{title}"
            }
            {children}
        }
    )
}

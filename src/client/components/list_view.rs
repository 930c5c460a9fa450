use dioxus::prelude::*;

use crate::list::{ActionTarget, Block, ListContainer};

/// Renders a list container; blocks are keyed so a rebuild never leaves stale ones behind.
#[component]
pub fn ListView(
    id: &'static str,
    container: Signal<ListContainer>,
    on_action: EventHandler<ActionTarget>,
) -> Element {
    let blocks = container.read().blocks().to_vec();

    rsx!(
        div { id, class: "flex flex-col gap-2",
            for block in blocks {
                BlockView { key: "{block.key}", block, on_action }
            }
        }
    )
}

#[component]
fn BlockView(block: Block, on_action: EventHandler<ActionTarget>) -> Element {
    rsx!(
        div {
            class: "{block.class} card bg-base-100 shadow-sm p-4",
            "data-id": "{block.id}",
            h3 { class: "font-semibold",
                "{block.heading}"
            }
            for (label, value) in block.lines.iter() {
                p { "{label}: {value}" }
            }
            if !block.actions.is_empty() {
                div { class: "flex gap-2 mt-2",
                    for target in block.actions.iter().cloned() {
                        ActionButton { target, on_action }
                    }
                }
            }
        }
    )
}

#[component]
fn ActionButton(target: ActionTarget, on_action: EventHandler<ActionTarget>) -> Element {
    let class = target.action.class();
    let label = target.action.label();

    rsx!(
        button {
            class: "btn btn-sm {class}",
            onclick: move |_| on_action.call(target.clone()),
            "{label}"
        }
    )
}

use dioxus::prelude::*;

use crate::{
    api::ReqwasmTransport,
    client::util::navigate,
    form::{catalog::ResourceForms, submit, FieldKind, FormSpec, FormValues},
    session::SessionContext,
};

/// A form bound to its endpoint, with the element its responses are written into.
///
/// Pass `values` to share the inputs with another component (the scanner writes the barcode
/// this way); otherwise the form keeps its own.
#[component]
pub fn ResourceForm(spec: &'static FormSpec, values: Option<Signal<FormValues>>) -> Element {
    let transport = use_context::<ReqwasmTransport>();
    let session = use_context::<Signal<SessionContext>>();
    let own_values = use_signal(FormValues::new);
    let values = values.unwrap_or(own_values);
    let mut result = use_signal(String::new);

    let onsubmit = move |event: FormEvent| {
        event.prevent_default();

        // Inputs are read now, at submission, never earlier
        let captured = values.read().clone();
        let session = *session.read();
        let transport = transport.clone();

        spawn(async move {
            if let Ok(outcome) = submit(&transport, spec, &captured, &session).await {
                result.set(outcome.display);

                if let Some(location) = outcome.navigate_to {
                    navigate(location);
                }
            }
        });
    };

    rsx!(
        div { class: "card bg-base-200 shadow-sm w-full max-w-96",
            div { class: "card-body",
                h3 { class: "card-title",
                    "{spec.title}"
                }
                form {
                    id: spec.name,
                    class: "flex flex-col gap-2",
                    onsubmit,
                    if let Some(id_input) = spec.id_input {
                        FieldInput {
                            input: id_input,
                            label: "ID",
                            kind: FieldKind::Text,
                            values,
                        }
                    }
                    for field in spec.fields.iter() {
                        FieldInput {
                            key: "{field.input}",
                            input: field.input,
                            label: field.label,
                            kind: field.kind,
                            values,
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        "{spec.submit_label()}"
                    }
                }
                div {
                    id: spec.result_element(),
                    class: "break-all text-sm",
                    "{result}"
                }
            }
        }
    )
}

#[component]
fn FieldInput(
    input: &'static str,
    label: &'static str,
    kind: FieldKind,
    mut values: Signal<FormValues>,
) -> Element {
    let value = values.read().get(input).to_string();

    if kind == FieldKind::Flag {
        return rsx!(
            label { class: "label cursor-pointer gap-2",
                input {
                    id: input,
                    r#type: "checkbox",
                    class: "checkbox",
                    checked: value == "true",
                    onchange: move |event: FormEvent| {
                        let checked = if event.checked() { "true" } else { "false" };
                        values.write().set(input, checked);
                    },
                }
                "{label}"
            }
        );
    }

    let input_type = if kind == FieldKind::Secret { "password" } else { "text" };

    rsx!(
        label { class: "floating-label",
            span { "{label}" }
            input {
                id: input,
                r#type: input_type,
                class: "input w-full",
                placeholder: label,
                value,
                oninput: move |event: FormEvent| values.write().set(input, event.value()),
            }
        }
    )
}

/// The four CRUD forms of one resource collection.
#[component]
pub fn ResourceSection(forms: &'static ResourceForms) -> Element {
    rsx!(
        section { class: "flex flex-col gap-2",
            h2 { class: "text-xl",
                "{forms.title}"
            }
            div { class: "flex flex-wrap gap-4",
                for spec in forms.all() {
                    ResourceForm { key: "{spec.name}", spec }
                }
            }
        }
    )
}

use dioxus::prelude::*;

use crate::{
    api::ReqwasmTransport,
    client::components::{ListView, Page, ResourceForm},
    form::catalog,
    list::{self, ActionTarget, ListContainer, ListRenderer},
    model::user::UserProfileDto,
    session::{fetch_profile, SessionContext},
};

#[component]
pub fn Profile() -> Element {
    let transport = use_context::<ReqwasmTransport>();
    let session = use_context::<Signal<SessionContext>>();
    let mut profile = use_signal(|| None::<UserProfileDto>);
    let mut activity = use_signal(ListContainer::new);

    use_effect(move || {
        let Some(user_id) = session.read().user_id() else {
            return;
        };

        let transport = transport.clone();
        spawn(async move {
            if let Ok(fetched) = fetch_profile(&transport, user_id).await {
                profile.set(Some(fetched));
            }

            let _ = ListRenderer::new(list::ActivityLog { user_id })
                .refresh(&transport, &mut activity)
                .await;
        });
    });

    let (email, reputation, badge) = match profile.read().as_ref() {
        Some(p) => (
            p.email.clone(),
            p.reputation.map(|r| r.to_string()).unwrap_or_default(),
            p.badge.clone().unwrap_or_default(),
        ),
        None => Default::default(),
    };

    rsx!(
        Page { title: "Profile",
            div { class: "card bg-base-200 p-4 max-w-96",
                p { "Email: " span { id: "email", "{email}" } }
                p { "Reputation: " span { id: "reputation", "{reputation}" } }
                p { "Badge: " span { id: "badge", "{badge}" } }
            }
            section {
                h2 { class: "text-xl", "Activity Log" }
                ListView {
                    id: "activityLog",
                    container: activity,
                    on_action: move |_: ActionTarget| {},
                }
            }
            ResourceForm { spec: &catalog::CHANGE_PASSWORD }
        }
    )
}

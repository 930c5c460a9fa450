use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    api::ReqwasmTransport,
    client::router::Route,
    config::Config,
    session::{resolve_session, SessionContext},
};

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        Config::from_env().unwrap_or_else(|e| {
            tracing::error!("Configuration error: {}", e);
            Config::default()
        })
    });

    let transport = use_context_provider(|| ReqwasmTransport::new(config.api_base_url.clone()));
    use_context_provider(|| config.scanner.clone());
    let mut session = use_context_provider(|| Signal::new(SessionContext::Unresolved));

    // Resolve the logged in user once per page load
    use_future(move || {
        let transport = transport.clone();
        async move {
            let resolved = resolve_session(&transport).await;
            session.write().settle(resolved);
        }
    });

    rsx! {
        Router::<Route> {}
    }
}

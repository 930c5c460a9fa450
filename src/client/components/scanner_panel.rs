use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    error::scanner::ScannerError,
    form::FormValues,
    scanner::{QuaggaDecoder, ScannerConfig, ScannerSession, ScannerState},
};

type Slot = Signal<Option<ScannerSession<QuaggaDecoder>>>;

/// Camera preview that fills the barcode input of `values` with the first code it decodes.
///
/// Scanning starts when the panel mounts; once a code was read the camera is released and
/// the scan can be restarted.
#[component]
pub fn ScannerPanel(values: Signal<FormValues>) -> Element {
    let config = use_context::<ScannerConfig>();
    let container_id = config.target.trim_start_matches('#').to_string();
    let slot: Slot = use_signal(|| Some(ScannerSession::new(QuaggaDecoder::new(), config)));
    let status = use_signal(ScannerState::default);

    use_hook(move || start_scan(slot, status, values));

    let running = matches!(*status.read(), ScannerState::Starting | ScannerState::Active);

    rsx!(
        document::Script { src: "https://cdn.jsdelivr.net/npm/quagga@0.12.1/dist/quagga.min.js" }
        div { class: "flex flex-col gap-2 items-start",
            div { id: container_id, class: "w-[480px] h-[320px] bg-base-300" }
            button {
                class: "btn btn-outline",
                disabled: running,
                onclick: move |_| start_scan(slot, status, values),
                if running { "Scanning..." } else { "Scan Again" }
            }
        }
    )
}

/// Runs one scan with the panel's session.
///
/// The session is taken out of its slot while it runs, so a second start finds the slot
/// empty and is refused.
fn start_scan(mut slot: Slot, mut status: Signal<ScannerState>, mut values: Signal<FormValues>) {
    spawn(async move {
        let Some(mut session) = slot.write().take() else {
            tracing::warn!("{}", ScannerError::AlreadyActive);
            return;
        };

        status.set(ScannerState::Starting);
        if session.start().await.is_ok() {
            status.set(session.state());
            let _ = session.scan(&mut values).await;
        }

        status.set(session.state());
        slot.set(Some(session));
    });
}

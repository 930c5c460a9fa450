#![allow(non_snake_case)]

#[cfg(feature = "web")]
use dioxus_logger::tracing::Level;

fn main() {
    #[cfg(feature = "web")]
    {
        if let Err(e) = dioxus_logger::init(Level::INFO) {
            eprintln!("Failed to initialize logger: {}", e);
        }

        dioxus::launch(aisle::client::App);
    }

    #[cfg(not(feature = "web"))]
    eprintln!("aisle runs in the browser; build it with the `web` feature");
}

//! Storefront Navbar - Main Entry Point
//!
//! Launches the Dioxus storefront with the navbar widget mounted in its layout.

use storefront_navbar::app::App;

// WASM entry point (browser) - dioxus::launch installs the console logger
#[cfg(target_arch = "wasm32")]
fn main() {
    web_sys::console::log_1(&"[WASM] Storefront navbar - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop)
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // Initialize tracing BEFORE dioxus::launch
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting storefront navbar...");
    dioxus::launch(App);
}

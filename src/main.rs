//! Video Search UI - Main Entry Point
//!
//! Serves the Dioxus application and forwards `/api/search` to the search
//! backend. Uses dioxus::serve() pattern for dx serve compatibility.

use video_search_ui::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::{Extension, extract::DefaultBodyLimit, routing::post};
    use video_search_ui::config::ServerConfig;
    use video_search_ui::handlers::{SearchProxyState, search_proxy_handler};

    // Initialize tracing BEFORE dioxus::serve
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServerConfig::from_env();
    tracing::info!(backend = %config.backend_url, "Starting Video Search UI...");

    dioxus::serve(move || {
        let proxy_state = SearchProxyState::new(&config);
        async move {
            let router = dioxus::server::router(App)
                // Image queries travel as base64 inside the JSON body
                .route("/api/search", post(search_proxy_handler))
                .layer(DefaultBodyLimit::max(25 * 1024 * 1024))
                .layer(Extension(proxy_state));

            Ok(router)
        }
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Video Search UI - WASM initialized!".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}

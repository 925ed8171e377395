//! Standalone search proxy (without Dioxus frontend)
//! Use this for API-only testing or when the UI is served elsewhere.
//!
//! Run with: cargo run --bin server --features server -- --backend-url http://localhost:8000

use axum::{Extension, Router, extract::DefaultBodyLimit, routing::post};
use clap::Parser;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use video_search_ui::config::{DEFAULT_BACKEND_URL, DEFAULT_PORT, ServerConfig};
use video_search_ui::handlers::{SearchProxyState, search_proxy_handler};

#[derive(Debug, Parser)]
#[command(name = "server", about = "Forward /api/search to a video search backend")]
struct Args {
    /// Base URL of the search backend
    #[arg(long, env = "SEARCH_BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = ServerConfig::with_backend(&args.backend_url);
    tracing::info!(backend = %config.backend_url, "Starting search proxy (standalone)...");

    let app = Router::new()
        .route("/api/search", post(search_proxy_handler))
        .layer(DefaultBodyLimit::max(25 * 1024 * 1024))
        .layer(Extension(SearchProxyState::new(&config)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

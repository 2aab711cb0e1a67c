//! hour-engine entry point.
//!
//! This file is intentionally thin: it sets up tracing, builds the shared
//! state, wires middleware, and starts the HTTP server. All route handlers
//! live in the library's `api` module.

use std::net::SocketAddr;

use hour_engine::api::{AppState, create_router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::{Level, info};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing();

    let state = AppState::in_memory();

    let app = create_router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_any_origin());

    let addr = bind_addr_from_env().unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080)));
    info!("hour-engine listening on http://{}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}

fn bind_addr_from_env() -> Option<SocketAddr> {
    std::env::var("HOUR_ENGINE_ADDR").ok()?.parse().ok()
}

/// CORS: the dashboard frontend may be served from any origin.
fn cors_any_origin() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

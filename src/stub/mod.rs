//! Local stand-in for the remote articles API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the same five endpoints the client talks to, backed by memory.
//! Used by `articles serve` during development and by the end-to-end tests,
//! which bind it to an ephemeral port.

pub mod handlers;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use state::StubState;

use crate::config::StubConfig;

/// Router with every stub endpoint.
pub fn app(state: StubState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/login", post(handlers::login))
        .route("/api/articles", post(handlers::create_article).get(handlers::list_articles))
        .route(
            "/api/articles/{id}",
            put(handlers::update_article).delete(handlers::delete_article),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the seeded stub until the process exits.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails.
pub async fn serve(config: StubConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "articles stub listening");
    axum::serve(listener, app(StubState::seeded())).await
}

/// Bind `addr` and serve in a background task, returning the bound address.
///
/// # Errors
///
/// Returns an error if `addr` cannot be bound.
pub async fn spawn(state: StubState, addr: &str) -> std::io::Result<SocketAddr> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app(state)).await {
            tracing::error!(error = %e, "stub server failed");
        }
    });
    Ok(local)
}

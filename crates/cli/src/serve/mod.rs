//! `mockup serve` -- HTTP JSON API for the mockup generator.
//!
//! Exposes the block generator as an async HTTP service using `axum` +
//! `tokio`. The server keeps no workspace state of its own: the client
//! posts its previous blocks with every request.
//!
//! Endpoints:
//! - GET  /                  - Starting workspace (hydrated from `?s=` if present)
//! - GET  /onboarding        - Walkthrough slides
//! - GET  /health            - Server status
//! - POST /api/generate      - Generate or refine blocks
//! - POST /api/mark-visited  - Set the `visited` cookie
//!
//! Unless disabled, first-time visitors are redirected to `/onboarding`.
//! All responses other than redirects use Content-Type: application/json.

mod handlers;
mod middleware;
mod state;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{middleware as axum_middleware, Json, Router};
use tower_http::cors::{Any, CorsLayer};

use self::handlers::{
    handle_generate, handle_health, handle_index, handle_mark_visited, handle_not_found,
    handle_onboarding,
};
use self::middleware::onboarding_gate_middleware;
use self::state::AppState;
use crate::config::ServerSettings;

/// Construct a JSON error response with the given status code and message.
fn json_error(status: StatusCode, message: &str) -> impl IntoResponse {
    (status, Json(serde_json::json!({"error": message})))
}

/// Build the application router.
fn router(settings: &ServerSettings) -> Router {
    let state = Arc::new(AppState {
        onboarding_gate: settings.onboarding_gate,
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_index))
        .route("/onboarding", get(handle_onboarding))
        .route("/health", get(handle_health))
        .route("/api/generate", post(handle_generate))
        .route("/api/mark-visited", post(handle_mark_visited))
        .fallback(handle_not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            onboarding_gate_middleware,
        ))
        .layer(cors)
        .layer(DefaultBodyLimit::max(settings.max_body_bytes))
        .with_state(state)
}

/// Start the HTTP server and run until Ctrl+C.
pub(crate) async fn start_server(
    settings: ServerSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = router(&settings);
    let addr = format!("{}:{}", settings.host, settings.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        onboarding_gate = settings.onboarding_gate,
        max_body_bytes = settings.max_body_bytes,
        "server settings"
    );
    eprintln!("Mockup generator listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    eprintln!("\nServer shut down.");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    eprintln!("\nReceived shutdown signal...");
}

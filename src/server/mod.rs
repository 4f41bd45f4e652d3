mod cors;
pub mod handlers;
mod types;

pub use cors::{ALLOWED_HEADERS, ALLOWED_METHODS, apply_cors_headers};
pub use handlers::AppState;
pub use types::{RelayRequest, RelayResponse};

use crate::{Result, config::Config, llm::OpenAiClient};
use axum::{Router, http::Request, middleware::from_fn};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

/// Every path and method is routed to the relay handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(handlers::relay)
        .with_state(state)
        .layer(from_fn(cors::cors_headers))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .map(str::to_string)
                    .unwrap_or_else(|| Uuid::new_v4().to_string());

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
}

pub async fn run(config: Config) -> Result<()> {
    if config.llm.credential().is_none() {
        warn!("OPENAI_API_KEY is not set; completion requests will fail until it is configured");
    }

    let client = OpenAiClient::new(&config.llm)?;
    info!("Relaying completions to {}", client.endpoint());

    let app_state = AppState::new(config.llm.clone(), Arc::new(client));
    let app = build_router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

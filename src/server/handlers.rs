use super::types::{RelayRequest, RelayResponse};
use crate::{Error, Result, config::LlmConfig, llm::LlmClient};
use axum::{
    body::Body,
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub llm_config: Arc<LlmConfig>,
    pub client: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(llm_config: LlmConfig, client: Arc<dyn LlmClient>) -> Self {
        Self {
            llm_config: Arc::new(llm_config),
            client,
        }
    }
}

/// Largest request body the relay will buffer.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Relay endpoint. Mounted on every path and method.
///
/// The body is only read once the method is known to be POST, so preflight
/// and rejected methods never depend on body size.
pub async fn relay(State(state): State<AppState>, method: Method, body: Body) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }

    match complete(&state, &method, body).await {
        Ok(result) => (StatusCode::OK, Json(RelayResponse { result })).into_response(),
        Err(e) => {
            log_failure(&e);
            e.into_response()
        }
    }
}

async fn complete(state: &AppState, method: &Method, body: Body) -> Result<String> {
    if *method != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| Error::InvalidBody(format!("Failed to read body: {}", e)))?;

    let upstream = RelayRequest::parse(&body)?.into_upstream(&state.llm_config)?;

    if state.llm_config.credential().is_none() {
        return Err(Error::MissingCredential);
    }

    info!(
        "Relaying prompt ({} chars) to model {}",
        upstream.messages.last().map_or(0, |m| m.content.len()),
        upstream.model
    );

    let response = state.client.create_chat_completion(upstream).await?;
    response.first_content()
}

fn log_failure(e: &Error) {
    match e {
        e if e.is_client_error() => debug!("Rejected request: {}", e),
        Error::MissingCredential => warn!("Rejected request: {}", e),
        e => error!("Error processing request: {}", e),
    }
}

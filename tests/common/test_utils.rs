use super::mocks::MockLlmClient;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use prompt_relay::{
    config::{Config, GenerationDefaults, LlmConfig, LogsConfig, ServerConfig},
    server::{AppState, build_router},
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

pub const TEST_SYSTEM_PROMPT: &str = "You are a Rhino scripting assistant.";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: LlmConfig {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key: Some("test-api-key".to_string()),
            system_prompt: TEST_SYSTEM_PROMPT.to_string(),
            timeout_secs: None,
            defaults: GenerationDefaults::default(),
        },
    }
}

/// Build the full router around a mock client
pub fn create_test_app(client: Arc<MockLlmClient>, api_key: Option<&str>) -> Router {
    let mut llm = create_test_config().llm;
    llm.api_key = api_key.map(str::to_string);
    build_router(AppState::new(llm, client))
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Split a response into its status and raw body bytes
pub async fn read_response(response: Response<Body>) -> (StatusCode, Vec<u8>) {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

/// Assert that all CORS headers are present on a response
pub fn assert_cors_headers(response: &Response<Body>) {
    let headers = response.headers();
    assert_eq!(headers["access-control-allow-credentials"], "true");
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-methods"],
        "GET,OPTIONS,PATCH,DELETE,POST,PUT"
    );
    assert_eq!(
        headers["access-control-allow-headers"],
        "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version, Authorization"
    );
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await.unwrap();
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

llm:
  base_url: "http://localhost:4000/v1"
  api_key: "file-api-key"
  system_prompt: "Only answer with Python."
  timeout_secs: 45
  defaults:
    model: "gpt-4o"
    temperature: 0.3
    max_tokens: 512
"#;

/// Configuration without any llm section
pub const SERVER_ONLY_CONFIG_YAML: &str = r#"
server:
  port: 3000
"#;

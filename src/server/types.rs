use crate::{
    Error, Result,
    config::LlmConfig,
    llm::ChatCompletionRequest,
};
use serde::{Deserialize, Serialize};

/// Inbound body. Unknown fields are ignored; wrong types are rejected.
#[derive(Debug, Default, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RelayResponse {
    pub result: String,
}

impl RelayRequest {
    /// Parses a raw body. An empty body is the same as `{}`.
    pub fn parse(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| Error::InvalidBody(e.to_string()))
    }

    /// Builds the upstream request, filling omitted fields from the configured defaults.
    pub fn into_upstream(self, config: &LlmConfig) -> Result<ChatCompletionRequest> {
        let prompt = self
            .prompt
            .filter(|p| !p.is_empty())
            .ok_or(Error::MissingPrompt)?;

        if let Some(temperature) = self.temperature.filter(|t| !t.is_finite()) {
            return Err(Error::InvalidBody(format!(
                "temperature must be a finite number, got {}",
                temperature
            )));
        }

        Ok(ChatCompletionRequest::for_prompt(
            &config.system_prompt,
            &prompt,
            self.model.unwrap_or_else(|| config.defaults.model.clone()),
            self.temperature.unwrap_or(config.defaults.temperature),
            self.max_tokens.unwrap_or(config.defaults.max_tokens),
        ))
    }
}

use async_trait::async_trait;
use prompt_relay::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, LlmClient, ResponseMessage},
};
use std::sync::Mutex;

/// Mock LLM client that records every request it receives
#[derive(Debug, Default)]
pub struct MockLlmClient {
    pub responses: Mutex<Vec<ChatCompletionResponse>>,
    pub requests: Mutex<Vec<ChatCompletionRequest>>,
    pub error: Option<(Option<u16>, String)>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(self, content: &str) -> Self {
        self.responses.lock().unwrap().push(completion_response(content));
        self
    }

    pub fn with_responses(self, responses: Vec<ChatCompletionResponse>) -> Self {
        *self.responses.lock().unwrap() = responses;
        self
    }

    pub fn with_upstream_error(mut self, status: Option<u16>, message: &str) -> Self {
        self.error = Some((status, message.to_string()));
        self
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some((status, message)) = &self.error {
            return Err(Error::upstream(*status, message.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::internal("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

/// Build a single-choice completion response
pub fn completion_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "chatcmpl-test".to_string(),
        model: "gpt-4".to_string(),
        choices: vec![Choice {
            index: 0,
            message: ResponseMessage {
                content: Some(content.to_string()),
            },
            finish_reason: Some("stop".to_string()),
        }],
        usage: None,
    }
}

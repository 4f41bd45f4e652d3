use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

pub const MISSING_CREDENTIAL_HINT: &str =
    "Please set the OPENAI_API_KEY environment variable or llm.api_key in the configuration file";

const UNKNOWN_ERROR: &str = "An unknown error occurred";

#[derive(Error, Debug)]
pub enum Error {
    #[error("Method not allowed. Please use POST.")]
    MethodNotAllowed,

    #[error("Missing required field: prompt")]
    MissingPrompt,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("OpenAI API key not configured")]
    MissingCredential,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),

    #[error("OpenAI error: {0}")]
    OpenAi(#[from] async_openai::error::OpenAIError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Body of every non-success response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// True for errors caused by the caller rather than by the relay or upstream.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MethodNotAllowed | Self::MissingPrompt | Self::InvalidBody(_)
        )
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingPrompt | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Upstream {
                status: Some(status),
                ..
            } => StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Self::Network(e) => e.status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The JSON body sent to the caller for this error.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            Self::InvalidBody(detail) => ErrorBody {
                error: "Invalid request body".to_string(),
                message: Some(detail.clone()),
            },
            Self::MissingCredential => ErrorBody {
                error: self.to_string(),
                message: Some(MISSING_CREDENTIAL_HINT.to_string()),
            },
            _ => {
                let description = self.to_string();
                ErrorBody {
                    error: if description.trim().is_empty() {
                        UNKNOWN_ERROR.to_string()
                    } else {
                        description
                    },
                    message: None,
                }
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}

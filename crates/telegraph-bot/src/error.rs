use crate::bot::net::RawResponse;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::env::VarError;
use std::fmt;
use thiserror::Error;

/// Extra hints the API attaches to some failures
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group was migrated to a supergroup with this identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds left to wait before the request can be repeated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}

/// Failure reported inside an `{"ok": false}` envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error_code: Option<i64>,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_code {
            Some(code) => write!(f, "[{}] {}", code, self.description),
            None => write!(f, "{}", self.description),
        }
    }
}

impl std::error::Error for ApiError {}

/// Failure below HTTP: connection, TLS, timeout
#[derive(Debug, Error)]
pub enum TransportError {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),
    /// Streaming an upload from disk failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Other(String),
}

#[derive(Debug, Error)]
pub enum BotError {
    /// The request never produced a response
    #[error("Transport Error: {0}")]
    Transport(#[from] TransportError),
    /// Body did not match the expected envelope
    #[error("Decode Error: {source}")]
    Decode {
        source: serde_json::Error,
        response: RawResponse,
    },
    /// Non-2xx status; the envelope is attached when the body still decoded
    #[error("HTTP Status Error: {status}{}", describe(.api))]
    HttpStatus {
        status: StatusCode,
        api: Option<ApiError>,
        response: RawResponse,
    },
    /// `ok=false` on a successful status
    #[error("API Error: {error}")]
    Api {
        error: ApiError,
        response: RawResponse,
    },
    /// File resolution found nothing to download
    #[error("Not Found: {0}")]
    NotFound(String),
    /// Request encoding error
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// URL query encoding error
    #[error("URL Parameters Error: {0}")]
    UrlParams(#[from] serde_url_params::Error),
    #[error("URL Error: {0}")]
    Url(#[from] url::ParseError),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Validation Error: {0}")]
    Validation(String),
}

fn describe(api: &Option<ApiError>) -> String {
    api.as_ref().map(|e| format!(": {e}")).unwrap_or_default()
}

impl BotError {
    /// Raw transport response, when the request got that far
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            BotError::Decode { response, .. }
            | BotError::HttpStatus { response, .. }
            | BotError::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    /// HTTP status of the raw response
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    /// Envelope error, from either a 2xx or a non-2xx response
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            BotError::Api { error, .. } => Some(error),
            BotError::HttpStatus { api, .. } => api.as_ref(),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for BotError {
    fn from(err: toml::de::Error) -> Self {
        BotError::Config(err.to_string())
    }
}

impl From<VarError> for BotError {
    fn from(err: VarError) -> Self {
        BotError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;

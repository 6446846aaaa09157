use serde_json::Value;
use thiserror::Error;

/// Shown when neither the response body nor the error itself carries a message.
pub const FALLBACK_ERROR_MESSAGE: &str = "Unexpected error";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("{0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request failed with status code {status}")]
    Status { status: u16, body: Option<Value> },
    /// A 2xx response whose body could not be decoded.
    #[error("{0}")]
    Decode(String),
}

impl ApiError {
    pub fn status(status: u16, body: Option<Value>) -> Self {
        ApiError::Status { status, body }
    }

    /// `message` string carried by an error response body, if any.
    pub fn body_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { body: Some(body), .. } => body
                .get("message")
                .and_then(Value::as_str)
                .filter(|message| !message.trim().is_empty()),
            _ => None,
        }
    }

    fn own_message(&self) -> Option<&str> {
        match self {
            ApiError::Network(message) | ApiError::Decode(message) => {
                Some(message.as_str()).filter(|message| !message.trim().is_empty())
            }
            ApiError::Status { .. } => None,
        }
    }

    /// Text shown to the user: body message, then the error's own message,
    /// then [`FALLBACK_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        self.body_message()
            .or_else(|| self.own_message())
            .unwrap_or(FALLBACK_ERROR_MESSAGE)
            .to_string()
    }
}

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

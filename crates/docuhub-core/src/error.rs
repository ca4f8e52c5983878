//! Error types for the DocuHub core library.

use thiserror::Error;

/// Result type alias using `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failures of a call against the document API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the bearer token (HTTP 401).
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success HTTP status.
    #[error("HTTP error! status: {status} - {}", describe_detail(.detail))]
    Http { status: u16, detail: Option<String> },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

fn describe_detail(detail: &Option<String>) -> &str {
    detail.as_deref().unwrap_or("no details provided")
}

impl ApiError {
    /// Create an HTTP status error.
    pub fn http(status: u16, detail: Option<String>) -> Self {
        Self::Http { status, detail }
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Whether this error means the session is no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

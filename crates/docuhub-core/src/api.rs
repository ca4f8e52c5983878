//! Document API layout and response handling.
//!
//! The transport itself is provided by the caller (gloo-net in the browser,
//! in-memory fakes in tests); this module only knows URLs, headers and how to
//! turn a status code plus body into a typed result.

use std::future::Future;

use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    config::EditorConfig,
    error::{ApiError, Result},
    model::{DocumentContent, SaveReceipt, TreeNode},
};

/// Backend operations the controller needs.
pub trait DocumentApi {
    /// `GET .../tree`
    fn fetch_tree(&self, token: &str) -> impl Future<Output = Result<Vec<TreeNode>>>;

    /// `GET .../content/{path}`
    fn fetch_content(
        &self,
        token: &str,
        path: &str,
    ) -> impl Future<Output = Result<DocumentContent>>;

    /// `POST .../content/{path}` with `{ content }`.
    fn save_content(
        &self,
        token: &str,
        path: &str,
        content: &str,
    ) -> impl Future<Output = Result<SaveReceipt>>;

    /// `POST /api/v1/documents/publish`
    fn publish(&self, token: &str) -> impl Future<Output = Result<SaveReceipt>>;
}

/// URL builder for the document endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
    documents: String,
}

impl Endpoints {
    pub fn new(config: &EditorConfig) -> Self {
        let base = config.api_base.trim_end_matches('/').to_string();
        let documents = format!("{base}/api/v1/{}", config.endpoint_style.segment());
        Self { base, documents }
    }

    pub fn tree(&self) -> String {
        format!("{}/tree", self.documents)
    }

    /// Content URL of `path`; each segment is percent-encoded.
    pub fn content(&self, path: &str) -> String {
        format!("{}/content/{}", self.documents, encode_path(path))
    }

    pub fn publish(&self) -> String {
        format!("{}/api/v1/documents/publish", self.base)
    }
}

/// Percent-encode each segment of `path`; separators and empty segments are
/// kept as given.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Value of the `Authorization` header.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Map a non-success status to an error; 2xx passes.
pub fn check_status(status: u16, body: &str) -> Result<()> {
    match status {
        200..=299 => Ok(()),
        401 => Err(ApiError::Unauthorized),
        _ => Err(ApiError::http(status, error_detail(body))),
    }
}

/// Server-provided `detail` of an error body, if any.
fn error_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Check the status and decode a JSON body.
pub fn parse_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T> {
    check_status(status, body)?;
    serde_json::from_str(body).map_err(|e| ApiError::decode(e.to_string()))
}

/// Like [`parse_response`] but tolerates an empty or non-JSON success body.
pub fn parse_receipt(status: u16, body: &str) -> Result<SaveReceipt> {
    check_status(status, body)?;
    if body.trim().is_empty() {
        return Ok(SaveReceipt::default());
    }
    Ok(serde_json::from_str(body).unwrap_or_default())
}

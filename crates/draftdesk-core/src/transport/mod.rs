//! HTTP transport for form submissions.
//!
//! `Transport` is the seam the controller talks to; `CurlTransport` does the
//! real work with libcurl. Calls block the current thread, so async callers
//! run them under `spawn_blocking`.

mod curl_transport;
mod headers;

pub use curl_transport::CurlTransport;

use std::path::PathBuf;
use url::Url;

use crate::multipart::FormBody;

/// What came back from the server, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u32,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u32, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    pub fn json(status: u32, body: impl Into<Vec<u8>>) -> Self {
        Self::new(status, Some("application/json"), body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the server declared a JSON body.
    pub fn is_structured(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.to_ascii_lowercase().contains("application/json"))
            .unwrap_or(false)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The request could not be completed; no HTTP status is available.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    #[error("could not build multipart body: {0}")]
    Form(#[from] curl::FormError),
    #[error("attachment '{name}' can no longer be read at {}", .path.display())]
    Attachment { name: String, path: PathBuf },
    #[error("request task failed: {0}")]
    Task(String),
}

pub trait Transport: Send + Sync + 'static {
    /// POSTs `body` as multipart/form-data and returns the raw response,
    /// whatever its status.
    fn post_form(&self, url: &Url, body: &FormBody) -> Result<RawResponse, TransportError>;

    fn get(&self, url: &Url) -> Result<RawResponse, TransportError>;
}

// envelope-client/src/http/mod.rs
use async_trait::async_trait;

use crate::envelope::ResponseEnvelope;
use crate::request::RequestDescriptor;

/// Status line of an HTTP response that did arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseParts {
    pub status: u16,
    pub status_text: String,
}

/// Failure below the envelope layer: connection errors, non-2xx HTTP
/// statuses, and envelope decode failures.
#[derive(Debug, Clone)]
pub struct TransportError {
    pub method: &'static str,
    pub url: String,
    /// `None` when the request never produced an HTTP response.
    pub response: Option<ResponseParts>,
    pub message: String,
}

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(parts) = &self.response {
            write!(
                f,
                "{} {} failed with HTTP {}: {}",
                self.method, self.url, parts.status, self.message
            )
        } else {
            write!(f, "{} {} failed: {}", self.method, self.url, self.message)
        }
    }
}

impl std::error::Error for TransportError {}

/// The transport collaborator. Implementations perform the network call,
/// attach credentials, and decode the JSON envelope; users can bring their
/// own.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(
        &self,
        url: &str,
        request: &RequestDescriptor,
    ) -> Result<ResponseEnvelope, TransportError>;
}

/// Transport construction settings, fixed for the lifetime of the client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Attach session credentials (cookies) to every request.
    pub include_credentials: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            include_credentials: true,
        }
    }
}

#[cfg(feature = "reqwest")]
pub mod reqwest;

#[cfg(feature = "reqwest")]
pub use self::reqwest::ReqwestTransport;

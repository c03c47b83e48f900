//! Driven port for plain HTTP GET requests against upstream services.
use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by the HTTP transport adapter.
    pub enum HttpFetchError {
        /// The request never produced a response.
        Transport { message: String } => "HTTP GET failed: {message}",
        /// The request exceeded the client timeout.
        Timeout { message: String } => "HTTP GET timed out: {message}",
        /// Upstream answered with a non-success status.
        Status { status: u16, preview: String } =>
            "HTTP GET returned status {status}: {preview}",
    }
}

/// Port performing a single GET and returning the raw response body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpFetch: Send + Sync {
    /// Fetch `url` and return its body as text.
    async fn get(&self, url: &str) -> Result<String, HttpFetchError>;
}

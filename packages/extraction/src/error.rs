//! Typed errors for the extraction library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so the server can
//! decide what to expose to callers; upstream failure detail stays in logs.

use thiserror::Error;

/// Errors that can occur while fetching a page or image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP transport failure, including timeouts
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream responded with a non-success status
    #[error("upstream returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

impl FetchError {
    /// Whether the failure was a client-side timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Http(e) if e.is_timeout())
    }
}

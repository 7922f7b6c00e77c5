//! Video manifest retrieval.
//!
//! A [`VideoFormat`] selects one of three manifest files on the configured
//! host; [`ManifestFetcher`] issues a single GET for it and hands the decoded
//! JSON back untouched.

pub mod endpoints;
pub mod fetcher;
pub mod format;

use async_trait::async_trait;
use thiserror::Error;

pub use endpoints::ManifestEndpoints;
pub use fetcher::ManifestFetcher;
pub use format::VideoFormat;

/// Manifest body as returned by the remote host. Its shape is not checked.
pub type ManifestResponse = serde_json::Value;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("unknown video format `{0}` (expected mp4, hls or dash)")]
    UnknownFormat(String),

    #[error("invalid manifest base url `{url}`: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Connection errors, non-2xx statuses and undecodable bodies.
    #[error("manifest request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch(&self, format: VideoFormat) -> Result<ManifestResponse, FetchError>;

    /// Parses a textual selector first; unknown selectors never reach the network.
    async fn fetch_named(&self, selector: &str) -> Result<ManifestResponse, FetchError> {
        let format: VideoFormat = selector.parse()?;
        self.fetch(format).await
    }
}

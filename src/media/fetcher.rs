use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::{FetchError, ManifestEndpoints, ManifestResponse, ManifestSource, VideoFormat};
use crate::{common::HttpClient, configs::MediaConfig};

/// Fetches manifests over HTTP. Holds no mutable state, so one instance can
/// serve any number of concurrent calls.
#[derive(Debug, Clone)]
pub struct ManifestFetcher {
    client: Client,
    endpoints: ManifestEndpoints,
}

impl ManifestFetcher {
    pub fn new(client: Client, endpoints: ManifestEndpoints) -> Self {
        Self { client, endpoints }
    }

    pub fn from_config(config: &MediaConfig) -> Result<Self, FetchError> {
        let endpoints = ManifestEndpoints::new(&config.base_url)?;
        let client = HttpClient::new(config)?;
        Ok(Self::new(client, endpoints))
    }

    pub fn endpoints(&self) -> &ManifestEndpoints {
        &self.endpoints
    }

    async fn request(&self, url: &Url) -> Result<ManifestResponse, reqwest::Error> {
        self.client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await
    }
}

#[async_trait]
impl ManifestSource for ManifestFetcher {
    async fn fetch(&self, format: VideoFormat) -> Result<ManifestResponse, FetchError> {
        let url = self.endpoints.url_for(format);
        debug!("GET {} ({})", url, format);

        self.request(url).await.map_err(|e| {
            warn!("Fetching {} manifest from {} failed: {}", format, url, e);
            FetchError::Transport(e)
        })
    }
}

use std::sync::Arc;

use crate::{
    common::types::AnyResult,
    configs::Config,
    media::{ManifestFetcher, ManifestSource},
    navigation::RouteTable,
};

/// Top-level application state.
pub struct AppState {
    pub config: Config,
    pub source: Arc<dyn ManifestSource>,
    pub routes: RouteTable,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn ManifestSource>) -> Self {
        let routes = RouteTable::default_routes(source.clone());
        Self {
            config,
            source,
            routes,
        }
    }

    /// Wires the HTTP fetcher from the `[media]` section.
    pub fn from_config(config: Config) -> AnyResult<Self> {
        let fetcher = ManifestFetcher::from_config(&config.media)?;
        Ok(Self::new(config, Arc::new(fetcher)))
    }
}

use std::time::Duration;

use reqwest::{Client, Error};

use crate::configs::MediaConfig;

const DEFAULT_USER_AGENT: &str = concat!("mediaview/", env!("CARGO_PKG_VERSION"));

pub struct HttpClient;

impl HttpClient {
    pub fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }

    /// Builds the shared client. No timeout is applied unless configured.
    pub fn new(config: &MediaConfig) -> Result<Client, Error> {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(Self::default_user_agent);

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_MANIFEST_BASE: &str = "http://101.43.161.79:9002/media/";

/// Where manifests are fetched from and how the HTTP client is built.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MediaConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout. Unset means the transport default (none).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl MediaConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            user_agent: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_MANIFEST_BASE.to_string()
}

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::FetchError;

/// Streaming format of a manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoFormat {
    Mp4,
    Hls,
    Dash,
}

impl VideoFormat {
    pub const ALL: [VideoFormat; 3] = [Self::Mp4, Self::Hls, Self::Dash];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp4 => "mp4",
            Self::Hls => "hls",
            Self::Dash => "dash",
        }
    }

    /// File name of the manifest relative to the manifest base URL.
    pub fn manifest_file(&self) -> &'static str {
        match self {
            Self::Mp4 => "mp4.json",
            Self::Hls => "hls.json",
            Self::Dash => "dash.json",
        }
    }

    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for VideoFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VideoFormat {
    type Err = FetchError;

    /// Selectors are matched exactly; `MP4` is not `mp4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| FetchError::UnknownFormat(s.to_string()))
    }
}

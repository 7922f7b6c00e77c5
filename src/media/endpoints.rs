use reqwest::Url;

use super::{FetchError, VideoFormat};

/// The manifest URL for every format, resolved once against the base URL.
#[derive(Debug, Clone)]
pub struct ManifestEndpoints {
    base: Url,
    urls: [Url; 3],
}

impl ManifestEndpoints {
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let mut base = Url::parse(base_url).map_err(|e| FetchError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "not a hierarchical URL".to_string(),
            });
        }

        // `join` replaces the last segment unless the path ends in a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let join = |format: VideoFormat| {
            base.join(format.manifest_file())
                .map_err(|e| FetchError::InvalidBaseUrl {
                    url: base_url.to_string(),
                    reason: e.to_string(),
                })
        };

        let urls = [
            join(VideoFormat::Mp4)?,
            join(VideoFormat::Hls)?,
            join(VideoFormat::Dash)?,
        ];

        Ok(Self { base, urls })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn url_for(&self, format: VideoFormat) -> &Url {
        &self.urls[format.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configs::DEFAULT_MANIFEST_BASE;

    #[test]
    fn default_host_table() {
        let endpoints = ManifestEndpoints::new(DEFAULT_MANIFEST_BASE).unwrap();
        assert_eq!(
            endpoints.url_for(VideoFormat::Mp4).as_str(),
            "http://101.43.161.79:9002/media/mp4.json"
        );
        assert_eq!(
            endpoints.url_for(VideoFormat::Hls).as_str(),
            "http://101.43.161.79:9002/media/hls.json"
        );
        assert_eq!(
            endpoints.url_for(VideoFormat::Dash).as_str(),
            "http://101.43.161.79:9002/media/dash.json"
        );
    }

    #[test]
    fn base_without_trailing_slash_is_a_directory() {
        let endpoints = ManifestEndpoints::new("http://localhost:9002/media").unwrap();
        assert_eq!(endpoints.base().as_str(), "http://localhost:9002/media/");
        assert_eq!(
            endpoints.url_for(VideoFormat::Hls).as_str(),
            "http://localhost:9002/media/hls.json"
        );
    }

    #[test]
    fn urls_differ_only_in_the_last_segment() {
        let endpoints = ManifestEndpoints::new(DEFAULT_MANIFEST_BASE).unwrap();
        for format in VideoFormat::ALL {
            let url = endpoints.url_for(format);
            assert_eq!(url.host_str(), Some("101.43.161.79"));
            assert_eq!(url.port(), Some(9002));
            assert_eq!(url.query(), None);
            assert_eq!(url.path_segments().unwrap().last(), Some(format.manifest_file()));
        }
    }

    #[test]
    fn rejects_unusable_base() {
        assert!(matches!(
            ManifestEndpoints::new("not a url"),
            Err(FetchError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ManifestEndpoints::new("mailto:ops@example.com"),
            Err(FetchError::InvalidBaseUrl { .. })
        ));
    }
}

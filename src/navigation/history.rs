use reqwest::Url;

const SCRATCH_ORIGIN: &str = "hash://local";

/// A location under hash-based history: the route lives in the URL fragment,
/// so `http://host/app/#/videos?type=hls` routes to `/videos`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashLocation {
    path: String,
    query: Vec<(String, String)>,
}

impl HashLocation {
    /// Reads the route out of a full URL. No fragment means the root route.
    pub fn parse(location: &str) -> Self {
        let fragment = location
            .split_once('#')
            .map(|(_, fragment)| fragment)
            .unwrap_or("");
        Self::from_fragment(fragment)
    }

    /// Builds a location from an already split path and raw query string.
    pub fn from_parts(path: &str, query: Option<&str>) -> Self {
        match query.filter(|q| !q.is_empty()) {
            Some(query) => Self::from_fragment(&format!("{path}?{query}")),
            None => Self::from_fragment(path),
        }
    }

    fn from_fragment(fragment: &str) -> Self {
        let fragment = fragment.trim();
        let rooted = if fragment.starts_with('/') {
            fragment.to_string()
        } else {
            format!("/{fragment}")
        };

        match Url::parse(&format!("{SCRATCH_ORIGIN}{rooted}")) {
            Ok(url) => Self {
                path: if url.path().is_empty() {
                    "/".to_string()
                } else {
                    url.path().to_string()
                },
                query: url.query_pairs().into_owned().collect(),
            },
            Err(_) => Self::root(),
        }
    }

    pub fn root() -> Self {
        Self {
            path: "/".to_string(),
            query: Vec::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    /// First value of a query parameter.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_comes_from_the_fragment() {
        let loc = HashLocation::parse("http://101.43.161.79:5173/app/#/videos");
        assert_eq!(loc.path(), "/videos");
        assert!(loc.query().is_empty());
    }

    #[test]
    fn server_path_is_ignored() {
        let loc = HashLocation::parse("http://portal/videos");
        assert_eq!(loc.path(), "/");
    }

    #[test]
    fn empty_fragment_is_root() {
        assert_eq!(HashLocation::parse("http://portal/#").path(), "/");
        assert_eq!(HashLocation::parse("http://portal/#/").path(), "/");
        assert_eq!(HashLocation::parse(""), HashLocation::root());
    }

    #[test]
    fn query_inside_fragment_is_decoded() {
        let loc = HashLocation::parse("http://portal/#/videos?type=hls&title=a%20b");
        assert_eq!(loc.path(), "/videos");
        assert_eq!(loc.param("type"), Some("hls"));
        assert_eq!(loc.param("title"), Some("a b"));
        assert_eq!(loc.param("missing"), None);
    }

    #[test]
    fn fragment_without_leading_slash() {
        assert_eq!(HashLocation::parse("http://portal/#videos").path(), "/videos");
    }

    #[test]
    fn from_parts_matches_parse() {
        assert_eq!(
            HashLocation::from_parts("/videos", Some("type=dash")),
            HashLocation::parse("http://portal/#/videos?type=dash")
        );
        assert_eq!(HashLocation::from_parts("/", Some("")), HashLocation::root());
    }
}

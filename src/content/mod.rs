// ContentStore - loads and owns the canonical dataset
//
// The store is populated once at startup (and replaced wholesale on reload).
// Every other component receives read-only slices; nothing outside this
// module mutates the bundle. The fetch appends a cache-busting query
// parameter derived from the current time so CMS updates are visible
// without manual cache invalidation.

pub mod model;

use chrono::Utc;
use std::fmt;
use std::path::PathBuf;

pub use model::{Article, ContentBundle, Dashboard, SiteConfig, Tool};

/// Where the bundle comes from
#[derive(Debug, Clone)]
pub enum BundleSource {
    /// HTTP(S) GET with a freshness-forcing query parameter
    Url(String),
    /// Local file read (no cache layer to bust)
    File(PathBuf),
}

impl BundleSource {
    /// Classify a CLI/config string: anything with an http scheme is a URL,
    /// everything else is treated as a filesystem path
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            BundleSource::Url(raw.to_string())
        } else {
            BundleSource::File(PathBuf::from(raw))
        }
    }
}

impl fmt::Display for BundleSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundleSource::Url(url) => write!(f, "{}", url),
            BundleSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Errors that can occur while loading the bundle
#[derive(Debug)]
pub enum LoadError {
    /// Transport-level failure (connection refused, DNS, file missing)
    Transport(String),
    /// The server answered with a non-success status
    Status(u16),
    /// The payload is not the expected structure
    Malformed(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(msg) => write!(f, "could not reach content source: {}", msg),
            LoadError::Status(code) => write!(f, "content source answered HTTP {}", code),
            LoadError::Malformed(msg) => write!(f, "content bundle is malformed: {}", msg),
        }
    }
}

impl std::error::Error for LoadError {}

/// Append the cache-busting parameter to a bundle URL
///
/// Derived from the current time so two loads in the same session still
/// bypass intermediate caches. Respects an existing query string.
fn cache_busted(url: &str) -> String {
    let stamp = Utc::now().timestamp_millis();
    if url.contains('?') {
        format!("{}&t={}", url, stamp)
    } else {
        format!("{}?t={}", url, stamp)
    }
}

/// Fetch and parse the content bundle from its source
///
/// Any non-2xx response and any parse failure surface as `LoadError`; the
/// caller renders a visible error state instead of a blank UI.
pub async fn load(source: &BundleSource) -> Result<ContentBundle, LoadError> {
    match source {
        BundleSource::Url(url) => {
            let busted = cache_busted(url);
            tracing::debug!("Fetching content bundle from {}", busted);

            let response = reqwest::get(&busted)
                .await
                .map_err(|e| LoadError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status(status.as_u16()));
            }

            response
                .json::<ContentBundle>()
                .await
                .map_err(|e| LoadError::Malformed(e.to_string()))
        }
        BundleSource::File(path) => {
            tracing::debug!("Reading content bundle from {}", path.display());

            let raw = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| LoadError::Transport(e.to_string()))?;

            serde_json::from_str(&raw).map_err(|e| LoadError::Malformed(e.to_string()))
        }
    }
}

/// Owner of the loaded dataset
///
/// Exposes read access only. Sorting operations elsewhere work on copies;
/// the canonical sequences are never reordered in place.
#[derive(Debug)]
pub struct ContentStore {
    bundle: ContentBundle,
}

impl ContentStore {
    pub fn new(bundle: ContentBundle) -> Self {
        Self { bundle }
    }

    pub fn site(&self) -> &SiteConfig {
        &self.bundle.config
    }

    pub fn articles(&self) -> &[Article] {
        &self.bundle.articles
    }

    pub fn dashboards(&self) -> &[Dashboard] {
        &self.bundle.dashboards
    }

    pub fn tools(&self) -> &[Tool] {
        &self.bundle.tools
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_buster_appended() {
        let busted = cache_busted("https://example.org/data/content.json");
        assert!(busted.starts_with("https://example.org/data/content.json?t="));
    }

    #[test]
    fn test_cache_buster_respects_existing_query() {
        let busted = cache_busted("https://example.org/content.json?v=2");
        assert!(busted.starts_with("https://example.org/content.json?v=2&t="));
    }

    #[test]
    fn test_source_parse_classifies_urls_and_paths() {
        assert!(matches!(
            BundleSource::parse("https://example.org/c.json"),
            BundleSource::Url(_)
        ));
        assert!(matches!(
            BundleSource::parse("data/content.json"),
            BundleSource::File(_)
        ));
    }

    #[tokio::test]
    async fn test_missing_file_is_transport_error() {
        let source = BundleSource::File(PathBuf::from("/nonexistent/content.json"));
        match load(&source).await {
            Err(LoadError::Transport(_)) => {}
            other => panic!("expected transport error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_malformed_file_is_malformed_error() {
        let dir = std::env::temp_dir().join(format!("kiosk-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.json");
        std::fs::write(&path, "not json at all").unwrap();

        match load(&BundleSource::File(path)).await {
            Err(LoadError::Malformed(_)) => {}
            other => panic!("expected malformed error, got {:?}", other.map(|_| ())),
        }
    }
}

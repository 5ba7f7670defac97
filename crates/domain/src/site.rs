//! Site profile: the fixed expectation tables for the target site.
//!
//! The profile describes what a healthy deployment of the site looks like:
//! which markers the main page must carry, which JSON content files and
//! static assets must be served, and which top-level keys each
//! schema-checked resource must contain. The tables are fixed; only the
//! base URL and timeout are configurable.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::probe::{ProbeSpec, DEFAULT_TIMEOUT_MS};

/// Base URL probed when no override is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5176/living-hope-church";

const TEST_USER_AGENT: &str = "Mozilla/5.0 (compatible; TestBot/1.0)";

/// Required top-level keys for one JSON resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaExpectation {
    /// Resource path relative to the base URL.
    pub path: String,
    /// Keys that must be present at the top level of the JSON object.
    pub required_keys: Vec<String>,
}

impl SchemaExpectation {
    fn new(path: &str, required_keys: &[&str]) -> Self {
        Self {
            path: path.to_string(),
            required_keys: required_keys.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Expectation tables and target address for one site under test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    base_url: String,
    user_agent: String,
    timeout_ms: u64,
    main_page_markers: Vec<String>,
    content_files: Vec<String>,
    static_assets: Vec<String>,
    schemas: Vec<SchemaExpectation>,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: TEST_USER_AGENT.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            main_page_markers: vec![
                "Living Hope Church".to_string(),
                "id=\"root\"".to_string(),
                "index.tsx".to_string(),
            ],
            content_files: vec![
                "/content/about.json".to_string(),
                "/content/contact.json".to_string(),
                "/content/church-info.json".to_string(),
            ],
            static_assets: vec!["/index.css".to_string(), "/vite.svg".to_string()],
            schemas: vec![
                SchemaExpectation::new(
                    "/content/about.json",
                    &["hero", "story", "mission", "vision", "values"],
                ),
                SchemaExpectation::new(
                    "/content/contact.json",
                    &["address", "phone", "email", "serviceTime", "socialMedia"],
                ),
            ],
        }
    }
}

impl SiteProfile {
    /// Replaces the base URL after validating it.
    ///
    /// A trailing slash is trimmed so resource paths (which all start with
    /// `/`) concatenate cleanly.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL does not parse or uses a scheme other
    /// than `http`/`https`.
    pub fn with_base_url(mut self, base_url: &str) -> DomainResult<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| DomainError::InvalidBaseUrl(format!("{e}: {base_url}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(DomainError::UnsupportedScheme(other.to_string())),
        }
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Sets the per-probe timeout (builder pattern).
    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// The base URL all resource paths are relative to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Substrings the main page body must contain.
    #[must_use]
    pub fn main_page_markers(&self) -> &[String] {
        &self.main_page_markers
    }

    /// JSON content files that must be served and parse cleanly.
    #[must_use]
    pub fn content_files(&self) -> &[String] {
        &self.content_files
    }

    /// Static assets that must be served.
    #[must_use]
    pub fn static_assets(&self) -> &[String] {
        &self.static_assets
    }

    /// Resources whose top-level JSON keys are verified.
    #[must_use]
    pub fn schemas(&self) -> &[SchemaExpectation] {
        &self.schemas
    }

    /// Absolute URL for a resource path.
    ///
    /// Plain concatenation: the base may carry a path segment (e.g.
    /// `/living-hope-church`) that RFC-style resolution against an
    /// absolute path would drop.
    #[must_use]
    pub fn resource_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Probe for the main page, with the checker's user agent.
    #[must_use]
    pub fn main_page_probe(&self) -> ProbeSpec {
        ProbeSpec::new(&self.base_url)
            .with_header("User-Agent", &self.user_agent)
            .with_timeout_ms(self.timeout_ms)
    }

    /// Probe for a resource path relative to the base URL.
    #[must_use]
    pub fn resource_probe(&self, path: &str) -> ProbeSpec {
        ProbeSpec::new(self.resource_url(path)).with_timeout_ms(self.timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_profile_tables() {
        let profile = SiteProfile::default();
        assert_eq!(profile.base_url(), DEFAULT_BASE_URL);
        assert_eq!(profile.main_page_markers().len(), 3);
        assert_eq!(profile.content_files().len(), 3);
        assert_eq!(profile.static_assets(), ["/index.css", "/vite.svg"]);
        assert_eq!(profile.schemas().len(), 2);
        assert!(profile.schemas()[0]
            .required_keys
            .contains(&"mission".to_string()));
        assert!(profile.schemas()[1]
            .required_keys
            .contains(&"serviceTime".to_string()));
    }

    #[test]
    fn test_resource_url_keeps_base_path() {
        let profile = SiteProfile::default();
        assert_eq!(
            profile.resource_url("/content/about.json"),
            "http://localhost:5176/living-hope-church/content/about.json"
        );
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash() {
        let profile = SiteProfile::default()
            .with_base_url("http://127.0.0.1:8080/site/")
            .unwrap();
        assert_eq!(
            profile.resource_url("/index.css"),
            "http://127.0.0.1:8080/site/index.css"
        );
    }

    #[test]
    fn test_with_base_url_rejects_garbage() {
        let err = SiteProfile::default().with_base_url("not a url");
        assert!(matches!(err, Err(DomainError::InvalidBaseUrl(_))));

        let err = SiteProfile::default().with_base_url("ftp://example.com");
        assert!(matches!(err, Err(DomainError::UnsupportedScheme(_))));
    }

    #[test]
    fn test_main_page_probe_carries_user_agent() {
        let probe = SiteProfile::default().main_page_probe();
        assert_eq!(
            probe.header("user-agent"),
            Some("Mozilla/5.0 (compatible; TestBot/1.0)")
        );
        assert_eq!(probe.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_resource_probe_has_no_extra_headers() {
        let probe = SiteProfile::default().resource_probe("/vite.svg");
        assert!(probe.headers.is_empty());
    }
}

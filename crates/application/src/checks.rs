//! The fixed sequence of site checks.
//!
//! Each check probes the site through the `HttpClient` port and returns
//! `Ok(outcome)` with the boolean the harness counts, or `Err` when the
//! probe itself failed and the harness should report the error. Within a
//! list-driven check the first failing item fails the whole check and no
//! further items are probed.

use sitecheck_domain::{CheckOutcome, SiteProfile};

use crate::error::{ApplicationError, ApplicationResult};
use crate::ports::HttpClient;

/// Name of the main-page reachability check.
pub const MAIN_PAGE_CHECK: &str = "Main Page Accessibility";
/// Name of the content-file reachability check.
pub const CONTENT_FILES_CHECK: &str = "Content Files Accessibility";
/// Name of the static-asset reachability check.
pub const STATIC_ASSETS_CHECK: &str = "Static Assets";
/// Name of the content schema check.
pub const CONTENT_SCHEMA_CHECK: &str = "Content Structure";

/// The site checks, bound to a client and a profile.
pub struct SiteChecks<'a, C> {
    client: &'a C,
    profile: &'a SiteProfile,
}

impl<'a, C: HttpClient> SiteChecks<'a, C> {
    /// Creates the check set for one client/profile pair.
    #[must_use]
    pub const fn new(client: &'a C, profile: &'a SiteProfile) -> Self {
        Self { client, profile }
    }

    /// Main-page reachability: status 200 and all required markers present.
    ///
    /// A non-200 status is an ordinary failure; transport errors propagate
    /// to the harness's isolation layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the probe fails at the transport level.
    pub async fn main_page(&self) -> ApplicationResult<CheckOutcome> {
        let response = self.client.execute(&self.profile.main_page_probe()).await?;
        if response.status != 200 {
            return Ok(
                CheckOutcome::fail().note(format!("HTTP status: {}", response.status_code()))
            );
        }

        let mut outcome = CheckOutcome::pass().note(format!(
            "Status: {} ({})",
            response.status,
            response.duration_display()
        ));
        for marker in self.profile.main_page_markers() {
            if response.body.contains(marker.as_str()) {
                outcome.push_note(format!("Marker '{marker}': found"));
            } else {
                tracing::debug!(marker = %marker, "main page marker missing");
                outcome.push_note(format!("Marker '{marker}': missing"));
                outcome.passed = false;
            }
        }
        Ok(outcome)
    }

    /// Content-file reachability: every listed JSON file is served with
    /// status 200 and parses as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if a probe fails at the transport level.
    pub async fn content_files(&self) -> ApplicationResult<CheckOutcome> {
        let mut outcome = CheckOutcome::pass();
        for path in self.profile.content_files() {
            let response = self.client.execute(&self.profile.resource_probe(path)).await?;
            if response.status != 200 {
                tracing::debug!(path = %path, status = response.status, "content file not reachable");
                outcome.push_note(format!("{path} - HTTP {}", response.status_code()));
                outcome.passed = false;
                return Ok(outcome);
            }
            match serde_json::from_str::<serde_json::Value>(&response.body) {
                Ok(_) => outcome.push_note(format!("{path} - valid JSON")),
                Err(err) => {
                    outcome.push_note(format!("{path} - invalid JSON: {err}"));
                    outcome.passed = false;
                    return Ok(outcome);
                }
            }
        }
        Ok(outcome)
    }

    /// Static-asset reachability: every listed asset is served with
    /// status 200.
    ///
    /// # Errors
    ///
    /// Returns an error if a probe fails at the transport level.
    pub async fn static_assets(&self) -> ApplicationResult<CheckOutcome> {
        let mut outcome = CheckOutcome::pass();
        for path in self.profile.static_assets() {
            let response = self.client.execute(&self.profile.resource_probe(path)).await?;
            if response.status != 200 {
                tracing::debug!(path = %path, status = response.status, "asset not reachable");
                outcome.push_note(format!("{path} - HTTP {}", response.status_code()));
                outcome.passed = false;
                return Ok(outcome);
            }
            outcome.push_note(format!("{path} - accessible"));
        }
        Ok(outcome)
    }

    /// Content schema: each schema-checked resource parses as JSON and
    /// carries every required top-level key.
    ///
    /// # Errors
    ///
    /// Returns an error if a probe fails at the transport level or a
    /// resource body is not valid JSON.
    pub async fn content_schema(&self) -> ApplicationResult<CheckOutcome> {
        let mut outcome = CheckOutcome::pass();
        for schema in self.profile.schemas() {
            let path = schema.path.as_str();
            let response = self.client.execute(&self.profile.resource_probe(path)).await?;
            let value: serde_json::Value =
                serde_json::from_str(&response.body).map_err(|err| ApplicationError::Payload {
                    path: path.to_string(),
                    message: err.to_string(),
                })?;
            for key in &schema.required_keys {
                if value.get(key).is_none() {
                    outcome.push_note(format!("Missing key '{key}' in {path}"));
                    outcome.passed = false;
                    return Ok(outcome);
                }
            }
            outcome.push_note(format!("{path} - all required keys present"));
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::HttpClientError;
    use crate::test_support::{healthy_site, MockHttpClient, HEALTHY_MAIN_PAGE};
    use pretty_assertions::assert_eq;

    fn profile() -> SiteProfile {
        SiteProfile::default()
    }

    #[tokio::test]
    async fn test_main_page_passes_with_all_markers() {
        let profile = profile();
        let client = healthy_site(&profile);
        let checks = SiteChecks::new(&client, &profile);

        let outcome = checks.main_page().await.unwrap();
        assert!(outcome.passed);
        assert!(outcome.detail.iter().any(|l| l.contains("'id=\"root\"': found")));
    }

    #[tokio::test]
    async fn test_main_page_fails_on_missing_marker() {
        let profile = profile();
        let client = MockHttpClient::new().route(
            profile.base_url(),
            200,
            "<html><div id=\"root\"></div><script src=\"/index.tsx\"></script></html>",
        );
        let checks = SiteChecks::new(&client, &profile);

        let outcome = checks.main_page().await.unwrap();
        assert!(!outcome.passed);
        assert!(outcome
            .detail
            .iter()
            .any(|l| l.contains("'Living Hope Church': missing")));
    }

    #[tokio::test]
    async fn test_main_page_fails_on_non_200_without_erroring() {
        let profile = profile();
        let client = MockHttpClient::new().route(profile.base_url(), 503, "maintenance");
        let checks = SiteChecks::new(&client, &profile);

        let outcome = checks.main_page().await.unwrap();
        assert!(!outcome.passed);
        assert_eq!(outcome.detail, ["HTTP status: 503 Service Unavailable"]);
    }

    #[tokio::test]
    async fn test_main_page_transport_error_propagates() {
        let profile = profile();
        let client = MockHttpClient::new().route_error(
            profile.base_url(),
            HttpClientError::ConnectionRefused {
                host: "localhost".to_string(),
                port: 5176,
            },
        );
        let checks = SiteChecks::new(&client, &profile);

        let result = checks.main_page().await;
        assert!(matches!(
            result,
            Err(ApplicationError::Http(HttpClientError::ConnectionRefused { .. }))
        ));
    }

    #[tokio::test]
    async fn test_content_files_short_circuits_on_invalid_json() {
        let profile = profile();
        let client = MockHttpClient::new()
            .route(&profile.resource_url("/content/about.json"), 200, "{not json")
            .route(&profile.resource_url("/content/contact.json"), 200, "{}");
        let checks = SiteChecks::new(&client, &profile);

        let outcome = checks.content_files().await.unwrap();
        assert!(!outcome.passed);
        assert!(outcome.detail[0].contains("invalid JSON"));
        // the remaining files were never probed
        assert_eq!(
            client.requested(),
            [profile.resource_url("/content/about.json")]
        );
    }

    #[tokio::test]
    async fn test_content_files_short_circuits_on_non_200() {
        let profile = profile();
        let client = MockHttpClient::new()
            .route(&profile.resource_url("/content/about.json"), 200, "{}")
            .route(&profile.resource_url("/content/contact.json"), 404, "gone");
        let checks = SiteChecks::new(&client, &profile);

        let outcome = checks.content_files().await.unwrap();
        assert!(!outcome.passed);
        assert_eq!(client.requested().len(), 2);
        assert!(outcome.detail[1].contains("404 Not Found"));
    }

    #[tokio::test]
    async fn test_static_assets_short_circuit_on_first_404() {
        let profile = profile();
        let client = MockHttpClient::new()
            .route(&profile.resource_url("/index.css"), 404, "")
            .route(&profile.resource_url("/vite.svg"), 200, "<svg/>");
        let checks = SiteChecks::new(&client, &profile);

        let outcome = checks.static_assets().await.unwrap();
        assert!(!outcome.passed);
        assert_eq!(client.requested(), [profile.resource_url("/index.css")]);
    }

    #[tokio::test]
    async fn test_static_assets_pass() {
        let profile = profile();
        let client = healthy_site(&profile);
        let checks = SiteChecks::new(&client, &profile);

        let outcome = checks.static_assets().await.unwrap();
        assert!(outcome.passed);
        assert_eq!(outcome.detail.len(), 2);
    }

    #[tokio::test]
    async fn test_content_schema_fails_on_missing_key() {
        let profile = profile();
        let client = MockHttpClient::new().route(
            &profile.resource_url("/content/about.json"),
            200,
            r#"{"hero":{},"story":"","vision":"","values":[]}"#,
        );
        let checks = SiteChecks::new(&client, &profile);

        let outcome = checks.content_schema().await.unwrap();
        assert!(!outcome.passed);
        assert_eq!(
            outcome.detail,
            ["Missing key 'mission' in /content/about.json"]
        );
    }

    #[tokio::test]
    async fn test_content_schema_surfaces_malformed_json_as_error() {
        let profile = profile();
        let client = MockHttpClient::new().route(
            &profile.resource_url("/content/about.json"),
            200,
            "<!doctype html>",
        );
        let checks = SiteChecks::new(&client, &profile);

        let result = checks.content_schema().await;
        assert!(matches!(result, Err(ApplicationError::Payload { .. })));
    }

    #[tokio::test]
    async fn test_content_schema_passes_on_complete_content() {
        let profile = profile();
        let client = healthy_site(&profile);
        let checks = SiteChecks::new(&client, &profile);

        let outcome = checks.content_schema().await.unwrap();
        assert!(outcome.passed);
        assert_eq!(outcome.detail.len(), 2);
    }

    #[test]
    fn test_healthy_fixture_carries_all_markers() {
        for marker in SiteProfile::default().main_page_markers() {
            assert!(HEALTHY_MAIN_PAGE.contains(marker.as_str()));
        }
    }
}

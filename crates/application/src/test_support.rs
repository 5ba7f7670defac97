//! Shared test doubles for harness and check tests.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;
use std::time::Duration;

use sitecheck_domain::{CheckReport, ProbeSpec, ResponseSpec, RunSummary, SiteProfile};

use crate::ports::{HttpClient, HttpClientError, Reporter};

/// Main-page body satisfying every default marker.
pub const HEALTHY_MAIN_PAGE: &str = concat!(
    "<!doctype html><html><head><title>Living Hope Church</title></head>",
    "<body><div id=\"root\"></div>",
    "<script type=\"module\" src=\"/index.tsx\"></script></body></html>",
);

/// `about.json` body with every required key.
pub const HEALTHY_ABOUT: &str =
    r#"{"hero":{"title":"Welcome"},"story":"Our story","mission":"Our mission","vision":"Our vision","values":[]}"#;

/// `contact.json` body with every required key.
pub const HEALTHY_CONTACT: &str = r#"{"address":"1 Hope Street","phone":"555-0101","email":"hello@example.org","serviceTime":"Sundays 9:30","socialMedia":{}}"#;

/// `church-info.json` body (reachability only, no schema check).
pub const HEALTHY_CHURCH_INFO: &str = r#"{"name":"Living Hope Church","founded":1994}"#;

/// Canned `HttpClient` keyed by absolute URL, logging every request.
#[derive(Default)]
pub struct MockHttpClient {
    routes: HashMap<String, Result<(u16, String), HttpClientError>>,
    log: Mutex<Vec<String>>,
}

impl MockHttpClient {
    /// A client with no routes; every probe fails with `ConnectionFailed`.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Registers a canned response for `url` (builder pattern).
    pub fn route(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), Ok((status, body.to_string())));
        self
    }

    /// Registers a transport error for `url` (builder pattern).
    pub fn route_error(mut self, url: &str, error: HttpClientError) -> Self {
        self.routes.insert(url.to_string(), Err(error));
        self
    }

    /// URLs requested so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}

impl HttpClient for MockHttpClient {
    fn execute(
        &self,
        probe: &ProbeSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>> {
        self.log.lock().unwrap().push(probe.url.clone());
        let result = match self.routes.get(&probe.url) {
            Some(Ok((status, body))) => Ok(ResponseSpec::new(
                *status,
                HashMap::new(),
                body.clone().into_bytes(),
                Duration::from_millis(5),
            )),
            Some(Err(error)) => Err(error.clone()),
            None => Err(HttpClientError::ConnectionFailed(format!(
                "no route for {}",
                probe.url
            ))),
        };
        Box::pin(async move { result })
    }
}

/// A mock client serving a fully healthy rendition of the default site.
pub fn healthy_site(profile: &SiteProfile) -> MockHttpClient {
    MockHttpClient::new()
        .route(profile.base_url(), 200, HEALTHY_MAIN_PAGE)
        .route(
            &profile.resource_url("/content/about.json"),
            200,
            HEALTHY_ABOUT,
        )
        .route(
            &profile.resource_url("/content/contact.json"),
            200,
            HEALTHY_CONTACT,
        )
        .route(
            &profile.resource_url("/content/church-info.json"),
            200,
            HEALTHY_CHURCH_INFO,
        )
        .route(&profile.resource_url("/index.css"), 200, "body { margin: 0; }")
        .route(
            &profile.resource_url("/vite.svg"),
            200,
            "<svg xmlns=\"http://www.w3.org/2000/svg\"/>",
        )
}

/// `Reporter` that records everything it is told.
#[derive(Default)]
pub struct RecordingReporter {
    /// Base URL announced by `run_started`.
    pub base_url: Option<String>,
    /// Check names in the order they started.
    pub started: Vec<String>,
    /// Reports in the order checks finished.
    pub reports: Vec<CheckReport>,
    /// Summary from `run_finished`.
    pub summary: Option<RunSummary>,
}

impl Reporter for RecordingReporter {
    fn run_started(&mut self, base_url: &str) {
        self.base_url = Some(base_url.to_string());
    }

    fn check_started(&mut self, name: &str) {
        self.started.push(name.to_string());
    }

    fn check_finished(&mut self, report: &CheckReport) {
        self.reports.push(report.clone());
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        self.summary = Some(summary.clone());
    }
}

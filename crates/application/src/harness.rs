//! Check harness.
//!
//! Executes named checks sequentially, isolates failures per check,
//! accumulates the pass/fail counters, and reports progress through the
//! `Reporter` port.

use std::future::Future;
use std::time::Instant;

use sitecheck_domain::{CheckOutcome, CheckReport, RunSummary, SiteProfile};

use crate::checks::{
    SiteChecks, CONTENT_FILES_CHECK, CONTENT_SCHEMA_CHECK, MAIN_PAGE_CHECK, STATIC_ASSETS_CHECK,
};
use crate::error::ApplicationResult;
use crate::ports::{HttpClient, Reporter};

/// Sequential check runner with per-check failure isolation.
pub struct Harness<R: Reporter> {
    reporter: R,
    summary: RunSummary,
    started: Instant,
}

impl<R: Reporter> Harness<R> {
    /// Creates a harness that reports through `reporter`.
    #[must_use]
    pub fn new(reporter: R) -> Self {
        Self {
            reporter,
            summary: RunSummary::new(),
            started: Instant::now(),
        }
    }

    /// Announces the run and starts the clock.
    pub fn begin(&mut self, base_url: &str) {
        self.reporter.run_started(base_url);
        self.started = Instant::now();
    }

    /// Runs one named check inside the failure-isolating scope.
    ///
    /// The attempted counter always increases by one. `Ok(outcome)` with
    /// `passed` counts as a pass; a falsy outcome or an `Err` from the
    /// procedure is recorded as a failure and the run continues.
    /// Returns the boolean outcome.
    pub async fn run_check<F>(&mut self, name: &str, check: F) -> bool
    where
        F: Future<Output = ApplicationResult<CheckOutcome>>,
    {
        self.reporter.check_started(name);
        tracing::debug!(check = name, "running check");

        let report = match check.await {
            Ok(outcome) => CheckReport::from_outcome(name, outcome),
            Err(err) => {
                tracing::warn!(check = name, error = %err, "check procedure failed");
                CheckReport::from_error(name, err.to_string())
            }
        };

        self.reporter.check_finished(&report);
        let passed = report.passed;
        self.summary.record(report);
        passed
    }

    /// Closes the run: stamps the duration, emits the summary, and
    /// returns it.
    #[must_use]
    pub fn finish(mut self) -> RunSummary {
        self.summary.duration_ms =
            u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.reporter.run_finished(&self.summary);
        self.summary
    }
}

/// Runs the full fixed sequence of site checks against `profile`.
///
/// This is the single entry point the binary calls: main page, content
/// files, static assets, content structure, in that order, each isolated
/// by [`Harness::run_check`].
pub async fn run_site_checks<C, R>(profile: &SiteProfile, client: &C, reporter: R) -> RunSummary
where
    C: HttpClient,
    R: Reporter,
{
    let checks = SiteChecks::new(client, profile);
    let mut harness = Harness::new(reporter);

    harness.begin(profile.base_url());
    harness.run_check(MAIN_PAGE_CHECK, checks.main_page()).await;
    harness
        .run_check(CONTENT_FILES_CHECK, checks.content_files())
        .await;
    harness
        .run_check(STATIC_ASSETS_CHECK, checks.static_assets())
        .await;
    harness
        .run_check(CONTENT_SCHEMA_CHECK, checks.content_schema())
        .await;
    harness.finish()
}

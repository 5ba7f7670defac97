//! Reporter port for run progress and results

use sitecheck_domain::{CheckReport, RunSummary};

/// Port for emitting run progress and results.
///
/// Keeps the harness free of console concerns; tests use a recording
/// implementation.
pub trait Reporter {
    /// Called once before the first check, with the target base URL.
    fn run_started(&mut self, base_url: &str);

    /// Called when a named check begins executing.
    fn check_started(&mut self, name: &str);

    /// Called with the report of a check that just finished.
    fn check_finished(&mut self, report: &CheckReport);

    /// Called once after the last check with the aggregate summary.
    fn run_finished(&mut self, summary: &RunSummary);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn run_started(&mut self, base_url: &str) {
        (**self).run_started(base_url);
    }

    fn check_started(&mut self, name: &str) {
        (**self).check_started(name);
    }

    fn check_finished(&mut self, report: &CheckReport) {
        (**self).check_finished(report);
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        (**self).run_finished(summary);
    }
}

//! Console reporter.
//!
//! Prints run progress and results as human-readable lines on stdout.
//! The format is for people watching a deploy, not for machines.

use chrono::Local;
use sitecheck_application::ports::Reporter;
use sitecheck_domain::{CheckReport, RunSummary, Verdict};

const RULE_WIDTH: usize = 60;
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reporter that writes the run transcript to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Creates a console reporter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn rule() -> String {
        "=".repeat(RULE_WIDTH)
    }
}

impl Reporter for ConsoleReporter {
    fn run_started(&mut self, base_url: &str) {
        let rule = Self::rule();
        println!("{rule}");
        println!("SITE SMOKE TEST");
        println!("{rule}");
        println!("Target: {base_url}");
        println!("Test started at: {}", Local::now().format(TIME_FORMAT));
    }

    fn check_started(&mut self, name: &str) {
        println!("\n🔍 Testing {name}...");
    }

    fn check_finished(&mut self, report: &CheckReport) {
        for line in &report.detail {
            println!("   {line}");
        }
        if report.passed {
            println!("✅ Passed");
        } else if let Some(error) = &report.error {
            println!("❌ Failed - Error: {error}");
        } else {
            println!("❌ Failed");
        }
    }

    fn run_finished(&mut self, summary: &RunSummary) {
        let rule = Self::rule();
        println!("\n{rule}");
        println!("TEST RESULTS");
        println!("{rule}");
        println!("📊 Tests passed: {}/{}", summary.passed, summary.attempted);

        match summary.verdict() {
            Verdict::Passed => {
                println!("🎉 All tests passed! The site is serving content correctly.");
                println!();
                println!("Key Findings:");
                println!("✅ Main page is reachable and carries the expected markup");
                println!("✅ JSON content files are served and parse cleanly");
                println!("✅ Static assets are accessible");
                println!("✅ Content structure is complete and valid");
            }
            Verdict::Failed => println!("⚠️ Some tests failed. Check the issues above."),
            Verdict::Empty => println!("⚠️ No checks were executed; nothing was verified."),
        }

        println!("\nTest completed at: {}", Local::now().format(TIME_FORMAT));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sitecheck_domain::{CheckOutcome, CheckReport};

    // stdout formatting only; these just exercise every code path
    #[test]
    fn test_reporter_handles_all_report_shapes() {
        let mut reporter = ConsoleReporter::new();
        reporter.run_started("http://localhost:5176/living-hope-church");
        reporter.check_started("Main Page Accessibility");
        reporter.check_finished(&CheckReport::from_outcome(
            "Main Page Accessibility",
            CheckOutcome::pass().note("Status: 200"),
        ));
        reporter.check_finished(&CheckReport::from_outcome(
            "Static Assets",
            CheckOutcome::fail().note("/vite.svg - HTTP 404 Not Found"),
        ));
        reporter.check_finished(&CheckReport::from_error(
            "Content Structure",
            "connection refused by localhost:5176",
        ));

        let mut summary = RunSummary::new();
        summary.record(CheckReport::from_outcome("a", CheckOutcome::pass()));
        reporter.run_finished(&summary);

        let empty = RunSummary::new();
        reporter.run_finished(&empty);
    }
}

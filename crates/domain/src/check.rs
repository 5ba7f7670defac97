//! Check outcomes and run accounting.
//!
//! This module provides the types the harness uses to record what each
//! site check observed and to aggregate the pass/fail totals for a run.

use serde::{Deserialize, Serialize};

/// Outcome of one check's procedure.
///
/// `passed` is the boolean the harness counts; `detail` carries the
/// per-item observations (one line per probed resource or marker).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckOutcome {
    /// Whether the check succeeded.
    pub passed: bool,
    /// Human-readable observations accumulated while checking.
    #[serde(default)]
    pub detail: Vec<String>,
}

impl CheckOutcome {
    /// Creates a passing outcome with no detail yet.
    #[must_use]
    pub const fn pass() -> Self {
        Self {
            passed: true,
            detail: Vec::new(),
        }
    }

    /// Creates a failing outcome with no detail yet.
    #[must_use]
    pub const fn fail() -> Self {
        Self {
            passed: false,
            detail: Vec::new(),
        }
    }

    /// Adds a detail line (builder pattern).
    #[must_use]
    pub fn note(mut self, line: impl Into<String>) -> Self {
        self.detail.push(line.into());
        self
    }

    /// Adds a detail line in place.
    pub fn push_note(&mut self, line: impl Into<String>) {
        self.detail.push(line.into());
    }
}

/// Result of running a single named check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    /// Check name as registered with the harness.
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Observations gathered by the check.
    #[serde(default)]
    pub detail: Vec<String>,
    /// Error message if the check's procedure failed outright.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Creates a report from a completed check procedure.
    #[must_use]
    pub fn from_outcome(name: impl Into<String>, outcome: CheckOutcome) -> Self {
        Self {
            name: name.into(),
            passed: outcome.passed,
            detail: outcome.detail,
            error: None,
        }
    }

    /// Creates a failure report for a procedure that returned an error.
    #[must_use]
    pub fn from_error(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            detail: Vec::new(),
            error: Some(message.into()),
        }
    }
}

/// Aggregate result of a smoke-check run.
///
/// Counters are mutated in place as the harness records reports and read
/// once at the end to derive the verdict and process exit status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Individual check reports, in execution order.
    pub reports: Vec<CheckReport>,
    /// Number of checks attempted.
    pub attempted: usize,
    /// Number of checks that passed.
    pub passed: usize,
    /// Wall-clock duration of the run in milliseconds.
    pub duration_ms: u64,
}

impl RunSummary {
    /// Creates an empty summary.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            reports: Vec::new(),
            attempted: 0,
            passed: 0,
            duration_ms: 0,
        }
    }

    /// Records one check report, updating the counters.
    ///
    /// `attempted` always increases by one; `passed` only when the report
    /// passed.
    pub fn record(&mut self, report: CheckReport) {
        self.attempted += 1;
        if report.passed {
            self.passed += 1;
        }
        self.reports.push(report);
    }

    /// Number of checks that failed.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.attempted - self.passed
    }

    /// Derives the run verdict from the counters.
    ///
    /// A run that attempted nothing verified nothing, so it is reported
    /// as [`Verdict::Empty`] rather than as a pass.
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        if self.attempted == 0 {
            Verdict::Empty
        } else if self.passed == self.attempted {
            Verdict::Passed
        } else {
            Verdict::Failed
        }
    }
}

/// Final qualitative result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every attempted check passed.
    Passed,
    /// At least one check failed.
    Failed,
    /// No checks were attempted.
    Empty,
}

impl Verdict {
    /// Process exit code for this verdict.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::Failed | Self::Empty => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_outcome_builder() {
        let outcome = CheckOutcome::pass()
            .note("Status: 200")
            .note("Marker 'id=\"root\"': found");
        assert!(outcome.passed);
        assert_eq!(outcome.detail.len(), 2);
    }

    #[test]
    fn test_report_from_error() {
        let report = CheckReport::from_error("Main Page", "connection refused");
        assert!(!report.passed);
        assert_eq!(report.error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_record_counts_every_attempt() {
        let mut summary = RunSummary::new();
        summary.record(CheckReport::from_outcome("a", CheckOutcome::pass()));
        summary.record(CheckReport::from_outcome("b", CheckOutcome::fail()));
        summary.record(CheckReport::from_error("c", "boom"));

        assert_eq!(summary.attempted, 3);
        assert_eq!(summary.passed, 1);
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.verdict(), Verdict::Failed);
    }

    #[test]
    fn test_verdict_passed() {
        let mut summary = RunSummary::new();
        summary.record(CheckReport::from_outcome("a", CheckOutcome::pass()));
        assert_eq!(summary.verdict(), Verdict::Passed);
        assert_eq!(summary.verdict().exit_code(), 0);
    }

    #[test]
    fn test_empty_run_is_not_a_pass() {
        let summary = RunSummary::new();
        assert_eq!(summary.verdict(), Verdict::Empty);
        assert_eq!(summary.verdict().exit_code(), 1);
    }

    #[test]
    fn test_failed_run_exit_code() {
        let mut summary = RunSummary::new();
        summary.record(CheckReport::from_outcome("a", CheckOutcome::fail()));
        assert_eq!(summary.verdict().exit_code(), 1);
    }
}

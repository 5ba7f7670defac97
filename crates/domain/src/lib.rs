//! Sitecheck Domain - Core smoke-check types
//!
//! This crate defines the domain model for the sitecheck smoke checker.
//! All types here are pure Rust with no I/O dependencies.

pub mod check;
pub mod error;
pub mod probe;
pub mod response;
pub mod site;

pub use check::{CheckOutcome, CheckReport, RunSummary, Verdict};
pub use error::{DomainError, DomainResult};
pub use probe::{ProbeSpec, DEFAULT_TIMEOUT_MS};
pub use response::{ResponseSpec, StatusCode};
pub use site::{SchemaExpectation, SiteProfile, DEFAULT_BASE_URL};

//! HTTP client port

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use sitecheck_domain::{ProbeSpec, ResponseSpec};

/// Errors an HTTP client adapter can produce.
///
/// Transport failures are distinguished so failure reports can say what
/// actually went wrong (timeout vs. refused vs. unresolvable host).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The probe URL did not parse.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request exceeded its timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout that was exceeded, in milliseconds.
        timeout_ms: u64,
    },

    /// The target host actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Host that refused.
        host: String,
        /// Port that refused.
        port: u16,
    },

    /// The hostname could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Hostname that failed to resolve.
        host: String,
        /// Resolver error message.
        message: String,
    },

    /// The connection could not be established for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// Any other client error.
    #[error("HTTP client error: {0}")]
    Other(String),
}

/// Port for executing HTTP probes.
pub trait HttpClient: Send + Sync {
    /// Executes a GET probe and returns the response.
    fn execute(
        &self,
        probe: &ProbeSpec,
    ) -> Pin<Box<dyn Future<Output = Result<ResponseSpec, HttpClientError>> + Send + '_>>;
}

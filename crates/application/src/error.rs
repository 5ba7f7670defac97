//! Application error types

use sitecheck_domain::DomainError;
use thiserror::Error;

use crate::ports::HttpClientError;

/// Application-level errors.
///
/// The harness converts these into failure reports; the `Display` text is
/// what the failure line shows.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// An HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpClientError),

    /// A response body could not be interpreted.
    #[error("invalid payload from {path}: {message}")]
    Payload {
        /// Resource path the payload came from.
        path: String,
        /// Decoder error message.
        message: String,
    },
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! The HTTP status mapping lives in the api layer.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Resolution yielded no match (empty search result, unknown genre name)
    NotFound,
    /// Caller-side validation error with message
    Validation(String),
    /// Upstream service replied with a non-2xx status
    UpstreamStatus(u16),
    /// Upstream service unreachable, timed out, or returned an undecodable body
    Upstream(String),
    /// Generic internal error
    Internal(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::UpstreamStatus(code) => {
                write!(f, "Upstream service returned status {}", code)
            }
            DomainError::Upstream(msg) => write!(f, "Upstream service error: {}", msg),
            DomainError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from reqwest errors (used in the integrations layer)
impl From<reqwest::Error> for DomainError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => DomainError::UpstreamStatus(status.as_u16()),
            None => DomainError::Upstream(e.to_string()),
        }
    }
}

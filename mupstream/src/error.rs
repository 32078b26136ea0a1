//! Closed failure enumeration for one upstream request attempt.
//!
//! ```rust
//! use mupstream::UpstreamError;
//!
//! let error = UpstreamError::status(503, "Service Unavailable");
//! assert_eq!(error.to_string(), "upstream returned status 503 Service Unavailable");
//! ```

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome of a failed transport attempt. The set is closed on purpose: the
/// capability layer translates each variant with an exhaustive match, so a new
/// variant cannot be added without every translation site being revisited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    /// The server answered 404 for the requested handle.
    NotFound,
    /// The server answered 429.
    RateLimited,
    /// Any other non-2xx answer, with the status line preserved.
    Status { code: u16, reason: String },
    /// No usable response at all: DNS, connect, timeout, reset, or an
    /// undecodable body.
    Transport { message: String },
}

impl UpstreamError {
    pub fn status(code: u16, reason: impl Into<String>) -> Self {
        Self::Status {
            code,
            reason: reason.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

impl Display for UpstreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => f.write_str("upstream returned status 404 Not Found"),
            Self::RateLimited => f.write_str("upstream returned status 429 Too Many Requests"),
            Self::Status { code, reason } => {
                write!(f, "upstream returned status {code} {reason}")
            }
            Self::Transport { message } => write!(f, "upstream request failed: {message}"),
        }
    }
}

impl Error for UpstreamError {}

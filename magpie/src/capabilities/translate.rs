//! Translation of upstream failures into host-facing text.
//!
//! Upstream failures never surface as capability errors: every variant maps
//! to a stable, human-readable message returned as the invocation output, so
//! an agent can read the outcome and decide what to do next. Only argument
//! validation produces a `CapabilityError`.

use mupstream::UpstreamError;

pub const RATE_LIMITED_TEXT: &str = "Rate limit exceeded. Please try again later.";

pub const AUTHOR_DETAILS_NOT_FOUND_TEXT: &str =
    "Author not found. Please check the handle and try again.";

pub const TOP_TWEETS_NOT_FOUND_TEXT: &str =
    "Author not found or no tweets available. Please check the handle and try again.";

/// The upstream read operation a failure message is phrased for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    AuthorDetails,
    TopTweets,
}

impl Operation {
    fn noun(self) -> &'static str {
        match self {
            Self::AuthorDetails => "author details",
            Self::TopTweets => "top tweets",
        }
    }

    fn not_found_text(self) -> &'static str {
        match self {
            Self::AuthorDetails => AUTHOR_DETAILS_NOT_FOUND_TEXT,
            Self::TopTweets => TOP_TWEETS_NOT_FOUND_TEXT,
        }
    }
}

pub fn describe_upstream_error(operation: Operation, error: &UpstreamError) -> String {
    match error {
        UpstreamError::NotFound => operation.not_found_text().to_string(),
        UpstreamError::RateLimited => RATE_LIMITED_TEXT.to_string(),
        UpstreamError::Status { code, reason } => format!("API error: {code} - {reason}"),
        UpstreamError::Transport { message } => {
            let detail: &str = if message.trim().is_empty() {
                "Unknown error"
            } else {
                message
            };
            format!("Error fetching {}: {detail}", operation.noun())
        }
    }
}

//! Capability implementations over the upstream analytics transport.

mod author_details;
mod top_tweets;
pub mod translate;

pub use author_details::{AuthorDetailsCapability, NO_AUTHOR_DETAILS_TEXT};
pub use top_tweets::{DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT, NO_RESPONSE_TEXT, TopTweetsCapability};
pub use translate::{
    AUTHOR_DETAILS_NOT_FOUND_TEXT, Operation, RATE_LIMITED_TEXT, TOP_TWEETS_NOT_FOUND_TEXT,
    describe_upstream_error,
};

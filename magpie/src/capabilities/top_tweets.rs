//! The `getTopTweets` capability.

use std::sync::Arc;

use mcapability::{
    Capability, CapabilityDefinition, CapabilityError, CapabilityFuture, InvocationContext,
    optional_integer_in_range, optional_string, parse_json_object, required_string,
};
use mupstream::{AnalyticsTransport, Interval, SortKey, TopTweetsQuery};

use crate::capabilities::translate::{Operation, describe_upstream_error};
use crate::render::{TopTweetsView, TweetView, to_pretty_json};
use crate::schema;

pub const NO_RESPONSE_TEXT: &str = "No response received from the API.";

pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 50;
pub const DEFAULT_LIMIT: u32 = 5;

fn no_tweets_text(author_handle: &str) -> String {
    format!("No tweets found for author \"{author_handle}\" in the specified time period.")
}

/// Fetches an author's ranked tweets over a time window and renders them as
/// pretty-printed JSON text. The upstream order is taken as-is; this side
/// never re-sorts.
#[derive(Debug, Clone)]
pub struct TopTweetsCapability {
    transport: Arc<dyn AnalyticsTransport>,
}

impl TopTweetsCapability {
    pub fn new(transport: Arc<dyn AnalyticsTransport>) -> Self {
        Self { transport }
    }

    async fn run(&self, args_json: &str) -> Result<String, CapabilityError> {
        let args = parse_json_object(args_json)?;
        let author_handle = required_string(&args, "author_handle")?;

        let interval = match optional_string(&args, "interval")? {
            Some(value) => Interval::parse(&value).ok_or_else(|| {
                CapabilityError::invalid_field(
                    "interval",
                    format!("must be one of {}", Interval::CHOICES.join(", ")),
                )
            })?,
            None => Interval::default(),
        };

        let sort_by = match optional_string(&args, "sort_by")? {
            Some(value) => SortKey::parse(&value).ok_or_else(|| {
                CapabilityError::invalid_field(
                    "sort_by",
                    format!("must be one of {}", SortKey::CHOICES.join(", ")),
                )
            })?,
            None => SortKey::default(),
        };

        let limit = optional_integer_in_range(&args, "limit", MIN_LIMIT, MAX_LIMIT)?
            .map(|value| value as u32)
            .unwrap_or(DEFAULT_LIMIT);

        let query = TopTweetsQuery::new(author_handle.clone())
            .with_interval(interval)
            .with_sort_by(sort_by)
            .with_limit(limit);

        let envelope = match self.transport.top_tweets(query).await {
            Ok(Some(envelope)) => envelope,
            Ok(None) => return Ok(NO_RESPONSE_TEXT.to_string()),
            Err(error) => return Ok(describe_upstream_error(Operation::TopTweets, &error)),
        };

        let tweets = match envelope.result {
            Some(tweets) if !tweets.is_empty() => tweets,
            _ => return Ok(no_tweets_text(&author_handle)),
        };

        let view = TopTweetsView {
            author_handle,
            total_tweets: tweets.len(),
            interval: interval.as_str().to_string(),
            sort_by: sort_by.as_str().to_string(),
            tweets: tweets
                .into_iter()
                .enumerate()
                .map(|(index, tweet)| TweetView::from_tweet(index + 1, tweet))
                .collect(),
        };

        to_pretty_json(&view).map_err(|err| CapabilityError::execution(err.to_string()))
    }
}

impl Capability for TopTweetsCapability {
    fn definition(&self) -> CapabilityDefinition {
        schema::top_tweets_definition()
    }

    fn invoke<'a>(
        &'a self,
        args_json: &'a str,
        _context: &'a InvocationContext,
    ) -> CapabilityFuture<'a, Result<String, CapabilityError>> {
        Box::pin(self.run(args_json))
    }
}

//! Presentation formatting for upstream payloads.
//!
//! One formatter owns the absent-value rule: a missing numeric or string field
//! renders as the literal sentinel `"N/A"`, never as `null` or `0`, and present
//! integers get grouped thousands. Every rendered field goes through the same
//! helpers so the rule cannot drift per field.
//!
//! ```rust
//! use magpie::render::{display_count, display_score};
//!
//! assert_eq!(display_count(Some(1234567)), "1,234,567");
//! assert_eq!(display_count(None), "N/A");
//! assert_eq!(display_score(Some(1200.5)), "1,200.50");
//! ```

use serde::Serialize;

use mupstream::{AuthorDetails, Tweet};

pub const SENTINEL: &str = "N/A";

/// Inserts grouping commas into a plain digit string.
fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && index % 3 == offset % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

pub fn group_thousands(value: u64) -> String {
    group_digits(&value.to_string())
}

pub fn display_count(value: Option<u64>) -> String {
    match value {
        Some(value) => group_thousands(value),
        None => SENTINEL.to_string(),
    }
}

/// Scores render with two fractional digits unless the value is integral, in
/// which case they render like counts.
pub fn display_score(value: Option<f64>) -> String {
    let value = match value {
        Some(value) => value,
        None => return SENTINEL.to_string(),
    };

    let formatted = format!("{value:.2}");
    match formatted.split_once('.') {
        Some((whole, "00")) => group_digits(whole),
        Some((whole, frac)) => format!("{}.{frac}", group_digits(whole)),
        None => formatted,
    }
}

pub fn display_text(value: Option<String>) -> String {
    value.unwrap_or_else(|| SENTINEL.to_string())
}

/// Tag lists substitute `["None"]` when empty. Symbol lists do not go through
/// this function: an empty symbol list stays `[]`, and that asymmetry is part
/// of the output contract.
pub fn display_tags(tags: Vec<String>) -> Vec<String> {
    if tags.is_empty() {
        vec!["None".to_string()]
    } else {
        tags
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorProfileView {
    pub author_handle: String,
    pub name: String,
    pub bio: String,
    pub bio_url: String,
    pub profile_image_url: String,
    pub banner_image_url: String,
    pub follower_count: String,
    pub following_count: String,
    pub created_at: String,
    pub crypto_tweets_1d: String,
    pub crypto_tweets_7d: String,
    pub crypto_tweets_30d: String,
    pub engagement_score: String,
    pub follower_impact_score: String,
    pub mention_count_7d: String,
    pub symbol_count_7d: String,
    pub tags: Vec<String>,
    pub mindshare: String,
    pub smart_follower_count: String,
}

impl From<AuthorDetails> for AuthorProfileView {
    fn from(details: AuthorDetails) -> Self {
        Self {
            author_handle: display_text(details.author_handle),
            name: display_text(details.name),
            bio: display_text(details.bio),
            bio_url: display_text(details.bio_url),
            profile_image_url: display_text(details.profile_image_url),
            banner_image_url: display_text(details.banner_image_url),
            follower_count: display_count(details.follower_count),
            following_count: display_count(details.following_count),
            created_at: display_text(details.created_at),
            crypto_tweets_1d: display_score(details.crypto_tweets_1d),
            crypto_tweets_7d: display_score(details.crypto_tweets_7d),
            crypto_tweets_30d: display_score(details.crypto_tweets_30d),
            engagement_score: display_score(details.engagement_score),
            follower_impact_score: display_score(details.follower_impact_score),
            mention_count_7d: display_count(details.mention_count_7d),
            symbol_count_7d: display_count(details.symbol_count_7d),
            tags: display_tags(details.tags),
            mindshare: display_score(details.mindshare),
            smart_follower_count: display_score(details.smart_follower_count),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopTweetsView {
    pub author_handle: String,
    pub total_tweets: usize,
    pub interval: String,
    pub sort_by: String,
    pub tweets: Vec<TweetView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetView {
    pub position: usize,
    pub tweet_id: String,
    pub content: String,
    pub created_at: String,
    pub metrics: TweetMetricsView,
    pub symbols_mentioned: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TweetMetricsView {
    pub views: String,
    pub likes: String,
    pub replies: String,
    pub retweets: String,
    pub quotes: String,
    pub bookmarks: String,
}

impl TweetView {
    /// Positions are 1-based and follow upstream order; the upstream already
    /// sorted by the requested key and is authoritative.
    pub fn from_tweet(position: usize, tweet: Tweet) -> Self {
        Self {
            position,
            tweet_id: display_text(tweet.tweet_id),
            content: display_text(tweet.content),
            created_at: display_text(tweet.created_at),
            metrics: TweetMetricsView {
                views: display_count(tweet.view_count),
                likes: display_count(tweet.like_count),
                replies: display_count(tweet.reply_count),
                retweets: display_count(tweet.retweet_count),
                quotes: display_count(tweet.quote_count),
                bookmarks: display_count(tweet.bookmark_count),
            },
            symbols_mentioned: tweet.symbols_mentioned,
        }
    }
}

pub fn to_pretty_json<T: Serialize>(view: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_handles_boundary_widths() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12345), "12,345");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn absent_values_render_as_sentinel_never_zero() {
        assert_eq!(display_count(None), "N/A");
        assert_eq!(display_score(None), "N/A");
        assert_eq!(display_text(None), "N/A");
        assert_ne!(display_count(Some(0)), "N/A");
        assert_eq!(display_count(Some(0)), "0");
    }

    #[test]
    fn scores_keep_two_fraction_digits_when_not_integral() {
        assert_eq!(display_score(Some(0.53)), "0.53");
        assert_eq!(display_score(Some(1200.5)), "1,200.50");
        assert_eq!(display_score(Some(87.0)), "87");
        assert_eq!(display_score(Some(2.999)), "3");
    }

    #[test]
    fn empty_tags_become_none_marker_and_order_is_preserved() {
        assert_eq!(display_tags(Vec::new()), vec!["None".to_string()]);

        let tags = vec!["defi".to_string(), "nft".to_string(), "ai".to_string()];
        assert_eq!(display_tags(tags.clone()), tags);
    }

    #[test]
    fn author_view_applies_sentinel_uniformly() {
        let details = AuthorDetails {
            author_handle: Some("alice".to_string()),
            follower_count: Some(1234567),
            engagement_score: Some(42.5),
            ..AuthorDetails::default()
        };

        let view = AuthorProfileView::from(details);
        assert_eq!(view.author_handle, "alice");
        assert_eq!(view.follower_count, "1,234,567");
        assert_eq!(view.engagement_score, "42.50");
        assert_eq!(view.name, "N/A");
        assert_eq!(view.following_count, "N/A");
        assert_eq!(view.mindshare, "N/A");
        assert_eq!(view.tags, vec!["None".to_string()]);
    }

    #[test]
    fn float_activity_counters_render_like_grouped_counts() {
        let details = AuthorDetails {
            crypto_tweets_7d: Some(12.0),
            smart_follower_count: Some(1234.0),
            mindshare: Some(0.53),
            ..AuthorDetails::default()
        };

        let view = AuthorProfileView::from(details);
        assert_eq!(view.crypto_tweets_7d, "12");
        assert_eq!(view.smart_follower_count, "1,234");
        assert_eq!(view.mindshare, "0.53");
        assert_eq!(view.crypto_tweets_1d, "N/A");
    }

    #[test]
    fn tweet_view_keeps_empty_symbols_empty() {
        let view = TweetView::from_tweet(1, Tweet::default());
        assert!(view.symbols_mentioned.is_empty());
        assert_eq!(view.metrics.views, "N/A");
        assert_eq!(view.tweet_id, "N/A");
    }

    #[test]
    fn pretty_json_uses_two_space_indent_and_declared_field_order() {
        let view = TweetMetricsView {
            views: "1,000".to_string(),
            likes: "N/A".to_string(),
            replies: "2".to_string(),
            retweets: "3".to_string(),
            quotes: "4".to_string(),
            bookmarks: "5".to_string(),
        };

        let rendered = to_pretty_json(&view).expect("view should serialize");
        assert!(rendered.starts_with("{\n  \"views\": \"1,000\""));
        assert!(rendered.contains("\"likes\": \"N/A\""));
    }
}

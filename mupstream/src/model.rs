//! Decoded payload shapes for the upstream analytics API.
//!
//! Every scalar field is optional: the upstream reports "unknown" by omitting
//! or nulling a field, and that must never collapse into zero downstream.

use serde::Deserialize;

/// Response envelope of `GET /user/author-handle-details`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthorDetailsEnvelope {
    pub result: Option<AuthorDetails>,
    pub message: Option<String>,
}

/// Response envelope of `GET /user/get-top-tweets`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopTweetsEnvelope {
    pub result: Option<Vec<Tweet>>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuthorDetails {
    pub author_handle: Option<String>,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub bio_url: Option<String>,
    pub profile_image_url: Option<String>,
    pub banner_image_url: Option<String>,
    pub follower_count: Option<u64>,
    pub following_count: Option<u64>,
    pub created_at: Option<String>,
    // Activity counters arrive as integers or floats depending on the
    // upstream's aggregation, so they decode as f64.
    pub crypto_tweets_1d: Option<f64>,
    pub crypto_tweets_7d: Option<f64>,
    pub crypto_tweets_30d: Option<f64>,
    pub engagement_score: Option<f64>,
    pub follower_impact_score: Option<f64>,
    pub mention_count_7d: Option<u64>,
    pub symbol_count_7d: Option<u64>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub mindshare: Option<f64>,
    pub smart_follower_count: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Tweet {
    pub tweet_id: Option<String>,
    pub author_handle: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
    pub reply_count: Option<u64>,
    pub retweet_count: Option<u64>,
    pub quote_count: Option<u64>,
    pub bookmark_count: Option<u64>,
    #[serde(default)]
    pub symbols_mentioned: Vec<String>,
}

//! Query types for the two upstream read operations.
//!
//! ```rust
//! use mupstream::{Interval, SortKey, TopTweetsQuery};
//!
//! let query = TopTweetsQuery::new("alice");
//! assert_eq!(query.interval, Interval::SevenDay);
//! assert_eq!(query.sort_by, SortKey::ViewCount);
//! assert_eq!(query.limit, 5);
//! ```

/// Rolling time window accepted by the top-tweets endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interval {
    OneDay,
    #[default]
    SevenDay,
    ThirtyDay,
}

impl Interval {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1day",
            Self::SevenDay => "7day",
            Self::ThirtyDay => "30day",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "1day" => Some(Self::OneDay),
            "7day" => Some(Self::SevenDay),
            "30day" => Some(Self::ThirtyDay),
            _ => None,
        }
    }

    pub const CHOICES: [&'static str; 3] = ["1day", "7day", "30day"];
}

/// Sort order accepted by the top-tweets endpoint. All orders are descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    ViewCount,
    LikeCount,
    ReplyCount,
    RetweetCount,
    CreatedAt,
}

impl SortKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ViewCount => "view_count_desc",
            Self::LikeCount => "like_count_desc",
            Self::ReplyCount => "reply_count_desc",
            Self::RetweetCount => "retweet_count_desc",
            Self::CreatedAt => "created_at_desc",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "view_count_desc" => Some(Self::ViewCount),
            "like_count_desc" => Some(Self::LikeCount),
            "reply_count_desc" => Some(Self::ReplyCount),
            "retweet_count_desc" => Some(Self::RetweetCount),
            "created_at_desc" => Some(Self::CreatedAt),
            _ => None,
        }
    }

    pub const CHOICES: [&'static str; 5] = [
        "view_count_desc",
        "like_count_desc",
        "reply_count_desc",
        "retweet_count_desc",
        "created_at_desc",
    ];
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDetailsQuery {
    pub author_handle: String,
}

impl AuthorDetailsQuery {
    pub fn new(author_handle: impl Into<String>) -> Self {
        Self {
            author_handle: author_handle.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopTweetsQuery {
    pub author_handle: String,
    pub interval: Interval,
    pub sort_by: SortKey,
    pub limit: u32,
}

impl TopTweetsQuery {
    pub fn new(author_handle: impl Into<String>) -> Self {
        Self {
            author_handle: author_handle.into(),
            interval: Interval::default(),
            sort_by: SortKey::default(),
            limit: 5,
        }
    }

    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_sort_by(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{Interval, SortKey, TopTweetsQuery};

    #[test]
    fn interval_round_trips_wire_values() {
        for choice in Interval::CHOICES {
            let parsed = Interval::parse(choice).expect("choice should parse");
            assert_eq!(parsed.as_str(), choice);
        }
        assert_eq!(Interval::parse("90day"), None);
    }

    #[test]
    fn sort_key_round_trips_wire_values() {
        for choice in SortKey::CHOICES {
            let parsed = SortKey::parse(choice).expect("choice should parse");
            assert_eq!(parsed.as_str(), choice);
        }
        assert_eq!(SortKey::parse("bookmark_count_desc"), None);
    }

    #[test]
    fn top_tweets_query_builder_overrides_defaults() {
        let query = TopTweetsQuery::new("alice")
            .with_interval(Interval::ThirtyDay)
            .with_sort_by(SortKey::CreatedAt)
            .with_limit(50);

        assert_eq!(query.interval, Interval::ThirtyDay);
        assert_eq!(query.sort_by, SortKey::CreatedAt);
        assert_eq!(query.limit, 50);
    }
}

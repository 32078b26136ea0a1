//! Capability definitions advertised to agent hosts.
//!
//! The JSON input schemas carry the full argument contract: enumerated
//! choices, numeric bounds, and defaults. Hosts that honor the schema never
//! hit the runtime validators; hosts that ignore it get the same rules
//! enforced server-side.
//!
//! ```rust
//! use magpie::schema::top_tweets_definition;
//!
//! let definition = top_tweets_definition();
//! assert_eq!(definition.name, "getTopTweets");
//! ```

use mcapability::CapabilityDefinition;

pub const AUTHOR_DETAILS_NAME: &str = "getAuthorDetails";
pub const TOP_TWEETS_NAME: &str = "getTopTweets";

const AUTHOR_DETAILS_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "author_handle": {
      "type": "string",
      "description": "Twitter handle of the author, with or without the leading @"
    }
  },
  "required": ["author_handle"]
}"#;

const TOP_TWEETS_SCHEMA: &str = r#"{
  "type": "object",
  "properties": {
    "author_handle": {
      "type": "string",
      "description": "Twitter handle of the author, with or without the leading @"
    },
    "interval": {
      "type": "string",
      "enum": ["1day", "7day", "30day"],
      "default": "7day",
      "description": "Rolling time window the ranking covers"
    },
    "sort_by": {
      "type": "string",
      "enum": [
        "view_count_desc",
        "like_count_desc",
        "reply_count_desc",
        "retweet_count_desc",
        "created_at_desc"
      ],
      "default": "view_count_desc",
      "description": "Engagement counter or recency to rank by, always descending"
    },
    "limit": {
      "type": "integer",
      "minimum": 1,
      "maximum": 50,
      "default": 5,
      "description": "Maximum number of tweets to return"
    }
  },
  "required": ["author_handle"]
}"#;

pub fn author_details_definition() -> CapabilityDefinition {
    CapabilityDefinition {
        name: AUTHOR_DETAILS_NAME.to_string(),
        description: "Fetches profile, follower, and crypto-activity details for a Twitter author."
            .to_string(),
        input_schema: AUTHOR_DETAILS_SCHEMA.to_string(),
    }
}

pub fn top_tweets_definition() -> CapabilityDefinition {
    CapabilityDefinition {
        name: TOP_TWEETS_NAME.to_string(),
        description:
            "Fetches an author's top tweets over a time window, ranked by an engagement counter."
                .to_string(),
        input_schema: TOP_TWEETS_SCHEMA.to_string(),
    }
}

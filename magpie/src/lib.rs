//! Unified facade over the Magpie workspace crates.
//!
//! This crate is designed to be the single dependency for most applications.
//! It re-exports the core magpie crates and provides the two crypto-Twitter
//! analytics capabilities, their schemas, the output renderer, and wiring
//! helpers from process configuration to a ready capability runtime.
//!
//! ```rust
//! use magpie::{UpstreamConfig, build_bundle};
//!
//! let config = UpstreamConfig::new("https://analytics.example.com");
//! let bundle = build_bundle(&config).expect("bundle should build");
//! assert!(bundle.registry.contains("getAuthorDetails"));
//! assert!(bundle.registry.contains("getTopTweets"));
//! ```

pub mod capabilities;
pub mod prelude;
pub mod render;
pub mod runtime;
pub mod schema;

pub use mcapability;
pub use mcommon;
pub use mupstream;

pub use mcapability::{
    Capability, CapabilityCall, CapabilityDefinition, CapabilityError, CapabilityErrorKind,
    CapabilityFuture, CapabilityRegistry, CapabilityRuntime, CapabilityRuntimeHooks,
    DefaultCapabilityRuntime, FunctionCapability, InvocationContext, InvocationResult,
    NoopCapabilityRuntimeHooks, optional_integer_in_range, optional_string, parse_json_object,
    parse_json_value, required_string,
};
pub use mcommon::{BoxFuture, InvocationId, MetadataMap, TraceId};
pub use mupstream::{
    AnalyticsTransport, ApiCredentials, AuthorDetails, AuthorDetailsEnvelope, AuthorDetailsQuery,
    HttpAnalyticsTransport, Interval, SecretString, SortKey, TopTweetsEnvelope, TopTweetsQuery,
    Tweet, UpstreamError, UpstreamFuture,
};

pub use capabilities::{
    AUTHOR_DETAILS_NOT_FOUND_TEXT, AuthorDetailsCapability, DEFAULT_LIMIT, MAX_LIMIT, MIN_LIMIT,
    NO_AUTHOR_DETAILS_TEXT, NO_RESPONSE_TEXT, Operation, RATE_LIMITED_TEXT,
    TOP_TWEETS_NOT_FOUND_TEXT, TopTweetsCapability, describe_upstream_error,
};
pub use render::{
    AuthorProfileView, SENTINEL, TopTweetsView, TweetMetricsView, TweetView, display_count,
    display_score, display_tags, display_text, group_thousands, to_pretty_json,
};
pub use runtime::{
    API_KEY_VAR, BASE_URL_VAR, CapabilityBundle, DEFAULT_TIMEOUT, TIMEOUT_SECS_VAR, UpstreamConfig,
    build_bundle, build_bundle_with, build_capability_registry, build_transport, bundle_from_env,
};
pub use schema::{
    AUTHOR_DETAILS_NAME, TOP_TWEETS_NAME, author_details_definition, top_tweets_definition,
};

#[cfg(test)]
mod tests {
    use crate::{author_details_definition, build_capability_registry, top_tweets_definition};
    use std::sync::Arc;

    #[test]
    fn definitions_use_the_advertised_names() {
        assert_eq!(author_details_definition().name, "getAuthorDetails");
        assert_eq!(top_tweets_definition().name, "getTopTweets");
    }

    #[test]
    fn registry_builder_advertises_both_definitions() {
        let transport = Arc::new(crate::HttpAnalyticsTransport::new(
            reqwest::Client::new(),
            "https://analytics.example.com",
        ));

        let registry = build_capability_registry(transport);
        let mut names: Vec<String> = registry
            .definitions()
            .into_iter()
            .map(|definition| definition.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["getAuthorDetails", "getTopTweets"]);
    }
}

//! Common imports for most Magpie applications.

pub use crate::{
    build_bundle, build_bundle_with, build_capability_registry, build_transport, bundle_from_env,
};
pub use crate::{
    AnalyticsTransport, ApiCredentials, AuthorDetailsCapability, AuthorDetailsQuery, BoxFuture,
    Capability, CapabilityBundle, CapabilityCall, CapabilityDefinition, CapabilityError,
    CapabilityErrorKind, CapabilityRegistry, CapabilityRuntime, CapabilityRuntimeHooks,
    DefaultCapabilityRuntime, HttpAnalyticsTransport, Interval, InvocationContext,
    InvocationResult, SortKey, TopTweetsCapability, TopTweetsQuery, UpstreamConfig, UpstreamError,
};
pub use crate::{author_details_definition, top_tweets_definition};

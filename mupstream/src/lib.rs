//! Client for the upstream crypto-Twitter analytics API.
//!
//! Exposes the two read operations the capability layer is built on: author
//! handle details and an author's top tweets over a rolling window. The HTTP
//! transport sits behind [`AnalyticsTransport`] so callers can substitute fakes.

mod credentials;
mod error;
mod model;
mod query;
mod transport;

pub mod prelude {
    pub use crate::{
        AnalyticsTransport, ApiCredentials, AuthorDetailsQuery, HttpAnalyticsTransport, Interval,
        SortKey, TopTweetsQuery, UpstreamError, UpstreamFuture,
    };
}

pub use credentials::{ApiCredentials, SecretString};
pub use error::UpstreamError;
pub use model::{AuthorDetails, AuthorDetailsEnvelope, TopTweetsEnvelope, Tweet};
pub use query::{AuthorDetailsQuery, Interval, SortKey, TopTweetsQuery};
pub use transport::{AnalyticsTransport, HttpAnalyticsTransport, UpstreamFuture};

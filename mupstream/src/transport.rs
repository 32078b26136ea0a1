//! Analytics transport trait and the reqwest-backed HTTP implementation.
//!
//! Each call is a single attempt: no retry, no backoff. The caller owns the
//! timeout via the `reqwest::Client` it supplies. A `None` envelope means the
//! server answered 2xx with an empty body.

use std::sync::Arc;

use mcommon::BoxFuture;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    ApiCredentials, AuthorDetailsEnvelope, AuthorDetailsQuery, TopTweetsEnvelope, TopTweetsQuery,
    UpstreamError,
};

pub type UpstreamFuture<'a, T> = BoxFuture<'a, T>;

pub trait AnalyticsTransport: Send + Sync + std::fmt::Debug {
    fn author_details<'a>(
        &'a self,
        query: AuthorDetailsQuery,
    ) -> UpstreamFuture<'a, Result<Option<AuthorDetailsEnvelope>, UpstreamError>>;

    fn top_tweets<'a>(
        &'a self,
        query: TopTweetsQuery,
    ) -> UpstreamFuture<'a, Result<Option<TopTweetsEnvelope>, UpstreamError>>;
}

#[derive(Debug, Clone)]
pub struct HttpAnalyticsTransport {
    client: Client,
    base_url: String,
    credentials: Option<Arc<ApiCredentials>>,
}

impl HttpAnalyticsTransport {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            credentials: None,
        }
    }

    pub fn with_credentials(mut self, credentials: Arc<ApiCredentials>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Builds the author-details URL. Handles are caller-supplied and may hold
    /// reserved URL characters, so every parameter is percent-encoded.
    pub fn author_details_url(&self, query: &AuthorDetailsQuery) -> Result<Url, UpstreamError> {
        Url::parse_with_params(
            &self.endpoint("user/author-handle-details"),
            &[("author_handle", query.author_handle.as_str())],
        )
        .map_err(|err| UpstreamError::transport(err.to_string()))
    }

    pub fn top_tweets_url(&self, query: &TopTweetsQuery) -> Result<Url, UpstreamError> {
        Url::parse_with_params(
            &self.endpoint("user/get-top-tweets"),
            &[
                ("author_handle", query.author_handle.as_str()),
                ("interval", query.interval.as_str()),
                ("sort_by", query.sort_by.as_str()),
                ("limit", query.limit.to_string().as_str()),
            ],
        )
        .map_err(|err| UpstreamError::transport(err.to_string()))
    }

    async fn fetch(&self, url: Url) -> Result<Option<String>, UpstreamError> {
        let mut builder = self.client.get(url);
        if let Some(credentials) = &self.credentials {
            if let Some(key) = credentials.with_api_key(|key| key.to_string())? {
                builder = builder.header("x-api-key", key);
            }
        }

        let response = builder
            .send()
            .await
            .map_err(|err| UpstreamError::transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(classify_status(status));
        }

        let body = response
            .text()
            .await
            .map_err(|err| UpstreamError::transport(err.to_string()))?;

        if body.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(body))
    }
}

impl AnalyticsTransport for HttpAnalyticsTransport {
    fn author_details<'a>(
        &'a self,
        query: AuthorDetailsQuery,
    ) -> UpstreamFuture<'a, Result<Option<AuthorDetailsEnvelope>, UpstreamError>> {
        Box::pin(async move {
            let url = self.author_details_url(&query)?;
            decode_envelope(self.fetch(url).await?)
        })
    }

    fn top_tweets<'a>(
        &'a self,
        query: TopTweetsQuery,
    ) -> UpstreamFuture<'a, Result<Option<TopTweetsEnvelope>, UpstreamError>> {
        Box::pin(async move {
            let url = self.top_tweets_url(&query)?;
            decode_envelope(self.fetch(url).await?)
        })
    }
}

fn classify_status(status: StatusCode) -> UpstreamError {
    match status {
        StatusCode::NOT_FOUND => UpstreamError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => UpstreamError::RateLimited,
        _ => UpstreamError::status(status.as_u16(), status.canonical_reason().unwrap_or_default()),
    }
}

fn decode_envelope<T: DeserializeOwned>(body: Option<String>) -> Result<Option<T>, UpstreamError> {
    match body {
        None => Ok(None),
        Some(body) => serde_json::from_str(&body)
            .map(Some)
            .map_err(|err| UpstreamError::transport(err.to_string())),
    }
}

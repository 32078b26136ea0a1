//! Wiring helpers from process configuration to a ready capability runtime.
//!
//! Configuration is read once at startup and baked into the transport; nothing
//! re-reads the environment per invocation.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use mcapability::{CapabilityRegistry, CapabilityRuntimeHooks, DefaultCapabilityRuntime};
use mupstream::{AnalyticsTransport, ApiCredentials, HttpAnalyticsTransport, UpstreamError};

use crate::capabilities::{AuthorDetailsCapability, TopTweetsCapability};

pub const BASE_URL_VAR: &str = "MAGPIE_UPSTREAM_BASE_URL";
pub const API_KEY_VAR: &str = "MAGPIE_UPSTREAM_API_KEY";
pub const TIMEOUT_SECS_VAR: &str = "MAGPIE_UPSTREAM_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Startup configuration for the upstream analytics host.
#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn from_env() -> Result<Self, UpstreamError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// The environment-variable contract, parameterized over the lookup so it
    /// can be exercised without mutating process state.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, UpstreamError> {
        let base_url = lookup(BASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| UpstreamError::transport(format!("{BASE_URL_VAR} is not set")))?;

        let api_key = lookup(API_KEY_VAR).filter(|value| !value.trim().is_empty());

        let timeout = match lookup(TIMEOUT_SECS_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    UpstreamError::transport(format!(
                        "{TIMEOUT_SECS_VAR} must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        let mut config = Self::new(base_url).with_timeout(timeout);
        if let Some(api_key) = api_key {
            config = config.with_api_key(api_key);
        }

        Ok(config)
    }
}

/// Registry plus dispatcher, ready to hand to whatever serves the host.
#[derive(Clone)]
pub struct CapabilityBundle {
    pub registry: Arc<CapabilityRegistry>,
    pub runtime: DefaultCapabilityRuntime,
}

pub fn build_transport(config: &UpstreamConfig) -> Result<HttpAnalyticsTransport, UpstreamError> {
    let client = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|err| UpstreamError::transport(err.to_string()))?;

    let mut transport = HttpAnalyticsTransport::new(client, config.base_url.clone());
    if let Some(api_key) = &config.api_key {
        let credentials = Arc::new(ApiCredentials::new());
        credentials.set_api_key(api_key)?;
        transport = transport.with_credentials(credentials);
    }

    Ok(transport)
}

pub fn build_capability_registry(transport: Arc<dyn AnalyticsTransport>) -> CapabilityRegistry {
    let mut registry = CapabilityRegistry::new();
    registry.register(AuthorDetailsCapability::new(Arc::clone(&transport)));
    registry.register(TopTweetsCapability::new(transport));
    registry
}

pub fn build_bundle(config: &UpstreamConfig) -> Result<CapabilityBundle, UpstreamError> {
    build_bundle_with(config, None)
}

pub fn build_bundle_with(
    config: &UpstreamConfig,
    hooks: Option<Arc<dyn CapabilityRuntimeHooks>>,
) -> Result<CapabilityBundle, UpstreamError> {
    let transport: Arc<dyn AnalyticsTransport> = Arc::new(build_transport(config)?);
    let registry = Arc::new(build_capability_registry(transport));

    let mut runtime = DefaultCapabilityRuntime::new(Arc::clone(&registry));
    if let Some(hooks) = hooks {
        runtime = runtime.with_hooks(hooks);
    }

    Ok(CapabilityBundle { registry, runtime })
}

pub fn bundle_from_env() -> Result<CapabilityBundle, UpstreamError> {
    build_bundle(&UpstreamConfig::from_env()?)
}

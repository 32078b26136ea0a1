//! In-memory API credential storage for the upstream analytics host.

use std::sync::{Mutex, MutexGuard};

use crate::UpstreamError;

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Holds the single upstream API key. There is exactly one upstream host, so a
/// provider-keyed map would be indirection with nothing to index.
#[derive(Debug, Default)]
pub struct ApiCredentials {
    api_key: Mutex<Option<SecretString>>,
}

impl ApiCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_api_key(&self, api_key: impl Into<String>) -> Result<(), UpstreamError> {
        let api_key = SecretString::new(api_key);
        if api_key.is_empty() {
            return Err(UpstreamError::transport("api key must not be empty"));
        }

        *self.api_key_mut()? = Some(api_key);
        Ok(())
    }

    pub fn has_api_key(&self) -> Result<bool, UpstreamError> {
        Ok(self.api_key_mut()?.is_some())
    }

    pub fn with_api_key<R>(&self, f: impl FnOnce(&str) -> R) -> Result<Option<R>, UpstreamError> {
        let guard = self.api_key_mut()?;
        Ok(guard.as_ref().map(|secret| f(secret.expose())))
    }

    pub fn clear(&self) -> Result<bool, UpstreamError> {
        Ok(self.api_key_mut()?.take().is_some())
    }

    fn api_key_mut(&self) -> Result<MutexGuard<'_, Option<SecretString>>, UpstreamError> {
        self.api_key
            .lock()
            .map_err(|_| UpstreamError::transport("credential lock poisoned"))
    }
}

#[cfg(test)]
mod tests {
    use super::{ApiCredentials, SecretString};

    #[test]
    fn secret_string_debug_is_redacted() {
        let secret = SecretString::new("mg-live-123");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.expose(), "mg-live-123");
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let credentials = ApiCredentials::new();
        credentials
            .set_api_key("")
            .expect_err("empty key should be rejected");
        assert!(!credentials.has_api_key().expect("lock should be healthy"));
    }

    #[test]
    fn api_key_lifecycle() {
        let credentials = ApiCredentials::new();
        credentials.set_api_key("mg-live-123").expect("key should set");

        let exposed = credentials
            .with_api_key(|key| key.to_string())
            .expect("lock should be healthy")
            .expect("key should be present");
        assert_eq!(exposed, "mg-live-123");

        assert!(credentials.clear().expect("lock should be healthy"));
        assert!(!credentials.has_api_key().expect("lock should be healthy"));
    }
}

//! Realtime client configuration.

use super::error::RealtimeError;

/// Default base URL for the Irish Rail realtime API.
pub const DEFAULT_BASE_URL: &str = "http://api.irishrail.ie/realtime/realtime.asmx";

/// XML namespace the service puts every element in.
pub const DEFAULT_NAMESPACE: &str = "http://api.irishrail.ie/realtime/";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_BASE_URL: &str = "IRISH_RAIL_BASE_URL";
const ENV_NAMESPACE: &str = "IRISH_RAIL_NAMESPACE";
const ENV_TIMEOUT_SECS: &str = "IRISH_RAIL_TIMEOUT_SECS";

/// Configuration for the realtime client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RealtimeConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Namespace that qualifies every element in the responses
    pub namespace: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl RealtimeConfig {
    /// Create a config pointing at the production service.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Build a config from `IRISH_RAIL_*` environment variables.
    ///
    /// Unset variables keep their defaults; a timeout that is not a whole
    /// number of seconds is rejected.
    pub fn from_env() -> Result<Self, RealtimeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RealtimeError> {
        let mut config = Self::new();

        if let Some(url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(url);
        }
        if let Some(namespace) = lookup(ENV_NAMESPACE) {
            config = config.with_namespace(namespace);
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse().map_err(|_| RealtimeError::Config {
                message: format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {raw:?}"),
            })?;
            config = config.with_timeout(secs);
        }

        Ok(config)
    }

    /// Set a custom base URL (for testing against fixtures).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the XML namespace used for element lookup.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self::new()
    }
}

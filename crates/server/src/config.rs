use std::time::Duration;

use tracing::{debug, warn};

pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PROXY_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

/// Settings for the generation proxy, read from the environment.
#[derive(Debug, Clone)]
pub struct ProxyConfig {
    /// Vendor credential. Never sent to clients.
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ProxyConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads `GEMINI_API_KEY`, `GEMINI_API_BASE_URL`, `GEMINI_MODEL` and
    /// `PROXY_TIMEOUT_SECS` through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self {
            api_key: var("GEMINI_API_KEY"),
            ..Self::default()
        };

        if let Some(url) = var("GEMINI_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Some(model) = var("GEMINI_MODEL") {
            config.model = model;
        }
        if let Some(raw) = var("PROXY_TIMEOUT_SECS") {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or(ConfigError::InvalidTimeout(raw))?;
            config.timeout = Duration::from_secs(secs);
        }

        if config.api_key.is_none() {
            warn!("GEMINI_API_KEY is not set, /api/generate will answer 500");
        }
        debug!(
            base_url = %config.api_base_url,
            model = %config.model,
            timeout_secs = config.timeout.as_secs(),
            "Proxy configuration loaded"
        );

        Ok(config)
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Endpoint without the credential, which travels as the `key` query
    /// parameter.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = ProxyConfig::from_lookup(lookup(&[])).unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(
            config.generate_url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[test]
    fn test_overrides_and_blank_key() {
        let config = ProxyConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "   "),
            ("GEMINI_API_BASE_URL", "http://localhost:9000/"),
            ("GEMINI_MODEL", "gemini-pro"),
            ("PROXY_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(
            config.generate_url(),
            "http://localhost:9000/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let err = ProxyConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTimeout(v) if v == "0"));
    }
}

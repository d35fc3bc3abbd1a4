use std::time::Duration;

use tracing::warn;

use crate::{Error, Result};

/// Gateway settings, read from the environment (after `.env` has been loaded).
#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub http_port: u16,
    pub backend_url: String,
    pub allowed_origins: Vec<String>,
    pub proxy_timeout: Duration,
}

impl Config {
    const DEFAULT_HOST: &str = "0.0.0.0";
    const DEFAULT_HTTP_PORT: u16 = 8090;
    const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:5000";
    /// Must exceed the portal's 180 s upload deadline.
    const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 190;

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so tests don't touch process env.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_port = lookup("SEATING_HTTP_PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(Self::DEFAULT_HTTP_PORT);
        let proxy_timeout_secs = lookup("SEATING_PROXY_TIMEOUT_SECS")
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(Self::DEFAULT_PROXY_TIMEOUT_SECS);
        let backend_url = lookup("SEATING_BACKEND_URL").unwrap_or_else(|| {
            warn!(
                "SEATING_BACKEND_URL not set, using default {}",
                Self::DEFAULT_BACKEND_URL
            );
            Self::DEFAULT_BACKEND_URL.to_string()
        });

        Self {
            host: lookup("SEATING_HOST").unwrap_or_else(|| Self::DEFAULT_HOST.to_string()),
            http_port,
            backend_url: backend_url.trim_end_matches('/').to_string(),
            allowed_origins: lookup("SEATING_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            proxy_timeout: Duration::from_secs(proxy_timeout_secs),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.is_empty() || self.allowed_origins.iter().any(|o| o == "*")
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "backend url must start with http:// or https://, got '{}'",
                self.backend_url
            )));
        }
        if self.proxy_timeout.is_zero() {
            return Err(Error::Config("proxy timeout must be positive".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.bind_address(), "0.0.0.0:8090");
        assert_eq!(config.backend_url, "http://127.0.0.1:5000");
        assert_eq!(config.proxy_timeout, Duration::from_secs(190));
        assert!(config.allows_any_origin());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            ("SEATING_HOST", "127.0.0.1"),
            ("SEATING_HTTP_PORT", "9000"),
            ("SEATING_BACKEND_URL", "http://backend:8000/"),
            ("SEATING_ALLOWED_ORIGINS", "http://a.test, http://b.test"),
            ("SEATING_PROXY_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.backend_url, "http://backend:8000");
        assert_eq!(config.allowed_origins, vec!["http://a.test", "http://b.test"]);
        assert!(!config.allows_any_origin());
        assert_eq!(config.proxy_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("SEATING_HTTP_PORT", "nope")]));
        assert_eq!(config.http_port, 8090);
    }

    #[test]
    fn test_validate_rejects_bad_backend_url() {
        let config = Config::from_lookup(lookup_from(&[("SEATING_BACKEND_URL", "backend:8000")]));
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }
}

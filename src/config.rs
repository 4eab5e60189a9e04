//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Default upstream country-data provider.
pub const DEFAULT_UPSTREAM_URL: &str = "https://restcountries.com/v3.1";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// TTL in seconds applied uniformly to every cache key
    pub cache_ttl: u64,
    /// Background sweep interval in seconds
    pub cleanup_interval: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream country-data API
    pub upstream_url: String,
    /// Upper bound in seconds on a single upstream request
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Cache expiry in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 600)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_URL` - Upstream API base URL (default: REST Countries v3.1)
    /// - `UPSTREAM_TIMEOUT` - Per-request upstream timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_url: env::var("UPSTREAM_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.upstream_url),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT").unwrap_or(defaults.upstream_timeout),
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 3600,
            cleanup_interval: 600,
            server_port: 3000,
            upstream_url: DEFAULT_UPSTREAM_URL.to_string(),
            upstream_timeout: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.cleanup_interval, 600);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);
        assert_eq!(config.upstream_timeout, 30);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("CACHE_TTL");
        env::remove_var("CLEANUP_INTERVAL");
        env::remove_var("SERVER_PORT");
        env::remove_var("UPSTREAM_URL");
        env::remove_var("UPSTREAM_TIMEOUT");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 3600);
        assert_eq!(config.cleanup_interval, 600);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_url, DEFAULT_UPSTREAM_URL);

        env::set_var("CACHE_TTL", "120");
        env::set_var("SERVER_PORT", "not-a-port");
        env::set_var("UPSTREAM_URL", "http://localhost:9999/v3.1/");
        env::set_var("UPSTREAM_TIMEOUT", "5");

        let config = Config::from_env();
        assert_eq!(config.cache_ttl, 120);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.upstream_url, "http://localhost:9999/v3.1");
        assert_eq!(config.upstream_timeout, 5);

        env::remove_var("CACHE_TTL");
        env::remove_var("SERVER_PORT");
        env::remove_var("UPSTREAM_URL");
        env::remove_var("UPSTREAM_TIMEOUT");
    }
}

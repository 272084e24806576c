//! Configuration Module
//!
//! Loads accessor options and driver settings from environment variables.

use std::env;
use std::time::Duration;

use crate::options::CacheOptions;
use crate::serializer::SerializerKind;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Prefix prepended to every cache key
    pub key_prefix: String,
    /// TTL in seconds for every write, 0 = no expiry
    pub default_ttl: u64,
    /// Compute uncached when the driver fails a lookup
    pub ignore_err: bool,
    /// Codec for stored values
    pub serializer: SerializerKind,
    /// Capacity of the local driver
    pub max_entries: usize,
    /// Local driver expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_KEY_PREFIX` - Key prefix (default: empty)
    /// - `CACHE_DEFAULT_TTL` - TTL in seconds (default: 0)
    /// - `CACHE_IGNORE_ERR` - Tolerate driver lookup errors (default: false)
    /// - `CACHE_SERIALIZER` - `json`, `binary` or `msgpack` (default: json)
    /// - `CACHE_MAX_ENTRIES` - Local driver capacity (default: 1000)
    /// - `CACHE_CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 1)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            key_prefix: env::var("CACHE_KEY_PREFIX").unwrap_or(defaults.key_prefix),
            default_ttl: parse_var("CACHE_DEFAULT_TTL").unwrap_or(defaults.default_ttl),
            ignore_err: parse_var("CACHE_IGNORE_ERR").unwrap_or(defaults.ignore_err),
            serializer: parse_var("CACHE_SERIALIZER").unwrap_or(defaults.serializer),
            max_entries: parse_var("CACHE_MAX_ENTRIES").unwrap_or(defaults.max_entries),
            cleanup_interval: parse_var("CACHE_CLEANUP_INTERVAL")
                .unwrap_or(defaults.cleanup_interval),
        }
    }

    /// Accessor options for this configuration.
    pub fn options(&self) -> CacheOptions<SerializerKind> {
        CacheOptions::default()
            .with_serializer(self.serializer)
            .with_key_prefix(self.key_prefix.clone())
            .with_ttl(Duration::from_secs(self.default_ttl))
            .with_ignore_err(self.ignore_err)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            key_prefix: String::new(),
            default_ttl: 0,
            ignore_err: false,
            serializer: SerializerKind::Json,
            max_entries: 1000,
            cleanup_interval: 1,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.key_prefix, "");
        assert_eq!(config.default_ttl, 0);
        assert!(!config.ignore_err);
        assert_eq!(config.serializer, SerializerKind::Json);
        assert_eq!(config.max_entries, 1000);
        assert_eq!(config.cleanup_interval, 1);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the environment to avoid races between tests
        env::remove_var("CACHE_KEY_PREFIX");
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_IGNORE_ERR");
        env::remove_var("CACHE_SERIALIZER");
        env::remove_var("CACHE_MAX_ENTRIES");
        env::remove_var("CACHE_CLEANUP_INTERVAL");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("CACHE_KEY_PREFIX", "user:");
        env::set_var("CACHE_DEFAULT_TTL", "60");
        env::set_var("CACHE_IGNORE_ERR", "true");
        env::set_var("CACHE_SERIALIZER", "msgpack");
        env::set_var("CACHE_MAX_ENTRIES", "not a number");

        let config = Config::from_env();
        assert_eq!(config.key_prefix, "user:");
        assert_eq!(config.default_ttl, 60);
        assert!(config.ignore_err);
        assert_eq!(config.serializer, SerializerKind::MsgPack);
        assert_eq!(config.max_entries, 1000);

        env::remove_var("CACHE_KEY_PREFIX");
        env::remove_var("CACHE_DEFAULT_TTL");
        env::remove_var("CACHE_IGNORE_ERR");
        env::remove_var("CACHE_SERIALIZER");
        env::remove_var("CACHE_MAX_ENTRIES");
    }

    #[test]
    fn test_options_from_config() {
        let config = Config {
            key_prefix: "user:".to_string(),
            default_ttl: 30,
            ignore_err: true,
            serializer: SerializerKind::Binary,
            ..Config::default()
        };

        let options = config.options();
        assert_eq!(options.key_prefix, "user:");
        assert_eq!(options.default_ttl, Duration::from_secs(30));
        assert!(options.ignore_err);
        assert_eq!(options.serializer, SerializerKind::Binary);
    }
}

//! Accessor options
//!
//! Defaults plus chained overrides; a later call replaces an earlier one.

use std::time::Duration;

use crate::serializer::{JsonSerializer, Serializer};

// == Cache Options ==
/// Resolved configuration for a [`Cacheable`](crate::Cacheable).
///
/// # Example
/// ```
/// use std::time::Duration;
/// use cacheable::{CacheOptions, MsgPackSerializer};
///
/// let options = CacheOptions::default()
///     .with_key_prefix("user:")
///     .with_ttl(Duration::from_secs(3600))
///     .with_serializer(MsgPackSerializer::new());
///
/// assert_eq!(options.key_prefix, "user:");
/// ```
#[derive(Debug, Clone)]
pub struct CacheOptions<S = JsonSerializer> {
    /// Codec used for every load
    pub serializer: S,
    /// Prepended verbatim to every key
    pub key_prefix: String,
    /// TTL passed to every write, zero = no expiry
    pub default_ttl: Duration,
    /// Fall back to computing when the driver fails a lookup
    pub ignore_err: bool,
}

impl Default for CacheOptions<JsonSerializer> {
    fn default() -> Self {
        Self {
            serializer: JsonSerializer::new(),
            key_prefix: String::new(),
            default_ttl: Duration::ZERO,
            ignore_err: false,
        }
    }
}

impl<S: Serializer> CacheOptions<S> {
    /// Replaces the codec.
    pub fn with_serializer<S2: Serializer>(self, serializer: S2) -> CacheOptions<S2> {
        CacheOptions {
            serializer,
            key_prefix: self.key_prefix,
            default_ttl: self.default_ttl,
            ignore_err: self.ignore_err,
        }
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    pub fn with_ttl(mut self, default_ttl: Duration) -> Self {
        self.default_ttl = default_ttl;
        self
    }

    pub fn with_ignore_err(mut self, ignore_err: bool) -> Self {
        self.ignore_err = ignore_err;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serializer::SerializerKind;

    #[test]
    fn test_defaults() {
        let options = CacheOptions::default();
        assert_eq!(options.key_prefix, "");
        assert_eq!(options.default_ttl, Duration::ZERO);
        assert!(!options.ignore_err);
    }

    #[test]
    fn test_later_override_wins() {
        let options = CacheOptions::default()
            .with_key_prefix("a:")
            .with_ttl(Duration::from_secs(5))
            .with_key_prefix("b:")
            .with_ignore_err(true)
            .with_ignore_err(false);

        assert_eq!(options.key_prefix, "b:");
        assert_eq!(options.default_ttl, Duration::from_secs(5));
        assert!(!options.ignore_err);
    }

    #[test]
    fn test_with_serializer_keeps_other_fields() {
        let options = CacheOptions::default()
            .with_key_prefix("user:")
            .with_ignore_err(true)
            .with_serializer(SerializerKind::MsgPack);

        assert_eq!(options.serializer, SerializerKind::MsgPack);
        assert_eq!(options.key_prefix, "user:");
        assert!(options.ignore_err);
    }
}

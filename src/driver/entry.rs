//! Cache Entry Module
//!
//! Stored payload plus expiry metadata for the in-process drivers.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single stored payload with optional expiry.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// The serialized value
    pub value: Vec<u8>,
    /// Expiration instant, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry. A zero `ttl`, or one too large to represent,
    /// never expires.
    pub fn new(value: Vec<u8>, ttl: Duration) -> Self {
        let expires_at = if ttl.is_zero() {
            None
        } else {
            Instant::now().checked_add(ttl)
        };

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// An entry is expired once the current time reaches its expiration
    /// instant.
    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires) => Instant::now() >= expires,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new(b"value".to_vec(), Duration::ZERO);

        assert_eq!(entry.value, b"value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_expiration() {
        let entry = CacheEntry::new(b"value".to_vec(), Duration::from_secs(1));
        assert!(!entry.is_expired());

        tokio::time::advance(Duration::from_millis(1100)).await;

        assert!(entry.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_huge_ttl_never_expires() {
        let entry = CacheEntry::new(Vec::new(), Duration::MAX);
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_expiration_boundary_condition() {
        let entry = CacheEntry {
            value: Vec::new(),
            expires_at: Some(Instant::now()),
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}

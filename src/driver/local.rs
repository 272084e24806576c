//! Local Driver Module
//!
//! Bounded in-process cache combining an LRU map with TTL expiration.

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::Mutex;
use tracing::debug;

use super::{CacheEntry, Driver};
use crate::error::{CacheError, Result};

// == Local Store ==
#[derive(Debug)]
struct LocalStore {
    /// Key-value storage in access order
    entries: LruCache<String, CacheEntry>,
    /// Entries dropped to make room
    evictions: u64,
}

impl LocalStore {
    fn purge_expired(&mut self) -> usize {
        let expired_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_expired())
            .map(|(key, _)| key.clone())
            .collect();

        for key in &expired_keys {
            self.entries.pop(key);
        }

        expired_keys.len()
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= self.entries.cap().get()
    }
}

// == Local Driver ==
/// Bounded local cache with LRU eviction and TTL support.
///
/// When full, inserting a new key first drops expired entries, and evicts
/// the least recently used entry only if none had expired.
/// Expired entries are removed lazily on access, and in bulk by
/// [`purge_expired`](LocalDriver::purge_expired).
#[derive(Debug)]
pub struct LocalDriver {
    store: Mutex<LocalStore>,
    /// Reject writes to live keys with `KeyExists`
    atomic: bool,
    closed: AtomicBool,
}

impl LocalDriver {
    // == Constructor ==
    /// Creates a driver holding at most `max_entries` entries.
    ///
    /// # Errors
    /// Returns `CacheError::Config` if `max_entries` is zero.
    pub fn new(max_entries: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(max_entries).ok_or_else(|| {
            CacheError::Config("local driver capacity must be non-zero".to_string())
        })?;

        Ok(Self {
            store: Mutex::new(LocalStore {
                entries: LruCache::new(capacity),
                evictions: 0,
            }),
            atomic: false,
            closed: AtomicBool::new(false),
        })
    }

    /// Switches writes to set-if-absent.
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    // == Length ==
    pub async fn len(&self) -> usize {
        self.store.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    // == Evictions ==
    /// Number of entries evicted by the LRU policy so far.
    pub async fn evictions(&self) -> u64 {
        self.store.lock().await.evictions
    }

    // == Purge Expired ==
    /// Removes all expired entries. Returns the number removed.
    pub async fn purge_expired(&self) -> usize {
        self.store.lock().await.purge_expired()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(CacheError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl Driver for LocalDriver {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.ensure_open()?;
        let mut store = self.store.lock().await;

        let expired = match store.entries.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            store.entries.pop(key);
        }

        Err(CacheError::NotFound(key.to_string()))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        self.ensure_open()?;
        let mut store = self.store.lock().await;

        let live = store
            .entries
            .peek(key)
            .map(|entry| !entry.is_expired())
            .unwrap_or(false);

        if live && self.atomic {
            return Err(CacheError::KeyExists(key.to_string()));
        }

        // Expired entries give up their slot before any live entry is evicted
        if !store.entries.contains(key) && store.is_full() && store.purge_expired() == 0 {
            if let Some((evicted, _)) = store.entries.pop_lru() {
                store.evictions += 1;
                debug!(key = %evicted, "Evicted least recently used entry");
            }
        }

        store
            .entries
            .put(key.to_string(), CacheEntry::new(value, ttl));

        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        self.ensure_open()?;
        let mut store = self.store.lock().await;

        match store.entries.pop(key) {
            Some(entry) if !entry.is_expired() => Ok(()),
            _ => Err(CacheError::NotFound(key.to_string())),
        }
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::Release);
        self.store.lock().await.entries.clear();
        Ok(())
    }
}

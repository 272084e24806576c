//! In-memory driver backed by a concurrent map.
//!
//! Intended for tests and single-process use. Expired entries are dropped
//! lazily when touched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;

use super::{CacheEntry, Driver};
use crate::error::{CacheError, Result};

/// Unbounded concurrent map driver.
#[derive(Debug, Default)]
pub struct MemoryDriver {
    data: DashMap<String, CacheEntry>,
    closed: AtomicBool,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries, expired ones included until touched.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed.load(Ordering::Acquire) {
            return Err(CacheError::Closed);
        }
        Ok(())
    }
}

#[async_trait]
impl Driver for MemoryDriver {
    async fn get(&self, key: &str) -> Result<Vec<u8>> {
        self.ensure_open()?;

        let expired = match self.data.get(key) {
            Some(entry) if !entry.is_expired() => return Ok(entry.value.clone()),
            Some(_) => true,
            None => false,
        };

        if expired {
            self.data.remove_if(key, |_, entry| entry.is_expired());
        }

        Err(CacheError::NotFound(key.to_string()))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        self.ensure_open()?;
        self.data.insert(key.to_string(), CacheEntry::new(value, ttl));
        Ok(())
    }

    async fn del(&self, key: &str) -> Result<()> {
        self.ensure_open()?;

        match self.data.remove(key) {
            Some((_, entry)) if !entry.is_expired() => Ok(()),
            _ => Err(CacheError::NotFound(key.to_string())),
        }
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::Release);
        self.data.clear();
        Ok(())
    }
}

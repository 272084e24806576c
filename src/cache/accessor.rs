//! Cache Accessor Module
//!
//! Read-through loading: look the key up in the driver, and on a miss run
//! the caller's compute function and write its result back.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Duration;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::cache::{Stats, StatsRecorder};
use crate::driver::Driver;
use crate::error::{CacheError, Result};
use crate::options::CacheOptions;
use crate::serializer::{JsonSerializer, Serializer};

// == Cacheable ==
/// Cache-aside accessor for values of type `T`.
///
/// Every key passed in is prefixed with the configured key prefix before it
/// reaches the driver. The accessor is `Sync`; share it behind an `Arc` to
/// load from many tasks at once.
///
/// Concurrent misses on the same key are not coalesced: each caller runs
/// its own compute function and the last write wins.
pub struct Cacheable<T, S = JsonSerializer> {
    driver: Arc<dyn Driver>,
    serializer: S,
    key_prefix: String,
    default_ttl: Duration,
    ignore_err: bool,
    stats: StatsRecorder,
    _value: PhantomData<fn() -> T>,
}

impl<T> Cacheable<T, JsonSerializer>
where
    T: Serialize + DeserializeOwned,
{
    /// Creates an accessor with default options (JSON, no prefix, no TTL).
    pub fn with_defaults(driver: Arc<dyn Driver>) -> Self {
        Self::new(driver, CacheOptions::default())
    }
}

impl<T, S> Cacheable<T, S>
where
    T: Serialize + DeserializeOwned,
    S: Serializer,
{
    // == Constructor ==
    pub fn new(driver: Arc<dyn Driver>, options: CacheOptions<S>) -> Self {
        Self {
            driver,
            serializer: options.serializer,
            key_prefix: options.key_prefix,
            default_ttl: options.default_ttl,
            ignore_err: options.ignore_err,
            stats: StatsRecorder::new(),
            _value: PhantomData,
        }
    }

    /// Full driver key for a caller key.
    pub fn key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }

    // == Load ==
    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// - Hit: the stored payload is deserialized and returned.
    /// - Miss: `compute` runs, its value is serialized and written with the
    ///   default TTL, and the computed value is returned. A compute failure
    ///   is returned as is and nothing is written.
    /// - Any other driver error is returned, unless `ignore_err` is set, in
    ///   which case `compute` runs and its result is returned uncached.
    ///
    /// Cache errors are converted into the compute function's error type.
    pub async fn load<F, Fut, E>(&self, key: &str, compute: F) -> std::result::Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = std::result::Result<T, E>>,
        E: From<CacheError>,
    {
        let full_key = self.key(key);

        match self.driver.get(&full_key).await {
            Ok(data) => {
                let value = self.serializer.deserialize(&data)?;
                self.stats.record_hit();
                debug!(key = %full_key, "Cache hit");
                Ok(value)
            }
            Err(err) if err.is_not_found() => {
                self.stats.record_miss();
                debug!(key = %full_key, "Cache miss");

                let value = compute().await?;
                let payload = self.serializer.serialize(&value)?;

                if let Err(err) = self.driver.set(&full_key, payload, self.default_ttl).await {
                    self.stats.record_set_error();
                    debug!(key = %full_key, error = %err, "Cache write failed");
                    return Err(err.into());
                }

                self.stats.record_set_success();
                Ok(value)
            }
            Err(err) if self.ignore_err => {
                warn!(key = %full_key, error = %err, "Driver lookup failed, computing uncached");
                compute().await
            }
            Err(err) => Err(err.into()),
        }
    }

    // == Remove ==
    /// Deletes the entry for `key`. Removing an absent key is a `NotFound`
    /// error.
    pub async fn remove(&self, key: &str) -> Result<()> {
        let full_key = self.key(key);

        match self.driver.del(&full_key).await {
            Ok(()) => {
                self.stats.record_del_success();
                Ok(())
            }
            Err(err) => {
                self.stats.record_del_error();
                debug!(key = %full_key, error = %err, "Cache delete failed");
                Err(err)
            }
        }
    }

    // == Stats ==
    /// Snapshot of this accessor's counters.
    pub fn stats(&self) -> Stats {
        self.stats.snapshot()
    }

    // == Close ==
    /// Closes the underlying driver.
    pub async fn close(&self) -> Result<()> {
        self.driver.close().await
    }
}

//! Driver Module
//!
//! Storage backends the cache accessor reads from and writes through.
//!
//! Every driver must translate its own "key absent" signal into
//! [`CacheError::NotFound`](crate::error::CacheError::NotFound); the accessor
//! branches on that classification.

mod entry;
mod local;
mod memory;
#[cfg(feature = "redis")]
mod redis;

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

pub(crate) use entry::CacheEntry;
pub use local::LocalDriver;
pub use memory::MemoryDriver;
#[cfg(feature = "redis")]
pub use self::redis::RedisDriver;

// == Driver Trait ==
/// Key/bytes store with TTL-aware writes.
#[async_trait]
pub trait Driver: Send + Sync {
    /// Returns the payload stored under `key`, or `NotFound` if absent.
    async fn get(&self, key: &str) -> Result<Vec<u8>>;

    /// Stores `value` under `key`. A zero `ttl` means no expiry.
    ///
    /// Set-if-absent drivers return `KeyExists` instead of overwriting.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()>;

    /// Deletes `key`. Deleting an absent key returns `NotFound`.
    async fn del(&self, key: &str) -> Result<()>;

    /// Releases backend resources. Calling it twice is not an error.
    async fn close(&self) -> Result<()>;
}

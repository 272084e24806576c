//! Cacheable - cache-aside loading over pluggable drivers and serializers
//!
//! [`Cacheable::load`] looks a key up through a [`Driver`], and on a miss runs
//! the caller's compute function, stores the serialized result, and returns it.
//!
//! ```
//! use std::sync::Arc;
//! use cacheable::{CacheError, CacheOptions, Cacheable, MemoryDriver};
//!
//! # tokio_test::block_on(async {
//! let cache: Cacheable<String> = Cacheable::new(
//!     Arc::new(MemoryDriver::new()),
//!     CacheOptions::default().with_key_prefix("greeting:"),
//! );
//!
//! let value = cache
//!     .load("en", || async { Ok::<_, CacheError>("hello".to_string()) })
//!     .await?;
//! assert_eq!(value, "hello");
//! assert_eq!(cache.stats().miss, 1);
//! # Ok::<(), CacheError>(())
//! # }).unwrap();
//! ```

pub mod cache;
pub mod config;
pub mod driver;
pub mod error;
pub mod options;
pub mod serializer;
pub mod tasks;

pub use cache::{Cacheable, Stats};
pub use config::Config;
pub use driver::{Driver, LocalDriver, MemoryDriver};
pub use error::{CacheError, Result};
pub use options::CacheOptions;
pub use serializer::{
    BinarySerializer, JsonSerializer, MsgPackSerializer, Serializer, SerializerKind,
};
pub use tasks::spawn_cleanup_task;

//! Error types for the cache layer
//!
//! Provides unified error handling using thiserror. Drivers, serializers and
//! the accessor all report through [`CacheError`], so callers can tell an
//! absent key apart from a broken cache subsystem.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Key is absent from the driver (the expected miss path)
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Key already present on a set-if-absent write
    #[error("Key exists: {0}")]
    KeyExists(String),

    /// Any other driver-side failure (connectivity, backend fault)
    #[error("Driver error: {0}")]
    Driver(String),

    /// Value could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Stored payload could not be decoded into the target type
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Driver has been closed
    #[error("Driver closed")]
    Closed,

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CacheError {
    // == Classification ==
    /// Returns true for the not-found classification.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CacheError::NotFound(_))
    }

    /// Returns true for the set-if-absent conflict classification.
    pub fn is_key_exists(&self) -> bool {
        matches!(self, CacheError::KeyExists(_))
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

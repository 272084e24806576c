//! Compact binary codec backed by bincode.

use serde::{de::DeserializeOwned, Serialize};

use super::Serializer;
use crate::error::{CacheError, Result};

/// Compact binary codec.
///
/// The encoding carries no field names, so both sides must agree on the exact
/// type layout. Changing a cached struct invalidates entries written before
/// the change.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySerializer;

impl BinarySerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for BinarySerializer {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        bincode::serialize(value).map_err(|e| CacheError::Serialization(e.to_string()))
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        bincode::deserialize(data).map_err(|e| CacheError::Deserialization(e.to_string()))
    }
}

//! Structured-text codec backed by serde_json.

use serde::{de::DeserializeOwned, Serialize};

use super::Serializer;
use crate::error::{CacheError, Result};

/// JSON codec. Used when no other serializer is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl JsonSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for JsonSerializer {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        serde_json::to_vec(value).map_err(|e| CacheError::Serialization(e.to_string()))
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_slice(data).map_err(|e| CacheError::Deserialization(e.to_string()))
    }
}

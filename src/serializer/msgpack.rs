//! Schema-less binary codec backed by rmp-serde (MessagePack).

use serde::{de::DeserializeOwned, Serialize};

use super::Serializer;
use crate::error::{CacheError, Result};

/// MessagePack codec. Structs are written as maps keyed by field name, so
/// payloads stay readable across added or reordered fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsgPackSerializer;

impl MsgPackSerializer {
    pub fn new() -> Self {
        Self
    }
}

impl Serializer for MsgPackSerializer {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        rmp_serde::to_vec_named(value).map_err(|e| CacheError::Serialization(e.to_string()))
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        rmp_serde::from_slice(data).map_err(|e| CacheError::Deserialization(e.to_string()))
    }
}

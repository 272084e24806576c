//! Runtime-selectable codec.

use std::fmt;
use std::str::FromStr;

use serde::{de::DeserializeOwned, Serialize};

use super::{BinarySerializer, JsonSerializer, MsgPackSerializer, Serializer};
use crate::error::{CacheError, Result};

// == Serializer Kind ==
/// One of the built-in codecs, chosen at runtime (e.g. from configuration).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SerializerKind {
    #[default]
    Json,
    Binary,
    MsgPack,
}

impl SerializerKind {
    /// All built-in codecs.
    pub const ALL: [SerializerKind; 3] = [
        SerializerKind::Json,
        SerializerKind::Binary,
        SerializerKind::MsgPack,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SerializerKind::Json => "json",
            SerializerKind::Binary => "binary",
            SerializerKind::MsgPack => "msgpack",
        }
    }
}

impl fmt::Display for SerializerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SerializerKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(SerializerKind::Json),
            "binary" | "bincode" => Ok(SerializerKind::Binary),
            "msgpack" | "messagepack" => Ok(SerializerKind::MsgPack),
            other => Err(CacheError::Config(format!("unknown serializer: {}", other))),
        }
    }
}

impl Serializer for SerializerKind {
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized,
    {
        match self {
            SerializerKind::Json => JsonSerializer.serialize(value),
            SerializerKind::Binary => BinarySerializer.serialize(value),
            SerializerKind::MsgPack => MsgPackSerializer.serialize(value),
        }
    }

    fn deserialize<T>(&self, data: &[u8]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        match self {
            SerializerKind::Json => JsonSerializer.deserialize(data),
            SerializerKind::Binary => BinarySerializer.deserialize(data),
            SerializerKind::MsgPack => MsgPackSerializer.deserialize(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kinds() {
        assert_eq!("json".parse::<SerializerKind>().unwrap(), SerializerKind::Json);
        assert_eq!(" Binary ".parse::<SerializerKind>().unwrap(), SerializerKind::Binary);
        assert_eq!("msgpack".parse::<SerializerKind>().unwrap(), SerializerKind::MsgPack);
        assert!(matches!(
            "yaml".parse::<SerializerKind>(),
            Err(CacheError::Config(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for kind in SerializerKind::ALL {
            assert_eq!(kind.to_string().parse::<SerializerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_dispatch_matches_concrete_codec() {
        let value = vec!["a".to_string(), "b".to_string()];
        assert_eq!(
            SerializerKind::Json.serialize(&value).unwrap(),
            JsonSerializer.serialize(&value).unwrap()
        );
        assert_eq!(
            SerializerKind::Binary.serialize(&value).unwrap(),
            BinarySerializer.serialize(&value).unwrap()
        );
    }
}

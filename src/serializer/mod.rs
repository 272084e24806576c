//! Serializer Module
//!
//! Codecs that turn typed values into the opaque byte payloads handed to a
//! [`Driver`](crate::driver::Driver), and back.
//!
//! # Codecs
//! - [`JsonSerializer`] - structured text (default)
//! - [`BinarySerializer`] - compact binary
//! - [`MsgPackSerializer`] - schema-less binary
//! - [`SerializerKind`] - one of the above, picked at runtime

mod binary;
mod json;
mod kind;
mod msgpack;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::Result;

pub use binary::BinarySerializer;
pub use json::JsonSerializer;
pub use kind::SerializerKind;
pub use msgpack::MsgPackSerializer;

// == Serializer Trait ==
/// Bidirectional codec between a typed value and a byte payload.
///
/// Implementations must round-trip faithfully: deserializing the output of
/// `serialize(v)` yields a value equal to `v`.
pub trait Serializer: Send + Sync {
    /// Encodes `value` into bytes.
    fn serialize<T>(&self, value: &T) -> Result<Vec<u8>>
    where
        T: Serialize + ?Sized;

    /// Decodes `data` into a fresh value of type `T`.
    fn deserialize<T>(&self, data: &[u8]) -> Result<T>
    where
        T: DeserializeOwned;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Address {
        street: String,
        zip: Option<u32>,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Person {
        name: String,
        age: i64,
        tags: Vec<String>,
        address: Address,
        scores: HashMap<String, f64>,
    }

    fn sample() -> Person {
        let mut scores = HashMap::new();
        scores.insert("math".to_string(), 9.5);
        Person {
            name: "John".to_string(),
            age: 30,
            tags: vec!["admin".to_string(), "ops".to_string()],
            address: Address {
                street: "Main St".to_string(),
                zip: Some(12345),
            },
            scores,
        }
    }

    fn assert_round_trip<S: Serializer>(serializer: &S) {
        let person = sample();
        let bytes = serializer.serialize(&person).unwrap();
        let decoded: Person = serializer.deserialize(&bytes).unwrap();
        assert_eq!(decoded, person);
    }

    #[test]
    fn test_round_trip_nested_struct() {
        assert_round_trip(&JsonSerializer::new());
        assert_round_trip(&BinarySerializer::new());
        assert_round_trip(&MsgPackSerializer::new());
    }

    #[test]
    fn test_garbage_payload_is_deserialization_error() {
        let garbage = [0xc1u8, 0xff, 0x00];

        let json: Result<Person> = JsonSerializer::new().deserialize(&garbage);
        let binary: Result<Person> = BinarySerializer::new().deserialize(&garbage);
        let msgpack: Result<Person> = MsgPackSerializer::new().deserialize(&garbage);

        for result in [json, binary, msgpack] {
            assert!(matches!(
                result,
                Err(crate::error::CacheError::Deserialization(_))
            ));
        }
    }
}

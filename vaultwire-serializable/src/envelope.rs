//! Self-describing wrapper for entities of mixed kinds.

use crate::contract::{RawObject, Serializable};
use serde::{Deserialize, Serialize};
use vaultwire_encoding::{
    bytes_to_string, marshal, string_to_bytes, unmarshal, EncodingError, EncodingResult,
};

/// An entity's raw value together with its type tag.
///
/// Wire form: `{"type": "<tag>", "data": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedEntity {
    #[serde(rename = "type")]
    pub type_tag: String,
    pub data: RawObject,
}

impl TaggedEntity {
    /// Wraps an entity's raw value with its tag.
    pub fn wrap<E: Serializable>(entity: &E) -> EncodingResult<Self> {
        Ok(Self {
            type_tag: entity.type_tag().to_string(),
            data: entity.to_raw()?,
        })
    }

    /// Restores the wrapped entity as `E`. Fails if the tag is not `E::TYPE`.
    pub fn unwrap_as<E: Serializable>(&self) -> EncodingResult<E> {
        if self.type_tag != E::TYPE {
            return Err(EncodingError::field(
                "type",
                format!("expected `{}`, found `{}`", E::TYPE, self.type_tag),
            ));
        }
        E::restore(&self.data)
    }

    pub fn to_json(&self) -> EncodingResult<String> {
        marshal(self)
    }

    pub fn from_json(text: &str) -> EncodingResult<Self> {
        unmarshal(text)
    }

    pub fn to_bytes(&self) -> EncodingResult<Vec<u8>> {
        Ok(string_to_bytes(&self.to_json()?))
    }

    pub fn from_bytes(bytes: &[u8]) -> EncodingResult<Self> {
        Self::from_json(&bytes_to_string(bytes)?)
    }
}

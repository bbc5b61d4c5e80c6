//! Explicit field mapping between live entities and raw values.

use crate::contract::{json_kind, RawObject, Serializable};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use vaultwire_encoding::{
    base64_to_bytes, bytes_to_base64, ensure_representable, EncodingError, EncodingResult,
};

/// Property names starting with this prefix never appear in raw values.
pub const PRIVATE_PREFIX: char = '_';

fn is_private(name: &str) -> bool {
    name.starts_with(PRIVATE_PREFIX)
}

/// Collects an entity's properties into a [`RawObject`].
///
/// Writes to private names or excluded names are dropped.
#[derive(Debug)]
pub struct FieldWriter<'a> {
    raw: RawObject,
    exclude: &'a [&'a str],
}

impl<'a> FieldWriter<'a> {
    pub(crate) fn new(exclude: &'a [&'a str]) -> Self {
        Self {
            raw: RawObject::new(),
            exclude,
        }
    }

    pub(crate) fn finish(self) -> RawObject {
        self.raw
    }

    /// Whether a write to `name` would be kept.
    #[must_use]
    pub fn accepts(&self, name: &str) -> bool {
        !is_private(name) && !self.exclude.iter().any(|excluded| *excluded == name)
    }

    /// Writes a scalar or plain structured value.
    ///
    /// NaN and infinite floats are rejected rather than written as `null`.
    pub fn field<T: Serialize + ?Sized>(&mut self, name: &str, value: &T) -> EncodingResult<()> {
        if !self.accepts(name) {
            return Ok(());
        }
        ensure_representable(value).map_err(|e| {
            EncodingError::field(name, e.message().unwrap_or("not representable as JSON"))
        })?;
        let value =
            serde_json::to_value(value).map_err(|e| EncodingError::field(name, e.to_string()))?;
        self.raw.insert(name.to_string(), value);
        Ok(())
    }

    /// Writes bytes as URL-safe base64 text.
    pub fn bytes(&mut self, name: &str, value: &[u8]) -> EncodingResult<()> {
        if self.accepts(name) {
            self.raw
                .insert(name.to_string(), Value::String(bytes_to_base64(value)));
        }
        Ok(())
    }

    /// Writes a nested entity as its own raw value.
    pub fn entity<E: Serializable>(&mut self, name: &str, value: &E) -> EncodingResult<()> {
        if self.accepts(name) {
            self.raw
                .insert(name.to_string(), Value::Object(value.to_raw()?));
        }
        Ok(())
    }

    /// Writes a nested entity, or `null` when absent.
    pub fn optional_entity<E: Serializable>(
        &mut self,
        name: &str,
        value: Option<&E>,
    ) -> EncodingResult<()> {
        match value {
            Some(entity) => self.entity(name, entity),
            None => self.field(name, &Value::Null),
        }
    }

    /// Writes a sequence of nested entities, element by element.
    pub fn entities<E: Serializable>(&mut self, name: &str, values: &[E]) -> EncodingResult<()> {
        if !self.accepts(name) {
            return Ok(());
        }
        let items = values
            .iter()
            .map(|e| e.to_raw().map(Value::Object))
            .collect::<EncodingResult<Vec<_>>>()?;
        self.raw.insert(name.to_string(), Value::Array(items));
        Ok(())
    }
}

/// Read access to a raw value during restore.
///
/// Every getter returns `Ok(None)` when the property is absent (or private),
/// and an [`EncodingError::Field`] when it is present with the wrong shape.
#[derive(Debug, Clone, Copy)]
pub struct FieldReader<'a> {
    raw: &'a RawObject,
}

impl<'a> FieldReader<'a> {
    pub(crate) fn new(raw: &'a RawObject) -> Self {
        Self { raw }
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        if is_private(name) {
            return None;
        }
        self.raw.get(name)
    }

    /// Whether the raw value carries `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The untyped value of `name`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&'a Value> {
        self.get(name)
    }

    /// Reads a scalar or plain structured value.
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> EncodingResult<Option<T>> {
        self.get(name)
            .map(|v| T::deserialize(v).map_err(|e| EncodingError::field(name, e.to_string())))
            .transpose()
    }

    /// Reads bytes stored as base64 text.
    pub fn bytes(&self, name: &str) -> EncodingResult<Option<Vec<u8>>> {
        self.get(name)
            .map(|v| match v {
                Value::String(text) => base64_to_bytes(text)
                    .map_err(|e| EncodingError::field(name, e.to_string())),
                other => Err(mismatch(name, "base64 string", other)),
            })
            .transpose()
    }

    /// Reads and restores a nested entity.
    pub fn entity<E: Serializable>(&self, name: &str) -> EncodingResult<Option<E>> {
        self.get(name).map(|v| restore_nested(name, v)).transpose()
    }

    /// Reads a nested entity that may be `null`.
    ///
    /// The outer option is presence, the inner one nullness.
    pub fn optional_entity<E: Serializable>(&self, name: &str) -> EncodingResult<Option<Option<E>>> {
        self.get(name)
            .map(|v| match v {
                Value::Null => Ok(None),
                other => restore_nested(name, other).map(Some),
            })
            .transpose()
    }

    /// Reads and restores a sequence of nested entities.
    pub fn entities<E: Serializable>(&self, name: &str) -> EncodingResult<Option<Vec<E>>> {
        self.get(name)
            .map(|v| match v {
                Value::Array(items) => items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| restore_nested(&format!("{name}[{i}]"), item))
                    .collect::<EncodingResult<Vec<E>>>(),
                other => Err(mismatch(name, "array", other)),
            })
            .transpose()
    }
}

fn restore_nested<E: Serializable>(name: &str, value: &Value) -> EncodingResult<E> {
    match value {
        Value::Object(raw) => E::restore(raw),
        other => Err(mismatch(name, "object", other)),
    }
}

fn mismatch(name: &str, expected: &str, found: &Value) -> EncodingError {
    EncodingError::field(name, format!("expected {expected}, found {}", json_kind(found)))
}

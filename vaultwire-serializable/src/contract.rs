//! The `Serializable` contract and its derived conversions.

use crate::fields::{FieldReader, FieldWriter};
use serde_json::Value;
use tracing::debug;
use vaultwire_encoding::{
    bytes_to_string, marshal, string_to_bytes, unmarshal, EncodingError, EncodingResult,
};

/// The raw structured form of an entity: property name to JSON value.
pub type RawObject = serde_json::Map<String, Value>;

/// A domain entity that converts losslessly to and from raw values, JSON
/// text and bytes.
///
/// Implementors supply the type tag, the field mapping and (optionally) the
/// invariant check. Everything else is derived.
///
/// Restoring is staged: [`from_raw`](Self::from_raw) applies the raw fields
/// to a copy, validates the copy, and only then commits it. A failed restore
/// leaves the entity untouched.
pub trait Serializable: Default + Clone {
    /// Stable discriminator for this entity kind. Must be unique across the
    /// domain and in canonical form (see [`canonical_type_tag`](crate::canonical_type_tag)).
    const TYPE: &'static str;

    /// The entity's type tag.
    fn type_tag(&self) -> &'static str {
        Self::TYPE
    }

    /// Whether the current property values satisfy the entity's invariants.
    ///
    /// Entities holding nested entities should fold in the nested checks.
    fn validate(&self) -> bool {
        true
    }

    /// Writes every serialized property.
    fn write_fields(&self, fields: &mut FieldWriter<'_>) -> EncodingResult<()>;

    /// Reads properties present in the raw value, leaving absent ones as
    /// they are.
    fn read_fields(&mut self, fields: &FieldReader<'_>) -> EncodingResult<()>;

    /// Produces the raw value of all public properties.
    fn to_raw(&self) -> EncodingResult<RawObject> {
        self.to_raw_excluding(&[])
    }

    /// Produces the raw value, additionally omitting the named properties.
    fn to_raw_excluding(&self, exclude: &[&str]) -> EncodingResult<RawObject> {
        let mut writer = FieldWriter::new(exclude);
        self.write_fields(&mut writer)?;
        Ok(writer.finish())
    }

    /// Applies `raw` to this entity and runs the validation gate.
    fn from_raw(&mut self, raw: &RawObject) -> EncodingResult<&mut Self> {
        let mut staged = self.clone();
        if let Err(e) = staged.read_fields(&FieldReader::new(raw)) {
            debug!(type_tag = Self::TYPE, error = %e, "raw value rejected");
            return Err(e);
        }
        if !staged.validate() {
            debug!(type_tag = Self::TYPE, "restored entity failed validation");
            return Err(EncodingError::validation(
                Self::TYPE,
                "entity invariants not satisfied",
            ));
        }
        *self = staged;
        Ok(self)
    }

    /// Serializes to compact JSON text.
    fn to_json(&self) -> EncodingResult<String> {
        marshal(&self.to_raw()?)
    }

    /// Restores from JSON text. The top-level value must be an object.
    fn from_json(&mut self, text: &str) -> EncodingResult<&mut Self> {
        match unmarshal::<Value>(text)? {
            Value::Object(raw) => self.from_raw(&raw),
            other => Err(EncodingError::Json(format!(
                "expected an object for `{}`, found {}",
                Self::TYPE,
                json_kind(&other)
            ))),
        }
    }

    /// Serializes to the UTF-8 bytes of the JSON text.
    fn to_bytes(&self) -> EncodingResult<Vec<u8>> {
        Ok(string_to_bytes(&self.to_json()?))
    }

    /// Restores from UTF-8 JSON bytes.
    fn from_bytes(&mut self, bytes: &[u8]) -> EncodingResult<&mut Self> {
        self.from_json(&bytes_to_string(bytes)?)
    }

    /// A validated deep copy made by round-tripping through the raw form.
    ///
    /// Private properties are not carried over.
    fn deep_clone(&self) -> EncodingResult<Self> {
        Self::restore(&self.to_raw()?)
    }

    /// Builds a fresh entity from a raw value.
    fn restore(raw: &RawObject) -> EncodingResult<Self> {
        let mut entity = Self::default();
        entity.from_raw(raw)?;
        Ok(entity)
    }

    /// Builds a fresh entity from JSON text.
    fn restore_json(text: &str) -> EncodingResult<Self> {
        let mut entity = Self::default();
        entity.from_json(text)?;
        Ok(entity)
    }

    /// Builds a fresh entity from UTF-8 JSON bytes.
    fn restore_bytes(bytes: &[u8]) -> EncodingResult<Self> {
        let mut entity = Self::default();
        entity.from_bytes(bytes)?;
        Ok(entity)
    }
}

pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

//! Structured-value codec.
//!
//! Raw structured values are JSON: objects, arrays, strings, numbers,
//! booleans and null. Text produced here is the on-disk and on-the-wire form
//! of every entity.

use crate::error::EncodingResult;
use crate::finite::ensure_representable;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

/// Output layout for [`marshal_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonStyle {
    /// No insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indented, for exports meant to be read.
    Pretty,
}

/// Serializes a structured value to compact JSON text.
pub fn marshal<T: Serialize + ?Sized>(value: &T) -> EncodingResult<String> {
    marshal_with(value, JsonStyle::Compact)
}

/// Serializes a structured value to JSON text in the given style.
///
/// Fails if the value holds a NaN or infinite float.
pub fn marshal_with<T: Serialize + ?Sized>(value: &T, style: JsonStyle) -> EncodingResult<String> {
    ensure_representable(value)?;
    let text = match style {
        JsonStyle::Compact => serde_json::to_string(value)?,
        JsonStyle::Pretty => serde_json::to_string_pretty(value)?,
    };
    Ok(text)
}

/// Parses JSON text into a structured value.
pub fn unmarshal<T: DeserializeOwned>(text: &str) -> EncodingResult<T> {
    serde_json::from_str(text).map_err(|e| {
        debug!(len = text.len(), line = e.line(), column = e.column(), "rejecting malformed JSON");
        e.into()
    })
}

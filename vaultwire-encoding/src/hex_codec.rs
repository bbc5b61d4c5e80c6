//! Hexadecimal conversion.

use crate::base64_codec::{base64_to_bytes, bytes_to_base64};
use crate::error::{EncodingError, EncodingResult};
use tracing::debug;

/// Decodes hex text, two characters per byte, either case.
///
/// Odd-length input and characters outside `[0-9a-fA-F]` are rejected.
pub fn hex_to_bytes(text: &str) -> EncodingResult<Vec<u8>> {
    hex::decode(text).map_err(|e| {
        debug!(len = text.len(), "rejecting malformed hex input");
        EncodingError::from(e)
    })
}

/// Encodes bytes as lowercase, zero-padded hex.
#[must_use]
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Re-encodes base64 text as hex.
pub fn base64_to_hex(text: &str) -> EncodingResult<String> {
    Ok(bytes_to_hex(&base64_to_bytes(text)?))
}

/// Re-encodes hex text as URL-safe base64.
pub fn hex_to_base64(text: &str) -> EncodingResult<String> {
    Ok(bytes_to_base64(&hex_to_bytes(text)?))
}

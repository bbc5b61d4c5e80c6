//! Base64 conversion.
//!
//! Output defaults to the URL-safe alphabet without padding. Decoding via
//! [`base64_to_bytes`] accepts either alphabet, padded or not, so values
//! written by older clients with the standard alphabet still load.

use crate::error::{EncodingError, EncodingResult};
use crate::text::bytes_to_string;
use base64::{
    alphabet,
    engine::{
        general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD, URL_SAFE_NO_PAD},
        DecodePaddingMode,
    },
    Engine,
};
use tracing::debug;

const LENIENT_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const LENIENT_URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT_CONFIG);

const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT_CONFIG);

/// Which base64 alphabet to produce or strictly require.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Base64Variant {
    /// `-` and `_`, no `=` padding.
    #[default]
    UrlSafe,
    /// `+` and `/`, with `=` padding.
    Standard,
}

impl Base64Variant {
    fn engine(self) -> &'static GeneralPurpose {
        match self {
            Self::UrlSafe => &URL_SAFE_NO_PAD,
            Self::Standard => &STANDARD,
        }
    }
}

/// Encodes bytes as URL-safe base64 without padding.
#[must_use]
pub fn bytes_to_base64(bytes: &[u8]) -> String {
    bytes_to_base64_with(bytes, Base64Variant::UrlSafe)
}

/// Encodes bytes as base64 in the given variant.
#[must_use]
pub fn bytes_to_base64_with(bytes: &[u8], variant: Base64Variant) -> String {
    variant.engine().encode(bytes)
}

/// Decodes base64 text in either alphabet, with or without padding.
///
/// Text containing both URL-safe and standard-only characters is rejected,
/// as is padding that does not complete a 4-character block.
pub fn base64_to_bytes(text: &str) -> EncodingResult<Vec<u8>> {
    if text.ends_with('=') && text.len() % 4 != 0 {
        debug!(len = text.len(), "rejecting base64 input with partial padding");
        return Err(EncodingError::Base64(format!(
            "padding leaves a partial block (length {})",
            text.len()
        )));
    }
    let engine = if text.contains(['-', '_']) {
        &LENIENT_URL_SAFE
    } else {
        &LENIENT_STANDARD
    };
    engine.decode(text).map_err(|e| {
        debug!(len = text.len(), "rejecting malformed base64 input");
        EncodingError::from(e)
    })
}

/// Decodes base64 text that must be in exactly the given variant.
pub fn base64_to_bytes_with(text: &str, variant: Base64Variant) -> EncodingResult<Vec<u8>> {
    Ok(variant.engine().decode(text)?)
}

/// Returns true if `text` decodes as base64. The empty string is valid.
#[must_use]
pub fn is_base64(text: &str) -> bool {
    base64_to_bytes(text).is_ok()
}

/// Number of bytes `text` decodes to, computed without decoding.
///
/// Trailing `=` padding is ignored. The result is only meaningful for text
/// that [`is_base64`] accepts.
#[must_use]
pub fn base64_byte_length(text: &str) -> usize {
    let symbols = text.trim_end_matches('=').len();
    symbols / 4 * 3 + symbols % 4 * 3 / 4
}

/// Encodes UTF-8 text as URL-safe base64.
#[must_use]
pub fn string_to_base64(text: &str) -> String {
    bytes_to_base64(text.as_bytes())
}

/// Decodes base64 into UTF-8 text.
pub fn base64_to_string(text: &str) -> EncodingResult<String> {
    bytes_to_string(&base64_to_bytes(text)?)
}

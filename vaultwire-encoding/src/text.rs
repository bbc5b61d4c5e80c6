//! Text/byte conversion.

use crate::error::{EncodingError, EncodingResult};
use std::fmt;
use std::str::FromStr;

/// Character encodings supported for text/byte conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    #[default]
    Utf8,
    Utf16Le,
    /// ISO-8859-1: each byte is the code point of the same value.
    Latin1,
    Ascii,
}

impl TextEncoding {
    /// Canonical label, as accepted by [`FromStr`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Latin1 => "latin1",
            Self::Ascii => "ascii",
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TextEncoding {
    type Err = EncodingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "utf-16le" | "utf16le" | "utf-16" | "utf16" => Ok(Self::Utf16Le),
            "latin1" | "latin-1" | "iso-8859-1" | "binary" => Ok(Self::Latin1),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            other => Err(EncodingError::Text(format!("unsupported encoding: {other}"))),
        }
    }
}

/// Encodes text as UTF-8 bytes.
#[must_use]
pub fn string_to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Encodes text in the given encoding.
///
/// Fails if a character has no representation in `encoding`.
pub fn string_to_bytes_with(text: &str, encoding: TextEncoding) -> EncodingResult<Vec<u8>> {
    match encoding {
        TextEncoding::Utf8 => Ok(string_to_bytes(text)),
        TextEncoding::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
        TextEncoding::Latin1 => narrow_chars(text, 0xFF, encoding),
        TextEncoding::Ascii => narrow_chars(text, 0x7F, encoding),
    }
}

/// Decodes UTF-8 bytes into text.
pub fn bytes_to_string(bytes: &[u8]) -> EncodingResult<String> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Decodes bytes in the given encoding.
pub fn bytes_to_string_with(bytes: &[u8], encoding: TextEncoding) -> EncodingResult<String> {
    match encoding {
        TextEncoding::Utf8 => bytes_to_string(bytes),
        TextEncoding::Utf16Le => {
            if bytes.len() % 2 != 0 {
                return Err(EncodingError::Text(format!(
                    "UTF-16 input has odd length {}",
                    bytes.len()
                )));
            }
            let units: Vec<u16> = bytes
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect();
            String::from_utf16(&units)
                .map_err(|e| EncodingError::Text(format!("invalid UTF-16: {e}")))
        }
        TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
            Some(index) => Err(EncodingError::Text(format!(
                "non-ASCII byte 0x{:02x} at index {index}",
                bytes[index]
            ))),
            None => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        },
    }
}

fn narrow_chars(text: &str, max: u32, encoding: TextEncoding) -> EncodingResult<Vec<u8>> {
    text.chars()
        .map(|c| {
            u8::try_from(u32::from(c))
                .ok()
                .filter(|&b| u32::from(b) <= max)
                .ok_or_else(|| {
                    EncodingError::Text(format!("character {c:?} not representable in {encoding}"))
                })
        })
        .collect()
}

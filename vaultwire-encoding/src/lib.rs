//! Encoding primitives for Vaultwire.
//!
//! Every persisted or transmitted entity passes through these codecs on its
//! way to storage or the network:
//! - base64 (URL-safe without padding by default, standard on request)
//! - hexadecimal (lowercase output, strict input)
//! - text/byte conversion (UTF-8 by default, a few named legacy encodings)
//! - byte-sequence concatenation and equality
//! - the structured-value codec ([`marshal`] / [`unmarshal`]) over JSON
//!
//! All functions are pure. Every failure surfaces as [`EncodingError`];
//! errors from the underlying format crates never leak through.

mod base64_codec;
mod bytes;
mod error;
mod finite;
mod hex_codec;
mod json;
mod text;

pub use base64_codec::{
    base64_byte_length, base64_to_bytes, base64_to_bytes_with, base64_to_string,
    bytes_to_base64, bytes_to_base64_with, is_base64, string_to_base64, Base64Variant,
};
pub use bytes::{concat_bytes, equal_bytes};
pub use error::{EncodingError, EncodingResult};
pub use finite::ensure_representable;
pub use hex_codec::{base64_to_hex, bytes_to_hex, hex_to_base64, hex_to_bytes};
pub use json::{marshal, marshal_with, unmarshal, JsonStyle};
pub use text::{
    bytes_to_string, bytes_to_string_with, string_to_bytes, string_to_bytes_with, TextEncoding,
};

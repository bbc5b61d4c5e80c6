//! Property-based tests for the codecs.
//!
//! Round-trip laws that must hold for every input:
//! - base64 and hex decode what they encode
//! - UTF-8 text survives a trip through bytes
//! - concatenation length is the sum of its parts

use proptest::prelude::*;
use vaultwire_encoding::{
    base64_byte_length, base64_to_bytes, base64_to_bytes_with, bytes_to_base64,
    bytes_to_base64_with, bytes_to_hex, bytes_to_string, bytes_to_string_with, concat_bytes,
    equal_bytes, hex_to_bytes, is_base64, string_to_bytes, string_to_bytes_with, Base64Variant,
    TextEncoding,
};

fn bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..512)
}

proptest! {
    #[test]
    fn base64_roundtrip(bytes in bytes_strategy()) {
        let encoded = bytes_to_base64(&bytes);
        prop_assert!(!encoded.contains(['+', '/', '=']));
        prop_assert_eq!(base64_to_bytes(&encoded).unwrap(), bytes);
    }

    #[test]
    fn base64_standard_roundtrip(bytes in bytes_strategy()) {
        let encoded = bytes_to_base64_with(&bytes, Base64Variant::Standard);
        prop_assert_eq!(&base64_to_bytes_with(&encoded, Base64Variant::Standard).unwrap(), &bytes);
        prop_assert_eq!(base64_to_bytes(&encoded).unwrap(), bytes);
    }

    #[test]
    fn base64_length_without_decoding(bytes in bytes_strategy()) {
        let url = bytes_to_base64(&bytes);
        let std = bytes_to_base64_with(&bytes, Base64Variant::Standard);
        prop_assert_eq!(base64_byte_length(&url), bytes.len());
        prop_assert_eq!(base64_byte_length(&std), bytes.len());
    }

    #[test]
    fn encoded_output_is_base64(bytes in bytes_strategy()) {
        prop_assert!(is_base64(&bytes_to_base64(&bytes)));
    }

    #[test]
    fn hex_roundtrip(bytes in bytes_strategy()) {
        let encoded = bytes_to_hex(&bytes);
        prop_assert_eq!(encoded.len(), bytes.len() * 2);
        prop_assert_eq!(hex_to_bytes(&encoded).unwrap(), bytes);
    }

    #[test]
    fn utf8_roundtrip(text in any::<String>()) {
        prop_assert_eq!(bytes_to_string(&string_to_bytes(&text)).unwrap(), text);
    }

    #[test]
    fn utf16_roundtrip(text in any::<String>()) {
        let bytes = string_to_bytes_with(&text, TextEncoding::Utf16Le).unwrap();
        prop_assert_eq!(bytes_to_string_with(&bytes, TextEncoding::Utf16Le).unwrap(), text);
    }

    #[test]
    fn concat_length_is_sum(a in bytes_strategy(), b in bytes_strategy(), c in bytes_strategy()) {
        let joined = concat_bytes(&[&a[..], &b[..], &c[..]]);
        prop_assert_eq!(joined.len(), a.len() + b.len() + c.len());
        prop_assert!(equal_bytes(&joined[..a.len()], &a));
        prop_assert!(equal_bytes(&joined[a.len() + b.len()..], &c));
    }

    #[test]
    fn equal_bytes_agrees_with_slice_eq(a in bytes_strategy(), b in bytes_strategy()) {
        prop_assert_eq!(equal_bytes(&a, &b), a == b);
        prop_assert!(equal_bytes(&a, &a.clone()));
    }
}

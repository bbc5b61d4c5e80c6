//! Byte-sequence helpers.

/// Concatenates byte sequences in argument order.
#[must_use]
pub fn concat_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|p| p.len()).sum();
    let mut out = Vec::with_capacity(total);
    for part in parts {
        out.extend_from_slice(part);
    }
    out
}

/// Compares two byte sequences.
///
/// Equal-length inputs are compared in full without an early exit, so the
/// time taken does not depend on where they first differ.
#[must_use]
pub fn equal_bytes(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

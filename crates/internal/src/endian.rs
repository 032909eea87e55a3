//! Endianness utility functions

/// Read a u64 from the first eight bytes of `bytes`, little-endian
///
/// Panics if fewer than eight bytes are supplied; callers pass fixed-size
/// buffers so the bound is checked at the call site.
pub fn u64_from_le_bytes(bytes: &[u8]) -> u64 {
    u64::from_le_bytes([
        bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
    ])
}

/// Convert a u64 from native byte order to little-endian bytes
pub fn u64_to_le_bytes(value: u64) -> [u8; 8] {
    value.to_le_bytes()
}

/// Load `N` little-endian u64 words from an `8 * N` byte buffer
///
/// Word 0 holds the least significant bytes.
pub fn load_u64_words_le<const N: usize>(bytes: &[u8]) -> [u64; N] {
    let mut words = [0u64; N];
    for (i, word) in words.iter_mut().enumerate() {
        *word = u64_from_le_bytes(&bytes[i * 8..i * 8 + 8]);
    }
    words
}

/// Store `N` u64 words as little-endian bytes into `out`
pub fn store_u64_words_le<const N: usize>(words: &[u64; N], out: &mut [u8]) {
    for (i, word) in words.iter().enumerate() {
        out[i * 8..i * 8 + 8].copy_from_slice(&u64_to_le_bytes(*word));
    }
}

//! Byte-buffer helpers
//!
//! Non-cryptographic hashing and native-endian integer loads for sampling
//! over raw input buffers.

/// Hash a byte buffer into a u64
///
/// Shift-add-XOR accumulator. This is NOT a cryptographic hash; use it
/// for dedup keys and sampling buckets only.
///
/// # Example
/// ```
/// use sampler_core_rs::hash64;
///
/// assert_ne!(hash64(b"corpus/a"), hash64(b"corpus/b"));
/// ```
pub fn hash64(buf: &[u8]) -> u64 {
    let mut acc: u64 = 0;
    for &byte in buf {
        acc = acc.wrapping_add(u64::from(byte));
        acc = acc.wrapping_add(acc << 10);
        acc ^= acc >> 6;
    }
    acc
}

/// Load the first 4 bytes of `buf` as a native-endian u32, widened to u64
///
/// # Panics
/// Panics if `buf` holds fewer than 4 bytes.
pub fn load_u32(buf: &[u8]) -> u64 {
    assert!(buf.len() >= 4, "load_u32 requires at least 4 bytes");
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&buf[..4]);
    u64::from(u32::from_ne_bytes(raw))
}

/// Load the first 8 bytes of `buf` as a native-endian u64
///
/// # Panics
/// Panics if `buf` holds fewer than 8 bytes.
pub fn load_u64(buf: &[u8]) -> u64 {
    assert!(buf.len() >= 8, "load_u64 requires at least 8 bytes");
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&buf[..8]);
    u64::from_ne_bytes(raw)
}

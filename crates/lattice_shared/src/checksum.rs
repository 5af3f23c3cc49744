//! String checksums for fast identifier comparison.
//!
//! Callers compare identifiers by comparing checksums instead of bytes.
//! CRC32 is not collision-free; these are for identifier equality in
//! closed sets (asset names, tags), not for security.

/// Case-fold buffer size. Folding streams through the hasher in chunks
/// of this many bytes so no allocation happens for any input length.
const FOLD_CHUNK: usize = 64;

/// CRC32 checksum of a byte string.
#[must_use]
pub fn checksum(data: &[u8]) -> u32 {
    crc32fast::hash(data)
}

/// CRC32 checksum with ASCII case folded away.
///
/// `checksum_ignore_case(b"Mikey") == checksum_ignore_case(b"mikey")`.
/// Non-ASCII bytes are hashed unchanged.
#[must_use]
pub fn checksum_ignore_case(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    let mut buf = [0u8; FOLD_CHUNK];

    for chunk in data.chunks(FOLD_CHUNK) {
        for (dst, src) in buf.iter_mut().zip(chunk) {
            *dst = src.to_ascii_lowercase();
        }
        hasher.update(&buf[..chunk.len()]);
    }

    hasher.finalize()
}

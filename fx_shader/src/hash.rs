//! Content hashing for shader payloads.

use std::hash::Hasher;
use rustc_hash::FxHasher;

/// Hash a shader payload.
///
/// Deterministic across runs (no per-process seed). Only the payload bytes are
/// hashed, never the surrounding metadata, so two descriptors wrapping the same
/// compiled unit compare equal by hash. Not suitable for security purposes.
pub fn content_hash(bytes: &[u8]) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write_usize(bytes.len());
    hasher.write(bytes);
    hasher.finish()
}

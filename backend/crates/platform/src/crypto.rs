//! Cryptographic Utilities

use rand::{RngCore, rngs::OsRng};
use sha2::{Digest, Sha256};

/// Source of random bytes
///
/// Implementations must be safe to share across request handlers.
pub trait EntropySource: Send + Sync {
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Operating-system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Deterministic entropy: repeats `pattern` to fill every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEntropy {
    pattern: Vec<u8>,
}

impl FixedEntropy {
    /// An empty pattern yields zero bytes
    pub fn new(pattern: impl Into<Vec<u8>>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl EntropySource for FixedEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        if self.pattern.is_empty() {
            dest.fill(0);
            return;
        }
        for (slot, byte) in dest.iter_mut().zip(self.pattern.iter().cycle()) {
            *slot = *byte;
        }
    }
}

impl<E: EntropySource + ?Sized> EntropySource for std::sync::Arc<E> {
    fn fill_bytes(&self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    OsEntropy.fill_bytes(&mut bytes);
    bytes
}

/// `len` bytes from `source`, lowercase hex encoded (`2 * len` characters)
pub fn random_hex(source: &dyn EntropySource, len: usize) -> String {
    let mut bytes = vec![0u8; len];
    source.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 as 64 lowercase hex characters
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(sha256(data))
}

/// Constant-time comparison to prevent timing attacks
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

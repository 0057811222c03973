//! # Hash Provider
//!
//! Deterministic digests for docket and payload verification.
//!
//! ## Algorithms
//!
//! - SHA-256: canonical docket and payload digest
//! - SHA-512: long digests for external anchoring
//! - BLAKE3: fast local hashing

use crate::errors::HashError;
use sha2::{Digest, Sha256, Sha512};
use std::fmt;

/// Digest algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// SHA-256 (default)
    #[default]
    Sha256,
    /// SHA-512
    Sha512,
    /// BLAKE3
    Blake3,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => f.write_str("SHA-256"),
            Self::Sha512 => f.write_str("SHA-512"),
            Self::Blake3 => f.write_str("BLAKE3"),
        }
    }
}

/// Deterministic hash function consumed by the validators.
///
/// Implementations may fail (remote HSM, FFI provider, ...); callers must
/// treat failures as infrastructure faults, never as a mismatch.
pub trait HashProvider: Send + Sync {
    /// Hash `data` with `algorithm`.
    fn compute_hash(&self, data: &[u8], algorithm: HashAlgorithm) -> Result<Vec<u8>, HashError>;

    /// Hash `data` and return the lower-case hex digest.
    fn compute_hex(&self, data: &[u8], algorithm: HashAlgorithm) -> Result<String, HashError> {
        self.compute_hash(data, algorithm).map(hex::encode)
    }
}

/// In-process provider backed by `sha2` and `blake3`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHashProvider;

impl HashProvider for DefaultHashProvider {
    fn compute_hash(&self, data: &[u8], algorithm: HashAlgorithm) -> Result<Vec<u8>, HashError> {
        let digest = match algorithm {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
            HashAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
        };
        Ok(digest)
    }
}

/// Hash data with SHA-256 (one-shot).
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Case-insensitive comparison of two hex digests.
pub fn digests_match(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

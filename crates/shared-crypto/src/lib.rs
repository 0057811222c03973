//! # Shared Crypto - Hash Provider
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256 | Docket hash, payload hash |
//! | `hashing` | SHA-512, BLAKE3 | Alternative digests |
//!
//! The [`HashProvider`] trait is the seam the validators consume; the
//! [`DefaultHashProvider`] is the in-process implementation.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod errors;
pub mod hashing;

// Re-exports
pub use errors::HashError;
pub use hashing::{digests_match, sha256_hex, DefaultHashProvider, HashAlgorithm, HashProvider};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

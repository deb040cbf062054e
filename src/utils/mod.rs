//! Utility functions and helpers
//!
//! Cryptographic digests, timestamps, and the serialization wrappers
//! used for deterministic block hashing.

pub mod crypto;
pub mod serialization;

pub use crypto::{current_timestamp, sha256_digest};
pub use serialization::{deserialize, serialize};

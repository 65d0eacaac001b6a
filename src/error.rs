//! Error types.
//!
//! Only construction can fail at runtime: either the operating system cannot
//! supply seed entropy, or the caller passed a malformed seed or parameters.
//! Invalid bounds passed to the sampling operations are contract violations
//! and panic instead (see the `# Panics` sections on those methods).

use thiserror::Error;

/// Errors returned when constructing a generator or a pool.
#[derive(Debug, Error)]
pub enum Error {
    /// The operating system could not provide enough entropy for a seed.
    #[error("not enough system entropy to seed cipher: {0}")]
    Entropy(#[from] getrandom::Error),

    /// A caller-supplied seed did not have the cipher's key length.
    #[error("seed must be 32 bytes long, got {0}")]
    InvalidSeedLength(usize),

    /// Generator parameters failed validation.
    #[error("invalid generator parameters: {0}")]
    InvalidParams(#[from] ParamError),
}

/// Errors that can occur during parameter validation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParamError {
    /// Only 8, 12 and 20 rounds are supported.
    #[error("unsupported round count {0}, expected 8, 12 or 20")]
    UnsupportedRounds(u32),

    /// The buffer must be able to hold at least one temporary key.
    #[error("buffer size {0} is smaller than the 32-byte key")]
    BufferTooSmall(usize),
}

//! Random number generation module
//!
//! This module provides the buffered ChaCha generator and everything built
//! directly on it.
//!
//! The generator is seeded once (from the operating system or a caller
//! seed), then expands that seed by re-encrypting its own buffer, chaining
//! each key into the next and erasing output as it is handed out.
//!
//! On top of raw bytes it offers exactly uniform bounded integers
//! (rejection sampling), bounded big integers and random permutations.

/// Design goals:
/// - Cryptographic security
/// - Throughput: one cipher pass per buffer, direct writes for large requests
/// - Backtracking resistance through key chaining and erasure
/// - Minimal and explicit API surface
mod generator;
mod interop;
mod params;
mod sample;

pub mod bigint;

/// Cryptographically secure pseudorandom number generator.
///
/// This type is the primary entry point when a caller wants to own its
/// generator. For shared use across threads see [`crate::Pool`].
pub use generator::Csprng;
pub use params::{DEFAULT_BUFFER_SIZE, RngParams};

//! Fast, cryptographically strong random numbers
//!
//! This crate provides a buffered CSPRNG built on the ChaCha stream cipher.
//! It is meant as a higher-throughput drop-in for the operating system's
//! secure RNG: the OS is asked for a 32-byte seed once per generator, and
//! everything after that is cipher output.
//!
//! # Module overview
//!
//! - `cipher`
//!   The ChaCha keystream primitive (8, 12 or 20 rounds) used by the
//!   generator. Only the round count is public.
//!
//! - `os`
//!   Operating system entropy, used to seed generators.
//!
//! - `rng`
//!   The buffered generator [`Csprng`] and the sampling built on it:
//!   raw bytes, exactly uniform bounded `u64`/`i64`/[`BigUint`] values and
//!   random permutations.
//!
//!   Each generator keeps a buffer of precomputed output. Bytes handed to
//!   callers are erased from the buffer immediately, and every refresh
//!   derives the next key from the current one, so compromising a
//!   generator's state does not reveal what it produced before.
//!
//! - `shared`
//!   A thread-safe [`Pool`] of generators, and free functions plus a
//!   [`Reader`] that draw from a process-wide pool.
//!
//! - `error`
//!   Construction errors. Invalid bounds passed to sampling functions are
//!   contract violations and panic.
//!
//! # Example
//!
//! ```
//! let key = swiftrand::bytes(32);
//! let roll = swiftrand::u64_below(6) + 1;
//! let order = swiftrand::permutation(10);
//!
//! assert_eq!(key.len(), 32);
//! assert!((1..=6).contains(&roll));
//! assert_eq!(order.len(), 10);
//! ```
//!
//! # Design goals
//!
//! - Never hand out the same keystream twice
//! - Never keep consumed output in memory
//! - Exactly uniform bounded sampling
//! - A single generator is cheap to own; the shared pool is safe to share
//!
//! This crate is not a simulation-grade or replayable PRNG and does not
//! expose the cipher for general encryption.

mod os;

pub mod cipher;
pub mod error;
pub mod rng;
pub mod shared;

pub use cipher::Rounds;
pub use error::{Error, ParamError};
pub use num_bigint::BigUint;
pub use rng::{Csprng, RngParams};
pub use shared::{
    Pool, Reader, biguint_below, bytes, fill_bytes, global_pool, i64_below, permutation, u64_below,
};

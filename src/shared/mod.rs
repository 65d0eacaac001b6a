//! Shared, concurrency-safe randomness.
//!
//! The free functions in this module draw from a process-wide [`Pool`] that
//! is created on first use. They are safe to call from any number of
//! threads at once, and every call gets a generator nobody else is using.
//!
//! Code that needs isolation (custom parameters, tests) can build its own
//! [`Pool`] and call the same operations on it.

mod pool;

use std::io;
use std::sync::LazyLock;

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore, impls};

pub use pool::Pool;

static SHARED: LazyLock<Pool> = LazyLock::new(Pool::new);

/// Returns the process-wide pool behind the free functions.
pub fn global_pool() -> &'static Pool {
    &SHARED
}

/// Fills `dest` with random bytes.
///
/// # Panics
/// Panics if the shared pool needs a new generator and the operating
/// system cannot seed it.
pub fn fill_bytes(dest: &mut [u8]) {
    SHARED.fill_bytes(dest);
}

/// Allocates and returns `n` random bytes.
pub fn bytes(n: usize) -> Vec<u8> {
    SHARED.bytes(n)
}

/// Returns a uniform random `u64` in `[0, n)`.
///
/// # Panics
/// Panics if `n` is zero.
pub fn u64_below(n: u64) -> u64 {
    SHARED.u64_below(n)
}

/// Returns a uniform random `i64` in `[0, n)`.
///
/// # Panics
/// Panics if `n <= 0`.
pub fn i64_below(n: i64) -> i64 {
    SHARED.i64_below(n)
}

/// Returns a uniform random [`BigUint`] in `[0, n)`.
///
/// # Panics
/// Panics if `n` is zero.
pub fn biguint_below(n: &BigUint) -> BigUint {
    SHARED.biguint_below(n)
}

/// Returns a uniform random permutation of `0..n`.
pub fn permutation(n: usize) -> Vec<usize> {
    SHARED.permutation(n)
}

/// Handle to the shared pool as a generic byte source.
///
/// `Reader` is zero-sized and freely copyable; every read checks a
/// generator out of the shared pool for its duration, so it is safe to use
/// from many threads at once.
#[derive(Copy, Clone, Debug, Default)]
pub struct Reader;

impl io::Read for Reader {
    /// Fills `buf` completely. Never returns a short read.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        fill_bytes(buf);
        Ok(buf.len())
    }
}

impl RngCore for Reader {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for Reader {}

//! Reusable pool of generators.
//!
//! A pool hands each caller exclusive use of one generator for the duration
//! of a call. Idle generators are kept for reuse; new ones are seeded from
//! the operating system only when the pool runs dry. The lock guards the
//! idle list alone and is never held while a generator is in use.
//!
//! The idle list is capped (by default at the available parallelism);
//! generators checked in beyond the cap are dropped, which erases them.

use std::num::NonZeroUsize;
use std::thread;

use log::debug;
use num_bigint::BigUint;
use parking_lot::Mutex;

use crate::error::Error;
use crate::rng::{Csprng, RngParams};

/// A thread-safe pool of [`Csprng`] instances.
///
/// No generator is ever used by two callers at once: each operation checks
/// one out, uses it, and checks it back in.
pub struct Pool {
    idle: Mutex<Vec<Csprng>>,
    params: RngParams,
    max_idle: usize,
}

/// Idle cap used when the available parallelism cannot be queried.
const FALLBACK_MAX_IDLE: usize = 8;

fn default_max_idle() -> usize {
    thread::available_parallelism().map_or(FALLBACK_MAX_IDLE, NonZeroUsize::get)
}

impl Pool {
    /// Creates an empty pool whose generators use default parameters.
    pub fn new() -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            params: RngParams::default(),
            max_idle: default_max_idle(),
        }
    }

    /// Creates an empty pool whose generators use `params`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParams`] if `params` fail validation.
    pub fn with_params(params: RngParams) -> Result<Self, Error> {
        params.validate()?;

        Ok(Self {
            idle: Mutex::new(Vec::new()),
            params,
            max_idle: default_max_idle(),
        })
    }

    /// Sets how many idle generators the pool keeps for reuse.
    ///
    /// With a cap of zero every generator is dropped after a single call.
    pub fn with_max_idle(mut self, max_idle: usize) -> Self {
        self.max_idle = max_idle;
        self.idle.get_mut().truncate(max_idle);
        self
    }

    /// Maximum number of generators kept idle.
    pub fn max_idle(&self) -> usize {
        self.max_idle
    }

    /// Parameters used for every generator this pool creates.
    pub fn params(&self) -> RngParams {
        self.params
    }

    /// Number of generators currently idle in the pool.
    pub fn idle(&self) -> usize {
        self.idle.lock().len()
    }

    /// Takes exclusive ownership of a generator, reusing an idle one or
    /// seeding a new one from the operating system.
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if a new generator is needed and the
    /// operating system cannot seed it.
    pub fn checkout(&self) -> Result<Csprng, Error> {
        let reused = self.idle.lock().pop();

        match reused {
            Some(rng) => Ok(rng),
            None => {
                debug!("pool empty, seeding a new generator");
                Csprng::from_os_with_params(self.params)
            }
        }
    }

    /// Returns a generator to the pool.
    ///
    /// Generators built with different parameters, and generators arriving
    /// while the idle list is full, are dropped (and thereby erased) instead
    /// of being kept.
    pub fn checkin(&self, rng: Csprng) {
        if rng.params() != self.params {
            return;
        }

        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(rng);
        }
    }

    /// Runs `f` with exclusive use of a pooled generator.
    ///
    /// # Panics
    /// Panics if a new generator is needed and the operating system cannot
    /// seed it. If `f` panics, the generator is dropped rather than
    /// returned.
    pub fn with<T>(&self, f: impl FnOnce(&mut Csprng) -> T) -> T {
        let mut rng = self.checkout().unwrap_or_else(|err| panic!("{err}"));
        let out = f(&mut rng);
        self.checkin(rng);

        out
    }

    /// Fills `dest` with random bytes.
    pub fn fill_bytes(&self, dest: &mut [u8]) {
        self.with(|rng| rng.fill_bytes(dest));
    }

    /// Allocates and returns `n` random bytes.
    pub fn bytes(&self, n: usize) -> Vec<u8> {
        self.with(|rng| rng.bytes(n))
    }

    /// Returns a uniform random `u64` in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn u64_below(&self, n: u64) -> u64 {
        self.with(|rng| rng.u64_below(n))
    }

    /// Returns a uniform random `i64` in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n <= 0`.
    pub fn i64_below(&self, n: i64) -> i64 {
        self.with(|rng| rng.i64_below(n))
    }

    /// Returns a uniform random [`BigUint`] in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn biguint_below(&self, n: &BigUint) -> BigUint {
        self.with(|rng| rng.biguint_below(n))
    }

    /// Returns a uniform random permutation of `0..n`.
    pub fn permutation(&self, n: usize) -> Vec<usize> {
        self.with(|rng| rng.permutation(n))
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

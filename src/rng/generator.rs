//! Buffered ChaCha generator
//!
//! The generator owns a single byte buffer laid out as
//!
//! ```text
//! [ next key (32 bytes) | output bytes (buffer_size) ]
//!                         ^ cursor
//! ```
//!
//! A refresh encrypts the whole buffer in place under the key held in its
//! first 32 bytes. The result is a fresh key for the next refresh followed
//! by `buffer_size` bytes of output. The key region is never handed out.
//!
//! Every byte handed to a caller is zeroed in the buffer right after it is
//! copied out, so consumed output never lingers in memory. Together with
//! the forward-chained key this provides backtracking resistance without
//! going back to the operating system for entropy.

use std::fmt;

use log::{debug, trace};
use zeroize::Zeroize;

use crate::cipher::Rounds;
use crate::cipher::chacha::{KEY_SIZE, NONCE_SIZE, xor_keystream};
use crate::error::Error;
use crate::os::sys_random;
use crate::rng::params::RngParams;

/// The generator always runs the cipher with an all-zero nonce. Key
/// uniqueness comes from chaining each key off the previous one.
const ZERO_NONCE: [u8; NONCE_SIZE] = [0u8; NONCE_SIZE];

/// Cryptographically secure pseudorandom number generator.
///
/// The generator is seeded once, then expands its seed with ChaCha into a
/// buffer of output that it serves from, refreshing itself in place as the
/// buffer runs dry.
///
/// A `Csprng` is not safe to share between threads without external
/// synchronization, and is intentionally not `Clone`: a clone would replay
/// the same output. Use [`crate::Pool`] or the crate-level functions for
/// concurrent access.
pub struct Csprng {
    /// Next key followed by unconsumed (or erased) output.
    buf: Vec<u8>,

    /// Boundary between consumed and unconsumed bytes of `buf`.
    cursor: usize,

    /// Cipher round count.
    rounds: Rounds,
}

impl Csprng {
    /// Creates a new generator seeded from the operating system, with
    /// default parameters.
    ///
    /// # Panics
    /// Panics if the operating system cannot supply enough entropy. Use
    /// [`Csprng::from_os`] to handle that case.
    pub fn new() -> Self {
        Self::from_os().unwrap_or_else(|err| panic!("{err}"))
    }

    /// Creates a new generator seeded from the operating system, with
    /// default parameters.
    ///
    /// # Errors
    /// Returns [`Error::Entropy`] if the operating system cannot supply
    /// enough entropy.
    pub fn from_os() -> Result<Self, Error> {
        Self::from_os_with_params(RngParams::default())
    }

    /// Creates a new generator seeded from the operating system, using the
    /// given parameters.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParams`] if `params` fail validation, or
    /// [`Error::Entropy`] if the operating system cannot supply enough
    /// entropy.
    pub fn from_os_with_params(params: RngParams) -> Result<Self, Error> {
        params.validate()?;

        let mut seed = [0u8; KEY_SIZE];
        sys_random(&mut seed)?;

        Ok(Self::seeded(seed, params))
    }

    /// Creates a generator from a caller-provided seed, with default
    /// parameters.
    ///
    /// The seed must be uniformly random and unpredictable. Two generators
    /// built from the same seed produce the same output.
    pub fn from_seed(seed: [u8; KEY_SIZE]) -> Self {
        Self::seeded(seed, RngParams::default())
    }

    /// Creates a generator from a caller-provided seed and parameters.
    ///
    /// # Errors
    /// - [`Error::InvalidSeedLength`] if `seed` is not exactly 32 bytes.
    /// - [`Error::InvalidParams`] if `params` fail validation.
    pub fn with_params(seed: &[u8], params: RngParams) -> Result<Self, Error> {
        params.validate()?;

        let seed: [u8; KEY_SIZE] = seed
            .try_into()
            .map_err(|_| Error::InvalidSeedLength(seed.len()))?;

        Ok(Self::seeded(seed, params))
    }

    /// Places the seed in the key region and performs the first refresh,
    /// so no caller ever observes a seeded-but-unrefreshed buffer.
    fn seeded(mut seed: [u8; KEY_SIZE], params: RngParams) -> Self {
        let mut buf = vec![0u8; params.buffer_len()];
        buf[..KEY_SIZE].copy_from_slice(&seed);
        seed.zeroize();

        let mut rng = Self {
            buf,
            cursor: KEY_SIZE,
            rounds: params.rounds,
        };
        rng.refresh();

        debug!(
            "seeded generator: buffer_size={}, rounds={}",
            params.buffer_size,
            params.rounds.count()
        );

        rng
    }

    /// Returns the parameters this generator was built with.
    pub fn params(&self) -> RngParams {
        RngParams::new(self.buf.len() - KEY_SIZE, self.rounds)
    }

    /// Regenerates the whole buffer from the key in its first 32 bytes.
    ///
    /// Afterwards `buf[..KEY_SIZE]` holds the next key and everything past
    /// it is fresh output.
    fn refresh(&mut self) {
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(&self.buf[..KEY_SIZE]);

        xor_keystream(&key, &ZERO_NONCE, self.rounds, &mut self.buf);
        key.zeroize();

        self.cursor = KEY_SIZE;
    }

    /// Fills `dest` with random bytes.
    ///
    /// Always fills the whole destination and never fails.
    ///
    /// Requests that fit in the buffer are served from it, refreshing as
    /// needed. Larger requests refresh once to obtain a temporary key and
    /// write keystream straight into `dest` under that key.
    pub fn fill_bytes(&mut self, dest: &mut [u8]) {
        if dest.len() > self.buf.len() {
            self.fill_direct(dest);
            return;
        }

        let mut filled = 0;

        while filled < dest.len() {
            if self.cursor == self.buf.len() {
                self.refresh();
            }

            let src = &mut self.buf[self.cursor..];
            let take = src.len().min(dest.len() - filled);

            dest[filled..filled + take].copy_from_slice(&src[..take]);
            src[..take].zeroize();

            filled += take;
            self.cursor += take;
        }
    }

    /// Large-request path: one refresh, then keystream written into `dest`.
    fn fill_direct(&mut self, dest: &mut [u8]) {
        trace!("direct keystream fill of {} bytes", dest.len());

        self.refresh();

        // params.validate() guarantees the buffer holds a full key past the
        // key region.
        let tmp = &mut self.buf[self.cursor..self.cursor + KEY_SIZE];
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(tmp);
        tmp.zeroize();
        self.cursor += KEY_SIZE;

        dest.fill(0);
        xor_keystream(&key, &ZERO_NONCE, self.rounds, dest);
        key.zeroize();
    }

    /// Allocates and returns `n` random bytes.
    ///
    /// `Csprng` also implements [`std::io::Read`], whose by-value
    /// `Read::bytes` wins method resolution when that trait is in scope.
    /// Call this as `Csprng::bytes(&mut rng, n)` there.
    pub fn bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill_bytes(&mut out);

        out
    }
}

impl Default for Csprng {
    /// Creates a default generator seeded from the operating system.
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Csprng {
    fn drop(&mut self) {
        self.buf.zeroize();
    }
}

impl fmt::Debug for Csprng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Csprng")
            .field("params", &self.params())
            .finish_non_exhaustive()
    }
}

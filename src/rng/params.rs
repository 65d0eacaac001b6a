//! Parameter definitions and validation for the buffered generator.
//!
//! The parameters trade memory and reseed frequency against security
//! margin. Both are fixed for the lifetime of a generator.

use crate::cipher::{KEY_SIZE, Rounds};
use crate::error::ParamError;

/// Default number of random bytes buffered beyond the key.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;

/// Configuration parameters for a buffered generator.
///
/// # Recommended Values
///
/// The defaults (1024-byte buffer, ChaCha12) are a good balance for
/// general use. Larger buffers reduce how often the generator refreshes
/// itself at the cost of memory; requests larger than the whole buffer
/// bypass it entirely.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RngParams {
    /// Bytes of output buffered beyond the key (minimum 32).
    pub buffer_size: usize,
    /// ChaCha round count.
    pub rounds: Rounds,
}

impl RngParams {
    /// Creates parameters with the given buffer size and round count.
    pub const fn new(buffer_size: usize, rounds: Rounds) -> Self {
        Self {
            buffer_size,
            rounds,
        }
    }

    /// Checks that the parameters can back a generator.
    ///
    /// The buffer must hold at least one key's worth of bytes, since the
    /// large-request path carves a temporary key out of it.
    ///
    /// # Errors
    /// Returns [`ParamError::BufferTooSmall`] if `buffer_size` is below the
    /// key size.
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.buffer_size < KEY_SIZE {
            return Err(ParamError::BufferTooSmall(self.buffer_size));
        }

        Ok(())
    }

    /// Total length of the internal buffer, key region included.
    pub(crate) const fn buffer_len(&self) -> usize {
        KEY_SIZE + self.buffer_size
    }
}

impl Default for RngParams {
    /// Default parameters: 1024-byte buffer, 12 rounds.
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_SIZE, Rounds::default())
    }
}

//! Keystream primitive
//!
//! The buffered generator consumes the cipher as a black-box keystream
//! function: given a 256-bit key, a nonce and a round count, it transforms a
//! buffer in place by XOR-ing it with cipher output.
//!
//! Only the ChaCha family is provided, at the three standard round counts.

pub(crate) mod chacha;

use crate::error::ParamError;

pub use chacha::{KEY_SIZE, NONCE_SIZE};

/// Number of ChaCha rounds.
///
/// ChaCha12 is the default: ChaCha8 is noticeably weaker without being much
/// faster, and ChaCha20 is noticeably slower without being much stronger.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Rounds {
    /// ChaCha8
    Eight,
    /// ChaCha12
    #[default]
    Twelve,
    /// ChaCha20
    Twenty,
}

impl Rounds {
    /// Returns the round count as an integer.
    pub const fn count(self) -> u32 {
        match self {
            Rounds::Eight => 8,
            Rounds::Twelve => 12,
            Rounds::Twenty => 20,
        }
    }

    pub(crate) const fn double_rounds(self) -> u32 {
        self.count() / 2
    }
}

impl TryFrom<u32> for Rounds {
    type Error = ParamError;

    fn try_from(rounds: u32) -> Result<Self, Self::Error> {
        match rounds {
            8 => Ok(Rounds::Eight),
            12 => Ok(Rounds::Twelve),
            20 => Ok(Rounds::Twenty),
            other => Err(ParamError::UnsupportedRounds(other)),
        }
    }
}

impl From<Rounds> for u32 {
    fn from(rounds: Rounds) -> Self {
        rounds.count()
    }
}

//! ChaCha keystream implementation
//!
//! This module provides a low-level, dependency-light implementation of the
//! ChaCha block function with a configurable number of rounds (8, 12 or 20),
//! in the original layout: a 64-bit block counter followed by a 64-bit nonce.
//!
//! It is used as the keystream source of the buffered generator, and
//! therefore:
//! - avoids heap allocations
//! - runs in constant time with respect to key and data
//! - wipes its working state after every block
//!
//! This module **does not** implement authenticated encryption.

use zeroize::Zeroize;

use super::Rounds;

/// ChaCha key size in bytes (256-bit).
pub const KEY_SIZE: usize = 32;

/// ChaCha nonce size in bytes (64-bit, original layout).
pub const NONCE_SIZE: usize = 8;

/// Size of a single keystream block in bytes.
const BLOCK_SIZE: usize = 64;

/// ChaCha constant words.
///
/// These values correspond to the ASCII string `"expand 32-byte k"`
/// encoded as little-endian `u32` words.
const CHACHA_CONSTANTS: [u32; 4] = [
    0x6170_7865, // "expa"
    0x3320_646e, // "nd 3"
    0x7962_2d32, // "2-by"
    0x6b20_6574, // "te k"
];

/// Performs one ChaCha quarter round.
///
/// Mixes four 32-bit words of the state using addition modulo 2³², XOR and
/// fixed left rotations. Branchless.
#[inline(always)]
fn quarter_round(state: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(16);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(12);

    state[a] = state[a].wrapping_add(state[b]);
    state[d] ^= state[a];
    state[d] = state[d].rotate_left(8);

    state[c] = state[c].wrapping_add(state[d]);
    state[b] ^= state[c];
    state[b] = state[b].rotate_left(7);
}

/// Applies the ChaCha permutation with the requested number of rounds.
///
/// Each double round performs 4 column quarter rounds followed by
/// 4 diagonal quarter rounds.
fn permute(state: &mut [u32; 16], rounds: Rounds) {
    for _ in 0..rounds.double_rounds() {
        // Column rounds
        quarter_round(state, 0, 4, 8, 12);
        quarter_round(state, 1, 5, 9, 13);
        quarter_round(state, 2, 6, 10, 14);
        quarter_round(state, 3, 7, 11, 15);

        // Diagonal rounds
        quarter_round(state, 0, 5, 10, 15);
        quarter_round(state, 1, 6, 11, 12);
        quarter_round(state, 2, 7, 8, 13);
        quarter_round(state, 3, 4, 9, 14);
    }
}

/// Generates a single 64-byte keystream block into `out`.
///
/// # Parameters
/// - `key`: 256-bit secret key
/// - `nonce`: 64-bit nonce
/// - `counter`: 64-bit block counter
/// - `rounds`: ChaCha round count
fn block(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    counter: u64,
    rounds: Rounds,
    out: &mut [u8; BLOCK_SIZE],
) {
    let mut state = [0u32; 16];

    state[0..4].copy_from_slice(&CHACHA_CONSTANTS);

    // Key (256-bit, as little-endian words)
    for (s, k) in state[4..12].iter_mut().zip(key.chunks_exact(4)) {
        *s = u32::from_le_bytes([k[0], k[1], k[2], k[3]]);
    }

    // Block counter, low word first
    state[12] = counter as u32;
    state[13] = (counter >> 32) as u32;

    // Nonce (64-bit, little-endian)
    for (s, n) in state[14..16].iter_mut().zip(nonce.chunks_exact(4)) {
        *s = u32::from_le_bytes([n[0], n[1], n[2], n[3]]);
    }

    // Preserve original state for feed-forward
    let mut original = state;

    permute(&mut state, rounds);

    for (s, o) in state.iter_mut().zip(&original) {
        *s = s.wrapping_add(*o);
    }

    for (chunk, word) in out.chunks_exact_mut(4).zip(&state) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }

    state.zeroize();
    original.zeroize();
}

/// XORs `buf` in place with the ChaCha keystream for `(key, nonce)`,
/// starting at block 0.
///
/// Encryption and decryption are the same operation. Applied to an all-zero
/// buffer, this writes the raw keystream.
///
/// # Notes
/// - Deterministic: identical `(key, nonce, rounds, buf.len())` always yield
///   the same keystream.
/// - The caller must ensure `(key, nonce)` uniqueness across uses.
pub(crate) fn xor_keystream(
    key: &[u8; KEY_SIZE],
    nonce: &[u8; NONCE_SIZE],
    rounds: Rounds,
    buf: &mut [u8],
) {
    let mut keystream = [0u8; BLOCK_SIZE];

    for (counter, chunk) in (0u64..).zip(buf.chunks_mut(BLOCK_SIZE)) {
        block(key, nonce, counter, rounds, &mut keystream);

        for (b, k) in chunk.iter_mut().zip(&keystream) {
            *b ^= k;
        }
    }

    keystream.zeroize();
}

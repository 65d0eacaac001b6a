//! Uniform big-integer sampling over any byte source.
//!
//! Draws just enough bytes to cover the bit length of `n - 1`, masks off the
//! excess high bits, and rejects candidates that are not below `n`. Because
//! the candidate range is less than twice `n`, the expected number of draws
//! is below 2.

use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::RngCore;
use zeroize::Zeroize;

/// Returns a uniform random [`BigUint`] in `[0, n)`, reading from `rng`.
///
/// # Panics
/// Panics if `n` is zero.
pub fn biguint_below<R: RngCore + ?Sized>(rng: &mut R, n: &BigUint) -> BigUint {
    assert!(!n.is_zero(), "biguint_below: bound must be non-zero");

    let bits = (n - 1u32).bits();
    if bits == 0 {
        return BigUint::zero();
    }

    let len = usize::try_from(bits.div_ceil(8)).unwrap_or(usize::MAX);

    // Bits of the most significant byte that may be set.
    let top_bits = match bits % 8 {
        0 => 8,
        b => b,
    };
    let top_mask = u8::MAX >> (8 - top_bits);

    let mut bytes = vec![0u8; len];

    loop {
        rng.fill_bytes(&mut bytes);
        bytes[0] &= top_mask;

        let candidate = BigUint::from_bytes_be(&bytes);
        if &candidate < n {
            bytes.zeroize();
            return candidate;
        }
    }
}

//! Bounded sampling on top of the buffered generator.
//!
//! All bounded integers use rejection sampling: a draw is discarded and
//! redrawn if it falls in the incomplete final stretch of the 64-bit range
//! that would otherwise bias small results. The result is exactly uniform.

use num_bigint::BigUint;

use crate::rng::bigint;
use crate::rng::generator::Csprng;

impl Csprng {
    /// Returns a uniform random `u64` in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn u64_below(&mut self, n: u64) -> u64 {
        assert!(n != 0, "u64_below: bound must be non-zero");

        // The largest multiple of n that fits in u64. Since n <= u64::MAX,
        // max is at least half the range: an expected 2 draws in the worst
        // case (n = u64::MAX / 2 + 1).
        let max = u64::MAX - u64::MAX % n;
        let mut b = [0u8; 8];

        loop {
            self.fill_bytes(&mut b);

            let i = u64::from_le_bytes(b);
            if i < max {
                return i % n;
            }
        }
    }

    /// Returns a uniform random `i64` in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n <= 0`.
    pub fn i64_below(&mut self, n: i64) -> i64 {
        assert!(n > 0, "i64_below: bound must be positive, got {n}");

        // n <= i64::MAX, so both casts are lossless and the worst case is an
        // expected 4/3 draws.
        self.u64_below(n as u64) as i64
    }

    /// Returns a uniform random [`BigUint`] in `[0, n)`.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn biguint_below(&mut self, n: &BigUint) -> BigUint {
        bigint::biguint_below(self, n)
    }

    /// Returns a uniform random permutation of `0..n`.
    ///
    /// Each of the `n!` orderings is equally likely. `n == 0` yields an
    /// empty vector.
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        let mut perm = vec![0usize; n];

        // Inside-out Fisher-Yates: place i at a uniform position j <= i,
        // moving whatever was there to the end.
        for i in 1..n {
            let j = self.u64_below(i as u64 + 1) as usize;
            perm[i] = perm[j];
            perm[j] = i;
        }

        perm
    }
}

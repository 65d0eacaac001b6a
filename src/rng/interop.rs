//! Byte-stream adapters for [`Csprng`].
//!
//! Lets the generator stand in wherever generic code expects a source of
//! random bytes: `std::io::Read` consumers and the `rand_core` traits.

use std::io;

use rand_core::{CryptoRng, RngCore, impls};

use crate::rng::generator::Csprng;

/// With this trait in scope, `rng.bytes(n)` resolves to `Read::bytes`; use
/// `Csprng::bytes(&mut rng, n)` for the inherent method.
impl io::Read for Csprng {
    /// Fills `buf` completely. Never fails and never returns a short read.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Csprng::fill_bytes(self, buf);
        Ok(buf.len())
    }
}

impl RngCore for Csprng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Csprng::fill_bytes(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Csprng::fill_bytes(self, dest);
        Ok(())
    }
}

impl CryptoRng for Csprng {}

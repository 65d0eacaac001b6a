//! Operating system entropy
//!
//! This module provides a platform-independent way to obtain seed material
//! from the operating system. Platform selection (the `getrandom` system
//! call on Linux, `arc4random_buf` on macOS, `BCryptGenRandom` on Windows,
//! and so on) is delegated to the `getrandom` crate.
//!
//! It is only used at construction time. Generators never go back to the
//! operating system once seeded.

use crate::error::Error;

/// Fills a buffer with cryptographically secure random bytes from the OS.
///
/// Partial reads and interrupted system calls are retried transparently by
/// the underlying implementation.
///
/// # Errors
/// Returns [`Error::Entropy`] if the operating system cannot supply the
/// requested bytes. Such a failure indicates a critical environment issue
/// and is not retried.
pub(crate) fn sys_random(buf: &mut [u8]) -> Result<(), Error> {
    getrandom::getrandom(buf)?;

    Ok(())
}

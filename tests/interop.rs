use std::io::Read;

use rand_core::{CryptoRng, RngCore};
use swiftrand::{Csprng, Reader, RngParams, Rounds};

fn zero_seeded() -> Csprng {
    Csprng::with_params(&[0u8; 32], RngParams::new(64, Rounds::Twenty)).unwrap()
}

fn assert_crypto_rng<R: RngCore + CryptoRng>(_: &R) {}

// `std::io::Read` is in scope here, so `rng.bytes(n)` would resolve to
// `Read::bytes`. Inherent calls use the fully qualified form.
fn inherent_bytes(rng: &mut Csprng, n: usize) -> Vec<u8> {
    Csprng::bytes(rng, n)
}

#[test]
fn test_rng_core_matches_inherent_output() {
    let mut a = zero_seeded();
    let mut b = zero_seeded();

    let expected_u64 = u64::from_le_bytes(inherent_bytes(&mut b, 8).try_into().unwrap());
    assert_eq!(RngCore::next_u64(&mut a), expected_u64);

    let expected_u32 = u32::from_le_bytes(inherent_bytes(&mut b, 4).try_into().unwrap());
    assert_eq!(RngCore::next_u32(&mut a), expected_u32);

    let mut via_trait = [0u8; 100];
    a.try_fill_bytes(&mut via_trait).unwrap();
    assert_eq!(via_trait.to_vec(), inherent_bytes(&mut b, 100));
}

#[test]
fn test_io_read_matches_inherent_output() {
    let mut a = zero_seeded();
    let mut b = zero_seeded();

    let mut buf = [0u8; 40];
    assert_eq!(a.read(&mut buf).unwrap(), 40);
    assert_eq!(buf.to_vec(), inherent_bytes(&mut b, 40));
}

#[test]
fn test_inherent_bytes_with_read_in_scope() {
    let mut a = zero_seeded();
    let mut b = zero_seeded();

    let inherent = Csprng::bytes(&mut a, 8);
    assert_eq!(inherent.len(), 8);

    // `Read::bytes` is the by-value byte iterator over the same stream.
    let streamed: Vec<u8> = Read::bytes(&mut b).take(8).map(Result::unwrap).collect();
    assert_eq!(streamed, inherent);
}

#[test]
fn test_io_read_to_take() {
    let mut out = Vec::new();
    let read = zero_seeded().take(300).read_to_end(&mut out).unwrap();

    assert_eq!(read, 300);
    assert_eq!(out.len(), 300);
}

#[test]
fn test_crypto_rng_markers() {
    assert_crypto_rng(&zero_seeded());
    assert_crypto_rng(&Reader);
}

#[test]
fn test_reader_rng_core() {
    let mut reader = Reader;

    let a = reader.next_u64();
    let b = reader.next_u64();
    assert_ne!(a, b);

    let mut buf = [0u8; 64];
    reader.fill_bytes(&mut buf);
    assert!(buf.iter().any(|&x| x != 0));
}

use std::collections::HashSet;
use std::io::Read;
use std::thread;

use swiftrand::{BigUint, Error, ParamError, Pool, Reader, RngParams, Rounds};

#[test]
fn test_free_functions() {
    let mut buf = [0u8; 64];
    swiftrand::fill_bytes(&mut buf);
    assert!(buf.iter().any(|&b| b != 0));

    assert_eq!(swiftrand::bytes(100).len(), 100);
    assert!(swiftrand::u64_below(10) < 10);
    assert!((0..10).contains(&swiftrand::i64_below(10)));
    assert!(swiftrand::biguint_below(&BigUint::from(10u32)) < BigUint::from(10u32));

    let mut perm = swiftrand::permutation(20);
    perm.sort_unstable();
    assert_eq!(perm, (0..20).collect::<Vec<_>>());
}

#[test]
#[should_panic(expected = "bound must be non-zero")]
fn test_free_u64_below_zero_panics() {
    swiftrand::u64_below(0);
}

#[test]
#[should_panic(expected = "bound must be positive")]
fn test_free_i64_below_negative_panics() {
    swiftrand::i64_below(-1);
}

#[test]
fn test_global_pool_uses_default_params() {
    assert_eq!(swiftrand::global_pool().params(), RngParams::default());
}

#[test]
fn test_isolated_pool_lifecycle() {
    let pool = Pool::new();
    assert_eq!(pool.idle(), 0);

    let rng = pool.checkout().unwrap();
    assert_eq!(pool.idle(), 0);

    pool.checkin(rng);
    assert_eq!(pool.idle(), 1);

    // Sequential calls keep reusing the single idle generator.
    for _ in 0..10 {
        pool.bytes(16);
    }
    assert_eq!(pool.idle(), 1);
}

#[test]
fn test_pool_with_params() {
    let params = RngParams::new(64, Rounds::Eight);
    let pool = Pool::with_params(params).unwrap();

    let rng = pool.checkout().unwrap();
    assert_eq!(rng.params(), params);
    pool.checkin(rng);

    assert_eq!(pool.params(), params);
    assert_eq!(pool.bytes(500).len(), 500);
}

#[test]
fn test_pool_rejects_invalid_params() {
    let result = Pool::with_params(RngParams::new(0, Rounds::Twelve));

    assert!(matches!(
        result,
        Err(Error::InvalidParams(ParamError::BufferTooSmall(0)))
    ));
}

#[test]
fn test_pool_drops_foreign_generators() {
    let pool = Pool::new();
    let foreign =
        swiftrand::Csprng::with_params(&[1u8; 32], RngParams::new(64, Rounds::Twenty)).unwrap();

    pool.checkin(foreign);

    assert_eq!(pool.idle(), 0);
}

#[test]
fn test_pool_caps_idle_generators() {
    let pool = Pool::new().with_max_idle(2);
    assert_eq!(pool.max_idle(), 2);

    let checked_out: Vec<_> = (0..4).map(|_| pool.checkout().unwrap()).collect();
    assert_eq!(pool.idle(), 0);

    for rng in checked_out {
        pool.checkin(rng);
    }
    assert_eq!(pool.idle(), 2);

    // Capped pools keep serving requests.
    assert_eq!(pool.bytes(32).len(), 32);
    assert_eq!(pool.idle(), 2);
}

#[test]
fn test_pool_default_idle_cap() {
    let pool = Pool::new();
    assert!(pool.max_idle() >= 1);

    let unpooled = Pool::new().with_max_idle(0);
    unpooled.bytes(8);
    assert_eq!(unpooled.idle(), 0);
}

#[test]
fn test_pool_survives_panicking_call() {
    let pool = Pool::new();
    pool.bytes(8);

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| pool.u64_below(0)));
    assert!(result.is_err());

    // The generator in use was dropped; the pool still works.
    assert_eq!(pool.idle(), 0);
    assert!(pool.u64_below(3) < 3);
}

#[test]
fn test_concurrent_callers_get_distinct_output() {
    const THREADS: usize = 16;
    const CALLS: usize = 200;

    let pool = Pool::new();

    let outputs: Vec<Vec<u8>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                s.spawn(|| {
                    let mut local = Vec::with_capacity(CALLS);

                    for _ in 0..CALLS {
                        let len = 16 + pool.u64_below(3000) as usize;
                        let out = pool.bytes(len);
                        assert_eq!(out.len(), len);
                        local.push(out);
                    }

                    local
                })
            })
            .collect();

        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(outputs.len(), THREADS * CALLS);

    let prefixes: HashSet<&[u8]> = outputs.iter().map(|o| &o[..16]).collect();
    assert_eq!(prefixes.len(), outputs.len());

    assert!(pool.idle() <= THREADS);
}

#[test]
fn test_concurrent_free_functions() {
    let results: Vec<Vec<u8>> = thread::scope(|s| {
        let handles: Vec<_> = (0..8).map(|_| s.spawn(|| swiftrand::bytes(32))).collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let distinct: HashSet<_> = results.iter().collect();
    assert_eq!(distinct.len(), results.len());
}

#[test]
fn test_reader_fills_completely() {
    let mut buf = vec![0u8; 5000];
    let n = Reader.read(&mut buf).unwrap();

    assert_eq!(n, buf.len());
    assert!(buf.iter().any(|&b| b != 0));

    let mut exact = [0u8; 33];
    Reader.read_exact(&mut exact).unwrap();
    assert!(exact.iter().any(|&b| b != 0));
}

use super::*;
use crate::Variant;

/// A random source that replays a fixed byte pattern.
struct MockRandSource(u8);

impl RandSource for MockRandSource {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        for e in dest.iter_mut() {
            *e = self.0;
            self.0 = self.0.wrapping_add(0x11);
        }
        Ok(())
    }
}

/// A clock that advances by a fixed step on each read.
struct MockTimeSource(u64);

impl TimeSource for MockTimeSource {
    fn unix_ts_ms(&mut self) -> Result<u64, Error> {
        self.0 += 8;
        Ok(self.0)
    }
}

/// A clock that always fails.
struct BrokenTimeSource;

impl TimeSource for BrokenTimeSource {
    fn unix_ts_ms(&mut self) -> Result<u64, Error> {
        let err = std::time::UNIX_EPOCH
            .duration_since(std::time::UNIX_EPOCH + std::time::Duration::from_secs(1))
            .unwrap_err();
        Err(err.into())
    }
}

/// Encodes timestamp and random bytes at fixed positions
#[test]
fn encodes_timestamp_and_random_bytes_at_fixed_positions() {
    let ts = 0x0123_4567_89abu64;
    let mut g =
        V7Generator::with_rand_and_time_sources(MockRandSource(0x00), MockTimeSource(ts - 8));
    let e = g.generate().unwrap();
    assert_eq!(e.as_bytes()[..6], ts.to_be_bytes()[2..]);
    assert_eq!(
        e.as_bytes()[6..],
        [0x70, 0x11, 0xa2, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99]
    );
    assert_eq!(e.timestamp(), ts);
    assert_eq!(e.variant(), Variant::Var10);
    assert_eq!(e.version(), Some(7));
}

/// Takes timestamp from time source on each call
#[test]
fn takes_timestamp_from_time_source_on_each_call() {
    let ts = 0x0123_4567_89abu64;
    let mut g = V7Generator::with_rand_and_time_sources(MockRandSource(0x00), MockTimeSource(ts));
    let mut prev = g.generate().unwrap();
    for i in 2..100u64 {
        let curr = g.generate().unwrap();
        assert_eq!(curr.timestamp(), ts + 8 * i);
        assert!(prev < curr);
        prev = curr;
    }
}

/// Uses timestamp passed to core function as is
#[test]
fn uses_timestamp_passed_to_core_function_as_is() {
    let ts = 0x0123_4567_89abu64;
    let mut g = V7Generator::with_rand08(rand::thread_rng());
    let prev = g.generate_core(ts).unwrap();
    assert_eq!(prev.timestamp(), ts);

    // no clamping: a smaller timestamp yields a smaller UUID
    let curr = g.generate_core(ts - 1).unwrap();
    assert_eq!(curr.timestamp(), ts - 1);
    assert!(prev > curr);
}

/// Reports broken clock as generator unavailable
#[test]
fn reports_broken_clock_as_generator_unavailable() {
    let mut g = V7Generator::with_rand_and_time_sources(MockRandSource(0x00), BrokenTimeSource);
    assert!(matches!(
        g.generate(),
        Err(Error::GeneratorUnavailable(crate::Unavailable::Clock(_)))
    ));
}

/// Reads current timestamp from system clock
#[test]
fn reads_current_timestamp_from_system_clock() {
    let mut clock = StdSystemTime;
    let mut g = V7Generator::with_rand08(rand::rngs::OsRng);
    for _ in 0..1_000 {
        let t0 = clock.unix_ts_ms().unwrap();
        let e = g.generate().unwrap();
        let t1 = clock.unix_ts_ms().unwrap();
        assert!(t0 <= e.timestamp() && e.timestamp() <= t1);
    }
}

/// Supports operations as an infinite iterator
#[test]
fn supports_operations_as_an_infinite_iterator() {
    use std::collections::HashSet;
    let g = V7Generator::with_rand08(rand::thread_rng());
    assert_eq!(g.size_hint(), (usize::MAX, None));
    let s: HashSet<_> = g.take(10_000).map(Result::unwrap).collect();
    assert_eq!(s.len(), 10_000);
}

/// Generates no collisions with one generator per thread
#[test]
fn generates_no_collisions_with_one_generator_per_thread() {
    use std::{collections::HashSet, thread};

    let s: HashSet<_> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                s.spawn(|| {
                    let mut g = V7Generator::with_rand08(rand::rngs::OsRng);
                    (0..5_000)
                        .map(|_| g.generate().unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });
    assert_eq!(s.len(), 8 * 5_000);
}

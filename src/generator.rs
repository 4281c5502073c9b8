//! UUIDv7 generator and related types.

use crate::{Error, Uuid};

pub mod with_rand08;

/// A trait that defines the minimum random number generator interface for [`V7Generator`].
///
/// Implementations must draw from a cryptographically secure source and report failure instead
/// of falling back to weaker randomness.
pub trait RandSource {
    /// Fills `dest` with random data.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

/// A trait that defines the minimum system clock interface for [`V7Generator`].
pub trait TimeSource {
    /// Returns the current Unix time in milliseconds.
    fn unix_ts_ms(&mut self) -> Result<u64, Error>;
}

/// The default [`TimeSource`] that uses [`std::time::SystemTime`].
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn unix_ts_ms(&mut self) -> Result<u64, Error> {
        use std::time;
        Ok(time::SystemTime::now()
            .duration_since(time::UNIX_EPOCH)?
            .as_millis() as u64)
    }
}

/// Represents a UUIDv7 generator that owns one random source and one time source.
///
/// The generator holds no counter or other state shared between calls: each UUID is the current
/// timestamp followed by 74 fresh random bits. It is meant to be owned by a single thread or
/// worker, so no lock is taken when generating. The following example gives each worker thread
/// its own generator seeded from the OS.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use std::thread;
/// use uuid7::V7Generator;
///
/// thread::scope(|s| {
///     for i in 0..4 {
///         s.spawn(move || {
///             let mut g = V7Generator::with_rand08(OsRng);
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.generate().unwrap(), i);
///             }
///         });
///     }
/// });
/// ```
///
/// The `unix_ts_ms` field is taken from the clock as is, so UUIDs generated while the system
/// clock moves backwards sort before those generated earlier. The 48-bit field holds timestamps
/// up to the year 10889; later values are truncated to their low 48 bits.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct V7Generator<R, T = StdSystemTime> {
    /// The random number generator used by the generator.
    rand_source: R,

    /// The system clock used by the generator.
    time_source: T,
}

impl<R: RandSource> V7Generator<R> {
    /// Creates a generator object with a specified random number generator and the system clock.
    pub const fn new(rand_source: R) -> Self {
        Self::with_rand_and_time_sources(rand_source, StdSystemTime)
    }
}

impl<R: RandSource, T: TimeSource> V7Generator<R, T> {
    /// Creates a generator object with specified random number generator and system clock.
    pub const fn with_rand_and_time_sources(rand_source: R, time_source: T) -> Self {
        Self {
            rand_source,
            time_source,
        }
    }

    /// Generates a new UUIDv7 object from the current timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeneratorUnavailable`] if the clock or the random source cannot be read.
    pub fn generate(&mut self) -> Result<Uuid, Error> {
        let unix_ts_ms = self.time_source.unix_ts_ms()?;
        self.generate_core(unix_ts_ms)
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// Only the low 48 bits of `unix_ts_ms` are encoded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GeneratorUnavailable`] if the random source cannot be read.
    pub fn generate_core(&mut self, unix_ts_ms: u64) -> Result<Uuid, Error> {
        let mut rand_bytes = [0u8; 10];
        self.rand_source.fill_bytes(&mut rand_bytes)?;
        Ok(Uuid::from_parts_v7(unix_ts_ms, rand_bytes))
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv7 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use uuid7::V7Generator;
///
/// V7Generator::with_rand08(rand::thread_rng())
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{i}] {}", e.unwrap()));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for V7Generator<R, T> {
    type Item = Result<Uuid, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> std::iter::FusedIterator for V7Generator<R, T> {}

#[cfg(test)]
mod tests;

//! Integration with `rand` (v0.8) crate.

use super::{RandSource, V7Generator};
use crate::Error;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// Bytes are drawn through [`RngCore::try_fill_bytes`] so that a failing source is reported as
/// [`Error::GeneratorUnavailable`] rather than panicking.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        Ok(self.0.try_fill_bytes(dest)?)
    }
}

impl<T: RngCore> V7Generator<Adapter<T>> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid7::V7Generator;
    ///
    /// let mut g = V7Generator::with_rand08(rand::rngs::OsRng);
    /// println!("{}", g.generate()?);
    /// # Ok::<(), uuid7::Error>(())
    /// ```
    pub const fn with_rand08(rng: T) -> Self {
        Self::new(Adapter(rng))
    }
}

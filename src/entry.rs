//! Default generator and entry point function

use crate::{generator::with_rand08::Adapter, Error, Uuid, V7Generator};
use rand::RngCore;
use std::cell::RefCell;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<Option<V7Generator<Adapter<inner::ThreadGenRng>>>> =
        const { RefCell::new(None) };
}

/// Generates a UUIDv7 object.
///
/// This function employs a thread-local generator, so concurrent callers never contend on a lock.
/// Each thread seeds its own ChaCha-based random number generator from the OS on first use, and
/// on Unix it reseeds when the process ID changes (i.e. upon process forks) to prevent collisions
/// across processes. UUIDs generated by one thread are in increasing order as long as the system
/// clock moves forward and at least one millisecond passes between them; UUIDs from different
/// threads in the same millisecond may sort either way.
///
/// # Errors
///
/// Returns [`Error::GeneratorUnavailable`] if the OS entropy source cannot seed the generator or
/// the system clock cannot be read. A failed seeding is retried on the next call.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid7::uuid7()?;
/// println!("{uuid}"); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = uuid7::uuid7()?.to_string();
/// # Ok::<(), uuid7::Error>(())
/// ```
pub fn uuid7() -> Result<Uuid, Error> {
    DEFAULT_GENERATOR.with(|slot| {
        generate_in_slot(
            &mut slot.borrow_mut(),
            unix_fork_safety::pid_changed,
            inner::ThreadGenRng::from_os,
        )
    })
}

/// Generates a UUID with the generator in `slot`, first discarding it if `pid_changed` reports a
/// fork and seeding a new one with `seed` if the slot is empty.
///
/// A seeding error is returned as is and leaves the slot empty.
fn generate_in_slot<R: RngCore>(
    slot: &mut Option<V7Generator<Adapter<R>>>,
    pid_changed: impl FnOnce() -> bool,
    seed: impl FnOnce() -> Result<R, Error>,
) -> Result<Uuid, Error> {
    if pid_changed() {
        log::debug!("process id changed; discarding thread-local uuid7 generator");
        *slot = None;
    }

    let g = match slot {
        Some(g) => g,
        empty @ None => {
            let rng = seed().map_err(|err| {
                log::warn!("could not seed thread-local uuid7 generator: {err}");
                err
            })?;
            log::debug!("seeded thread-local uuid7 generator");
            empty.insert(V7Generator::with_rand08(rng))
        }
    };
    g.generate()
}

mod inner {
    use crate::Error;
    use rand::{
        rngs::{adapter::ReseedingRng, OsRng},
        CryptoRng, RngCore, SeedableRng,
    };
    use rand_chacha::ChaCha12Core;

    /// Number of bytes generated before the generator reseeds itself from [`OsRng`].
    const RESEED_THRESHOLD: u64 = 1024 * 64;

    /// The random number generator of the thread-local generator.
    ///
    /// This employs [`ChaCha12Core`] with [`ReseedingRng`] wrapper to emulate the strategy used by
    /// [`rand::rngs::ThreadRng`], but reports seeding failures instead of panicking.
    #[derive(Debug)]
    pub struct ThreadGenRng(ReseedingRng<ChaCha12Core, OsRng>);

    impl ThreadGenRng {
        pub fn from_os() -> Result<Self, Error> {
            let core = ChaCha12Core::from_rng(OsRng)?;
            Ok(Self(ReseedingRng::new(core, RESEED_THRESHOLD, OsRng)))
        }
    }

    impl RngCore for ThreadGenRng {
        fn next_u32(&mut self) -> u32 {
            self.0.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.0.next_u64()
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            self.0.fill_bytes(dest)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
            self.0.try_fill_bytes(dest)
        }
    }

    impl CryptoRng for ThreadGenRng {}
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Returns true if the process ID differs from the one this thread last observed.
    pub fn pid_changed() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            pid != last_pid.replace(pid)
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn pid_changed() -> bool {
        false
    }
}

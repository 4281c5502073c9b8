//! Error types reported by UUIDv7 generators.

use std::time::SystemTimeError;

/// All errors that a UUIDv7 generator can emit.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The secure random source or the system clock could not be read.
    ///
    /// Generation is all-or-nothing: no partially filled UUID is ever returned, and the call is
    /// not retried internally.
    #[error("uuid7 generator unavailable: {0}")]
    GeneratorUnavailable(#[from] Unavailable),
}

/// The underlying capability that failed.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Unavailable {
    /// The cryptographically secure random source could not produce bytes.
    #[error("secure random source failed")]
    Entropy(#[source] rand::Error),

    /// The system clock reported a time before the Unix epoch.
    #[error("system clock is before the Unix epoch")]
    Clock(#[source] SystemTimeError),
}

impl From<rand::Error> for Error {
    fn from(err: rand::Error) -> Self {
        Unavailable::Entropy(err).into()
    }
}

impl From<SystemTimeError> for Error {
    fn from(err: SystemTimeError) -> Self {
        Unavailable::Clock(err).into()
    }
}

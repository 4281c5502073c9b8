//! A lock-free implementation of UUID Version 7
//!
//! ```rust
//! use uuid7::uuid7;
//!
//! let uuid = uuid7()?;
//! println!("{}", uuid); // e.g. "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//! # Ok::<(), uuid7::Error>(())
//! ```
//!
//! See [draft-peabody-dispatch-new-uuid-format-04](https://www.ietf.org/archive/id/draft-peabody-dispatch-new-uuid-format-04.html).
//!
//! # Field and bit layout
//!
//! This implementation produces identifiers with the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field is dedicated to the Unix timestamp in
//!   milliseconds, big-endian.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 12-bit `rand_a` and the 62-bit `rand_b` fields are filled with a
//!   cryptographically strong random number.
//! - The 2-bit `var` field is set at `10`.
//!
//! Because the timestamp occupies the most significant bytes, identifiers
//! created in different milliseconds sort by creation time, both as bytes and
//! as canonical strings. Identifiers created within the same millisecond are
//! ordered only by their random bits. The `unix_ts_ms` field follows the system
//! clock as is; if the clock moves backwards, so do the generated timestamps.
//!
//! # Concurrency
//!
//! [`uuid7()`] keeps one generator per thread, each seeded independently from
//! the OS, so calls from many threads never contend on a shared lock. Use
//! [`V7Generator`] to hand an explicit generator to each worker instead.
//!
//! # Crate features
//!
//! - `serde`: serializes [`Uuid`] as the canonical string for human-readable
//!   formats and as 16 bytes otherwise.
//! - `uuid`: converts [`Uuid`] to and from [`uuid::Uuid`](https://docs.rs/uuid).

#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{ParseError, Uuid, Variant};

mod error;
pub use error::{Error, Unavailable};

pub mod generator;
#[doc(inline)]
pub use generator::V7Generator;

mod entry;
pub use entry::uuid7;

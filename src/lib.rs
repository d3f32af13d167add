//! Decodes GPS, GLONASS, Galileo and BeiDou navigation messages into
//! structured ephemeris and almanac records.
//!
//! Callers hand raw per-subframe/string/word data-words to
//! [`dispatcher::Dispatcher::ingest`] as they arrive off a receiver;
//! [`dispatcher::Dispatcher::decoded`] then returns whatever records the
//! satellite's accumulated frames currently support. Everything in
//! between — frame stitching, fingerprinting, field decoding, and
//! per-satellite accumulation — is internal plumbing exposed only where
//! a caller building its own tooling on top needs it (layout lookup,
//! raw field access).
//!
//! `no_std` compatible with `alloc`; `std` is on by default.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(any(feature = "std", feature = "alloc")), allow(unused))]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod accumulator;
pub mod bits;
pub mod builders;
pub mod decode;
pub mod descriptor;
pub mod dispatcher;
pub mod error;
pub mod gnss;
pub mod identify;
pub mod layouts;
pub mod records;
pub mod uuid;

pub use bits::{DecodedValue, Frame};
pub use dispatcher::{Decoded, Dispatcher};
pub use error::NavMsgError;
pub use gnss::{Gnss, SignalId};
pub use uuid::{Constellation, Uuid};

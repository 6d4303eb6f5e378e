//! seqstamp Core - Unique timestamps whose string form sorts by time
//!
//! This crate defines the identifier value type and its canonical codec:
//! - `UniqueTimestamp`: 48-bit timestamp + 32-bit sequence + 6-byte discriminator
//! - `Discriminator`: the per-process (or per-machine) 6-byte tag
//! - Min/max bound identifiers for range scans over a sorted key space
//! - Fixed-width lowercase hex encoding and its strict parser
//!
//! The canonical form looks like `0000543cef9f-0000b9d1-c42c0319bdbe` and
//! compares lexicographically in the same order as the values themselves.
//! Generation (counter and discriminator selection) lives in `seqstamp-gen`.

pub mod discriminator;
pub mod error;
pub mod id;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod text;

pub use discriminator::*;
pub use error::*;
pub use id::*;
pub use text::*;

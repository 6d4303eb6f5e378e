//! The unique timestamp identifier
//!
//! Layout (encoded most-significant first):
//! - \[timestamp:48\] seconds, high 16 bits of the i64 are dropped
//! - \[sequence:32\] per-generator tie breaker
//! - \[discriminator:48\] generator tag
//!
//! Ordering of values matches byte-wise ordering of the canonical string.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::Discriminator;

/// Bits of the timestamp that survive encoding
pub const TIMESTAMP_BITS: u32 = 48;

/// Mask selecting the encoded part of a timestamp
pub const TIMESTAMP_MASK: i64 = 0x0000_FFFF_FFFF_FFFF;

/// Sequence used by min-bound identifiers
pub const MIN_SEQUENCE: u32 = 0x0000_0000;

/// Sequence used by max-bound identifiers
pub const MAX_SEQUENCE: u32 = 0xFFFF_FFFF;

/// A timestamp made unique by a sequence number and a discriminator.
///
/// Timestamps are expected to be seconds since the Unix epoch. Any i64 is
/// accepted; only the low 48 bits are encoded, which covers several million
/// years of seconds. Negative values wrap into that range.
#[derive(Clone, Copy)]
pub struct UniqueTimestamp {
    timestamp: i64,
    sequence: u32,
    discriminator: Discriminator,
}

impl UniqueTimestamp {
    /// Assemble an identifier from raw parts.
    ///
    /// Generators use this with their counter value; nothing stops a caller
    /// from building a reserved bound by hand.
    #[inline]
    pub const fn from_parts(timestamp: i64, sequence: u32, discriminator: Discriminator) -> Self {
        UniqueTimestamp {
            timestamp,
            sequence,
            discriminator,
        }
    }

    /// Smallest identifier for `timestamp`: sorts before every generated
    /// identifier with the same timestamp and after every one with a lower
    /// timestamp.
    #[inline]
    pub const fn min_bound(timestamp: i64) -> Self {
        Self::from_parts(timestamp, MIN_SEQUENCE, Discriminator::ZERO)
    }

    /// Largest identifier for `timestamp`: sorts after every generated
    /// identifier with the same timestamp and before every one with a
    /// greater timestamp.
    #[inline]
    pub const fn max_bound(timestamp: i64) -> Self {
        Self::from_parts(timestamp, MAX_SEQUENCE, Discriminator::MAX)
    }

    /// Inclusive `(min, max)` bounds covering every identifier for `timestamp`
    #[inline]
    pub const fn bounds(timestamp: i64) -> (Self, Self) {
        (Self::min_bound(timestamp), Self::max_bound(timestamp))
    }

    /// Timestamp as given at construction (or as decoded when parsed)
    #[inline]
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// The 48 bits of the timestamp that take part in encoding and ordering
    #[inline]
    pub fn encoded_timestamp(&self) -> u64 {
        (self.timestamp & TIMESTAMP_MASK) as u64
    }

    #[inline]
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    #[inline]
    pub fn discriminator(&self) -> Discriminator {
        self.discriminator
    }

    /// True for the synthetic min/max bound identifiers
    pub fn is_bound(&self) -> bool {
        (self.sequence == MIN_SEQUENCE && self.discriminator == Discriminator::ZERO)
            || (self.sequence == MAX_SEQUENCE && self.discriminator == Discriminator::MAX)
    }

    #[inline]
    fn sort_key(&self) -> (u64, u32, Discriminator) {
        (self.encoded_timestamp(), self.sequence, self.discriminator)
    }
}

impl PartialEq for UniqueTimestamp {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}

impl Eq for UniqueTimestamp {}

impl Hash for UniqueTimestamp {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl PartialOrd for UniqueTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UniqueTimestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl std::fmt::Debug for UniqueTimestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "UniqueTimestamp({}:{:08x}:{})",
            self.timestamp, self.sequence, self.discriminator
        )
    }
}

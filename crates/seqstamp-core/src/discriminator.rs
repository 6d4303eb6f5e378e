//! Process discriminator
//!
//! Six bytes that tell apart identifiers minted by different generators for
//! the same timestamp and sequence. Usually the hardware address of the host,
//! otherwise random bytes with the multicast bit set.

use std::fmt;

use crate::{SeqstampError, SeqstampResult};

/// Size of a discriminator in bytes (same as an EUI-48 hardware address)
pub const DISCRIMINATOR_LEN: usize = 6;

/// Low bit of the first octet. Set on synthetic discriminators so they can
/// never be mistaken for a burned-in unicast hardware address.
pub const MULTICAST_BIT: u8 = 0x01;

/// 6-byte generator discriminator, compared and encoded in stored byte order
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Discriminator(pub [u8; DISCRIMINATOR_LEN]);

impl Discriminator {
    /// Reserved for min-bound identifiers
    pub const ZERO: Discriminator = Discriminator([0x00; DISCRIMINATOR_LEN]);

    /// Reserved for max-bound identifiers
    pub const MAX: Discriminator = Discriminator([0xFF; DISCRIMINATOR_LEN]);

    #[inline]
    pub const fn new(bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        Discriminator(bytes)
    }

    /// Build a synthetic discriminator from random bytes, forcing the multicast bit
    #[inline]
    pub fn synthetic(mut bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        bytes[0] |= MULTICAST_BIT;
        Discriminator(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; DISCRIMINATOR_LEN] {
        &self.0
    }

    #[inline]
    pub fn to_bytes(self) -> [u8; DISCRIMINATOR_LEN] {
        self.0
    }

    /// Whether the multicast bit is set, i.e. this is not a real unicast hardware address
    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.0[0] & MULTICAST_BIT != 0
    }

    /// Whether this is one of the two values reserved for bound identifiers
    #[inline]
    pub fn is_reserved(&self) -> bool {
        *self == Self::ZERO || *self == Self::MAX
    }

    /// Reject the reserved values; a generator using one could mint an
    /// identifier equal to a bound once its counter reaches 0 or `u32::MAX`.
    pub fn check_usable(self) -> SeqstampResult<Self> {
        if self.is_reserved() {
            return Err(SeqstampError::InvalidFormat(format!(
                "discriminator {} is reserved for bound identifiers",
                self
            )));
        }
        Ok(self)
    }
}

impl From<[u8; DISCRIMINATOR_LEN]> for Discriminator {
    fn from(bytes: [u8; DISCRIMINATOR_LEN]) -> Self {
        Discriminator(bytes)
    }
}

impl fmt::Debug for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.0;
        write!(
            f,
            "Disc({:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x})",
            b[0], b[1], b[2], b[3], b[4], b[5]
        )
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

//! Startup inputs: hardware address lookup and OS randomness

use mac_address::MacAddressIterator;
use rand::RngCore;

use seqstamp_core::{Discriminator, SeqstampError, SeqstampResult, DISCRIMINATOR_LEN};

use crate::DiscriminatorSource;

/// Hardware address of the first non-loopback interface that has one.
///
/// Loopback interfaces report an all-zero address, which is skipped along
/// with the broadcast address since both collide with bound identifiers.
pub fn hardware_address() -> Option<Discriminator> {
    let interfaces = match MacAddressIterator::new() {
        Ok(it) => it,
        Err(e) => {
            tracing::debug!("hardware address enumeration failed: {}", e);
            return None;
        }
    };

    interfaces
        .map(|mac| Discriminator::new(mac.bytes()))
        .find(|d| !d.is_reserved())
}

/// Random discriminator with the multicast bit set
pub fn random_discriminator<R: RngCore + ?Sized>(rng: &mut R) -> SeqstampResult<Discriminator> {
    let mut bytes = [0u8; DISCRIMINATOR_LEN];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| SeqstampError::EntropyUnavailable(e.to_string()))?;
    Ok(Discriminator::synthetic(bytes))
}

/// Initial counter value: 2 random bytes, little-endian
pub fn random_seed<R: RngCore + ?Sized>(rng: &mut R) -> SeqstampResult<u32> {
    let mut bytes = [0u8; 2];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| SeqstampError::EntropyUnavailable(e.to_string()))?;
    Ok(u16::from_le_bytes(bytes) as u32)
}

/// Resolve a configured source into a concrete discriminator.
///
/// `lookup` supplies the hardware address for `DiscriminatorSource::Hardware`.
pub fn resolve_discriminator<R, F>(
    source: DiscriminatorSource,
    lookup: F,
    rng: &mut R,
) -> SeqstampResult<Discriminator>
where
    R: RngCore + ?Sized,
    F: FnOnce() -> Option<Discriminator>,
{
    match source {
        DiscriminatorSource::Fixed(d) => {
            let d = d.check_usable()?;
            tracing::info!(discriminator = %d, "using fixed discriminator");
            Ok(d)
        }
        DiscriminatorSource::Random => {
            let d = random_discriminator(rng)?;
            tracing::info!(discriminator = %d, "using random discriminator");
            Ok(d)
        }
        DiscriminatorSource::Hardware => match lookup() {
            Some(d) => {
                tracing::info!(discriminator = %d, "using hardware address as discriminator");
                Ok(d)
            }
            None => {
                let d = random_discriminator(rng)?;
                tracing::warn!(
                    discriminator = %d,
                    "no hardware address available, falling back to random discriminator"
                );
                Ok(d)
            }
        },
    }
}

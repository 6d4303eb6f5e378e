//! Identifier generator

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::OsRng;
use rand::RngCore;

use seqstamp_core::{Discriminator, SeqstampResult, UniqueTimestamp};

use crate::{hardware_address, random_seed, resolve_discriminator, GeneratorConfig};

/// Mints unique timestamps.
///
/// Holds a fixed discriminator and a sequence counter. Every call to
/// [`Generator::exact`] bumps the counter by one with a single atomic
/// add, so concurrent callers never see the same sequence value until the
/// counter wraps after 2^32 identifiers.
pub struct Generator {
    discriminator: Discriminator,
    sequence: AtomicU32,
}

impl Generator {
    /// Generator with the default config, drawing from the OS random source
    pub fn new() -> SeqstampResult<Self> {
        Self::with_config(&GeneratorConfig::default())
    }

    pub fn with_config(config: &GeneratorConfig) -> SeqstampResult<Self> {
        Self::with_config_and_rng(config, &mut OsRng)
    }

    /// Build from `config`, taking any randomness from `rng`
    pub fn with_config_and_rng<R: RngCore + ?Sized>(
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> SeqstampResult<Self> {
        let discriminator = resolve_discriminator(config.discriminator, hardware_address, rng)?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => random_seed(rng)?,
        };
        tracing::debug!(seed, "sequence counter seeded");

        Ok(Self::from_parts(discriminator, seed))
    }

    /// Deterministic generator; the first identifier gets sequence `seed + 1`
    pub const fn from_parts(discriminator: Discriminator, seed: u32) -> Self {
        Generator {
            discriminator,
            sequence: AtomicU32::new(seed),
        }
    }

    /// Fresh identifier for `timestamp`
    #[inline]
    pub fn exact(&self, timestamp: i64) -> UniqueTimestamp {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
        UniqueTimestamp::from_parts(timestamp, sequence, self.discriminator)
    }

    /// Fresh identifier for the current Unix time in seconds
    pub fn now(&self) -> UniqueTimestamp {
        self.exact(unix_seconds())
    }

    #[inline]
    pub fn min_bound(&self, timestamp: i64) -> UniqueTimestamp {
        UniqueTimestamp::min_bound(timestamp)
    }

    #[inline]
    pub fn max_bound(&self, timestamp: i64) -> UniqueTimestamp {
        UniqueTimestamp::max_bound(timestamp)
    }

    pub fn discriminator(&self) -> Discriminator {
        self.discriminator
    }

    /// Sequence handed out most recently (the seed if none yet)
    pub fn last_sequence(&self) -> u32 {
        self.sequence.load(Ordering::Relaxed)
    }
}

impl std::fmt::Debug for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Generator")
            .field("discriminator", &self.discriminator)
            .field("last_sequence", &self.last_sequence())
            .finish()
    }
}

/// Seconds since the Unix epoch, negative before it
pub fn unix_seconds() -> i64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

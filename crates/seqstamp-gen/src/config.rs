//! Generator configuration

use std::str::FromStr;

use seqstamp_core::{Discriminator, SeqstampError, SeqstampResult};

/// Environment variable read by [`GeneratorConfig::from_env`]
pub const DISCRIMINATOR_ENV: &str = "SEQSTAMP_DISCRIMINATOR";

/// Where a generator's discriminator comes from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DiscriminatorSource {
    /// First non-loopback interface with a hardware address; random if none.
    /// Helps attribute identifiers to a host, but processes on the same host
    /// share it.
    #[default]
    Hardware,
    /// Random bytes with the multicast bit set, distinct per generator
    Random,
    /// Caller-provided value
    Fixed(Discriminator),
}

impl FromStr for DiscriminatorSource {
    type Err = SeqstampError;

    /// Accepts `hardware`, `random` or 12 hex characters other than the
    /// reserved all-zero and all-ones values
    fn from_str(s: &str) -> SeqstampResult<Self> {
        match s.trim() {
            v if v.eq_ignore_ascii_case("hardware") => Ok(DiscriminatorSource::Hardware),
            v if v.eq_ignore_ascii_case("random") => Ok(DiscriminatorSource::Random),
            v => Discriminator::from_hex(v)?
                .check_usable()
                .map(DiscriminatorSource::Fixed),
        }
    }
}

/// Generator configuration
#[derive(Clone, Debug, Default)]
pub struct GeneratorConfig {
    /// Discriminator selection
    pub discriminator: DiscriminatorSource,
    /// Initial counter value; drawn from 2 random bytes when `None`
    pub seed: Option<u32>,
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_discriminator(mut self, source: DiscriminatorSource) -> Self {
        self.discriminator = source;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Default config, with the discriminator source overridden by
    /// `SEQSTAMP_DISCRIMINATOR` when set. Bad values are logged and ignored.
    pub fn from_env() -> Self {
        let config = Self::default();
        match std::env::var(DISCRIMINATOR_ENV) {
            Ok(raw) => config.apply_discriminator_override(&raw),
            Err(_) => config,
        }
    }

    fn apply_discriminator_override(self, raw: &str) -> Self {
        match raw.parse::<DiscriminatorSource>() {
            Ok(source) => self.with_discriminator(source),
            Err(e) => {
                tracing::warn!(
                    var = DISCRIMINATOR_ENV,
                    value = raw,
                    "ignoring invalid discriminator override: {}",
                    e
                );
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_from_str() {
        assert_eq!(
            "hardware".parse::<DiscriminatorSource>().unwrap(),
            DiscriminatorSource::Hardware
        );
        assert_eq!(
            " Random ".parse::<DiscriminatorSource>().unwrap(),
            DiscriminatorSource::Random
        );
        assert_eq!(
            "c42c0319bdbe".parse::<DiscriminatorSource>().unwrap(),
            DiscriminatorSource::Fixed(Discriminator::new([0xC4, 0x2C, 0x03, 0x19, 0xBD, 0xBE]))
        );
        assert!("c42c03".parse::<DiscriminatorSource>().is_err());
        assert!("mac".parse::<DiscriminatorSource>().is_err());
    }

    #[test]
    fn test_source_rejects_reserved() {
        for reserved in ["000000000000", "ffffffffffff", "FFFFFFFFFFFF"] {
            let err = reserved.parse::<DiscriminatorSource>().unwrap_err();
            assert!(err.to_string().contains("reserved"), "{}", err);
        }
    }

    #[test]
    fn test_builder() {
        let config = GeneratorConfig::new()
            .with_discriminator(DiscriminatorSource::Random)
            .with_seed(7);
        assert_eq!(config.discriminator, DiscriminatorSource::Random);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_override_keeps_default_on_error() {
        let config = GeneratorConfig::default().apply_discriminator_override("not-hex");
        assert_eq!(config.discriminator, DiscriminatorSource::Hardware);

        let config = GeneratorConfig::default().apply_discriminator_override("000000000000");
        assert_eq!(config.discriminator, DiscriminatorSource::Hardware);

        let config = GeneratorConfig::default().apply_discriminator_override("random");
        assert_eq!(config.discriminator, DiscriminatorSource::Random);
    }
}

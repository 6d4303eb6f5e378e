//! Fuzzing harness logic for seqstamp
//!
//! The `fuzz/` targets are thin wrappers around these checks so the same
//! invariants can run under `cargo test`.

use arbitrary::Arbitrary;

use seqstamp_core::{Discriminator, UniqueTimestamp, ENCODED_LEN, TIMESTAMP_MASK};

/// Structured input for the codec round trip
#[derive(Debug, Arbitrary)]
pub struct IdentifierInput {
    pub timestamp: i64,
    pub sequence: u32,
    pub discriminator: [u8; 6],
}

impl IdentifierInput {
    pub fn to_id(&self) -> UniqueTimestamp {
        UniqueTimestamp::from_parts(
            self.timestamp,
            self.sequence,
            Discriminator::new(self.discriminator),
        )
    }
}

/// Arbitrary text must never panic the parser. Anything it accepts must
/// re-encode to a string that parses back to the same value.
pub fn check_parse(data: &[u8]) {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(id) = UniqueTimestamp::parse(s) {
        let canonical = id.to_string();
        assert_eq!(canonical.len(), ENCODED_LEN);
        let again = UniqueTimestamp::parse(&canonical).expect("canonical form must parse");
        assert_eq!(again, id);
    }
}

/// Encoding is fixed-width and parsing recovers every encoded bit
pub fn check_roundtrip(input: &IdentifierInput) {
    let id = input.to_id();
    let s = id.to_string();
    assert_eq!(s.len(), ENCODED_LEN);

    let parsed = UniqueTimestamp::parse(&s).expect("encoded form must parse");
    assert_eq!(parsed.timestamp(), input.timestamp & TIMESTAMP_MASK);
    assert_eq!(parsed.sequence(), input.sequence);
    assert_eq!(parsed.discriminator().to_bytes(), input.discriminator);

    let (min, max) = UniqueTimestamp::bounds(input.timestamp);
    assert!(min.to_string() <= s && s <= max.to_string());
}

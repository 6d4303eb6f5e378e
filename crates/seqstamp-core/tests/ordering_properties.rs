//! Property tests for ordering and the canonical codec

use proptest::prelude::*;

use seqstamp_core::{Discriminator, UniqueTimestamp, ENCODED_LEN, TIMESTAMP_MASK};

fn arbitrary_discriminator() -> impl Strategy<Value = Discriminator> {
    prop::array::uniform6(any::<u8>()).prop_map(Discriminator::new)
}

fn arbitrary_id() -> impl Strategy<Value = UniqueTimestamp> {
    (any::<i64>(), any::<u32>(), arbitrary_discriminator())
        .prop_map(|(ts, seq, disc)| UniqueTimestamp::from_parts(ts, seq, disc))
}

/// Timestamps that stay inside the encoded 48-bit range
fn in_range_timestamp() -> impl Strategy<Value = i64> {
    0i64..TIMESTAMP_MASK
}

proptest! {
    #[test]
    fn encoding_is_always_fixed_width(id in arbitrary_id()) {
        let s = id.to_string();
        prop_assert_eq!(s.len(), ENCODED_LEN);
        prop_assert!(s
            .bytes()
            .all(|c| c == b'-' || c.is_ascii_digit() || (b'a'..=b'f').contains(&c)));
        prop_assert_eq!(s.as_bytes()[12], b'-');
        prop_assert_eq!(s.as_bytes()[21], b'-');
    }

    #[test]
    fn string_order_matches_value_order(a in arbitrary_id(), b in arbitrary_id()) {
        prop_assert_eq!(a.cmp(&b), a.to_string().cmp(&b.to_string()));
    }

    #[test]
    fn parse_recovers_every_field(
        ts in in_range_timestamp(),
        seq in any::<u32>(),
        disc in arbitrary_discriminator(),
    ) {
        let id = UniqueTimestamp::from_parts(ts, seq, disc);
        let parsed = UniqueTimestamp::parse(&id.to_string()).unwrap();
        prop_assert_eq!(parsed.timestamp(), ts);
        prop_assert_eq!(parsed.sequence(), seq);
        prop_assert_eq!(parsed.discriminator(), disc);
    }

    #[test]
    fn parse_recovers_truncated_timestamp(id in arbitrary_id()) {
        let parsed = UniqueTimestamp::parse(&id.to_string()).unwrap();
        prop_assert_eq!(parsed.timestamp(), id.timestamp() & TIMESTAMP_MASK);
        prop_assert_eq!(parsed, id);
    }

    #[test]
    fn bounds_sandwich_every_identifier(
        ts in in_range_timestamp(),
        seq in 1u32..u32::MAX,
        disc in arbitrary_discriminator(),
    ) {
        let id = UniqueTimestamp::from_parts(ts, seq, disc);
        let (min, max) = UniqueTimestamp::bounds(ts);
        prop_assert!(min.to_string() < id.to_string());
        prop_assert!(id.to_string() < max.to_string());
    }

    #[test]
    fn bounds_separate_adjacent_timestamps(
        ts in 0i64..TIMESTAMP_MASK - 1,
        seq in any::<u32>(),
        disc in arbitrary_discriminator(),
    ) {
        let now = UniqueTimestamp::from_parts(ts, seq, disc).to_string();
        let next = UniqueTimestamp::from_parts(ts + 1, seq, disc).to_string();
        prop_assert!(now < next);
        prop_assert!(next > UniqueTimestamp::max_bound(ts).to_string());
        prop_assert!(now < UniqueTimestamp::min_bound(ts + 1).to_string());
    }

    #[test]
    fn truncation_is_deterministic(id in arbitrary_id()) {
        let wrapped = UniqueTimestamp::from_parts(
            id.timestamp().wrapping_add(1 << 48),
            id.sequence(),
            id.discriminator(),
        );
        prop_assert_eq!(&id.to_string()[..12], &wrapped.to_string()[..12]);
    }

    #[test]
    fn parser_never_panics(s in "\\PC*") {
        let _ = UniqueTimestamp::parse(&s);
    }

    #[test]
    fn parser_rejects_wrong_separator_count(
        fields in prop::collection::vec("[0-9a-f]{1,12}", 0..6usize)
            .prop_filter("exactly three fields is the valid shape", |f| f.len() != 3),
    ) {
        let s = fields.join("-");
        prop_assert!(UniqueTimestamp::parse(&s).is_err());
    }
}

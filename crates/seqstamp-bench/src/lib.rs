//! Shared fixtures for seqstamp benchmarks

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use seqstamp_core::{Discriminator, UniqueTimestamp};
use seqstamp_gen::Generator;

/// Fixed discriminator so runs are comparable
pub const BENCH_DISCRIMINATOR: Discriminator =
    Discriminator::new([0x02, 0x42, 0xAC, 0x11, 0x00, 0x02]);

/// Deterministic generator seeded at zero
pub fn bench_generator() -> Generator {
    Generator::from_parts(BENCH_DISCRIMINATOR, 0)
}

/// `count` identifiers with random parts, reproducible across runs
pub fn sample_ids(count: usize) -> Vec<UniqueTimestamp> {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    (0..count)
        .map(|_| {
            UniqueTimestamp::from_parts(
                rng.gen_range(0..0x0000_FFFF_FFFF_FFFF),
                rng.gen(),
                Discriminator::new(rng.gen()),
            )
        })
        .collect()
}

/// Canonical strings for [`sample_ids`]
pub fn sample_strings(count: usize) -> Vec<String> {
    sample_ids(count).into_iter().map(String::from).collect()
}

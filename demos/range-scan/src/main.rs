//! Range scan demo
//!
//! Stores events in a sorted map keyed by the canonical identifier string,
//! the way a wide-column store would, then pulls out every event for a
//! window of seconds using min/max bound keys.

use std::collections::BTreeMap;

use seqstamp_core::UniqueTimestamp;
use seqstamp_gen::{init_global, unix_seconds, DiscriminatorSource, GeneratorConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GeneratorConfig::from_env();
    let generator = match init_global(&config) {
        Ok(g) => g,
        Err(e) => {
            tracing::error!("cannot start generator: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(?generator, "generator ready");

    // Several events share each second; their keys still differ and sort.
    let start = unix_seconds();
    let mut store: BTreeMap<String, String> = BTreeMap::new();
    for second in 0..5 {
        for n in 0..3 {
            let key = generator.exact(start + second).to_string();
            store.insert(key, format!("event {} at +{}s", n, second));
        }
    }
    tracing::info!(rows = store.len(), "store populated");

    for (key, value) in &store {
        println!("{}  {}", key, value);
    }

    // Inclusive window [start + 1, start + 3]
    let lower = UniqueTimestamp::min_bound(start + 1).to_string();
    let upper = UniqueTimestamp::max_bound(start + 3).to_string();
    println!("\nscan {} ..= {}", lower, upper);

    let hits: Vec<_> = store.range(lower..=upper).collect();
    for (key, value) in &hits {
        println!("{}  {}", key, value);
    }
    tracing::info!(hits = hits.len(), "range scan complete");

    // Keys parse back to their parts
    if let Some((key, _)) = hits.first() {
        match key.parse::<UniqueTimestamp>() {
            Ok(id) => println!(
                "\nfirst hit: timestamp={} sequence={} discriminator={}",
                id.timestamp(),
                id.sequence(),
                id.discriminator()
            ),
            Err(e) => tracing::error!("stored key does not parse: {}", e),
        }
    }

    if config.discriminator == DiscriminatorSource::Hardware {
        println!("\nhint: SEQSTAMP_DISCRIMINATOR=random gives each process its own discriminator");
    }
}

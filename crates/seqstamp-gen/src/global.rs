//! Process-global generator
//!
//! Initialized once, on first use, from [`GeneratorConfig::from_env`]. An
//! application that wants a different config calls [`init_global`] before
//! anything else touches the global.

use once_cell::sync::OnceCell;

use seqstamp_core::{SeqstampResult, UniqueTimestamp};

use crate::{Generator, GeneratorConfig};

static GLOBAL: OnceCell<Generator> = OnceCell::new();

/// Initialize the global generator from `config`.
///
/// Returns the existing generator unchanged if it was already initialized.
pub fn init_global(config: &GeneratorConfig) -> SeqstampResult<&'static Generator> {
    let mut fresh = false;
    let generator = GLOBAL.get_or_try_init(|| {
        fresh = true;
        Generator::with_config(config)
    })?;
    if !fresh {
        tracing::warn!("global generator already initialized, config ignored");
    }
    Ok(generator)
}

/// The global generator.
///
/// # Panics
///
/// Panics on first use if the OS random source fails. Identifiers minted with
/// a predictable discriminator or seed would not be unique, so there is no
/// fallback.
pub fn global() -> &'static Generator {
    GLOBAL.get_or_init(|| match Generator::with_config(&GeneratorConfig::from_env()) {
        Ok(generator) => generator,
        Err(e) => panic!("seqstamp: cannot initialize global generator: {}", e),
    })
}

/// Fresh identifier for `timestamp` from the global generator
#[inline]
pub fn exact(timestamp: i64) -> UniqueTimestamp {
    global().exact(timestamp)
}

/// Fresh identifier for the current Unix time from the global generator
pub fn now() -> UniqueTimestamp {
    global().now()
}

/// Same as [`UniqueTimestamp::min_bound`]; never touches the global state
#[inline]
pub fn min_bound(timestamp: i64) -> UniqueTimestamp {
    UniqueTimestamp::min_bound(timestamp)
}

/// Same as [`UniqueTimestamp::max_bound`]; never touches the global state
#[inline]
pub fn max_bound(timestamp: i64) -> UniqueTimestamp {
    UniqueTimestamp::max_bound(timestamp)
}

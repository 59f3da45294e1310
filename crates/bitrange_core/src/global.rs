//! Process-wide and thread-local convenience generators.
//!
//! These are distinct from generators the caller constructs explicitly:
//!
//! - The **default generator** is one [`SyncGenerator`] shared by the whole
//!   process. It is initialised on first use from [`GeneratorConfig::from_env`]:
//!   `BITRANGE_SEED` fixes the stream, otherwise it is seeded from OS
//!   entropy. `BITRANGE_SOURCE` selects the engine. Every call takes the lock.
//! - The **thread generator** ([`with_thread_rng`]) is one entropy-seeded
//!   [`Generator`] per thread and never locks.
//!
//! ```rust
//! use bitrange_core::global;
//!
//! let roll = global::range(1_u32, 7).unwrap();
//! assert!((1..7).contains(&roll));
//!
//! let total: u64 = global::with_thread_rng(|rng| {
//!     (0..10).map(|_| rng.range_u64(0, 100).unwrap()).sum()
//! });
//! assert!(total < 1000);
//! ```

use std::cell::RefCell;
use std::sync::OnceLock;

use crate::config::GeneratorConfig;
use crate::error::SampleError;
use crate::generator::Generator;
use crate::sampler::SampleRange;
use crate::source::{DefaultSource, RandSource};
use crate::sync::SyncGenerator;

static DEFAULT: OnceLock<SyncGenerator<DefaultSource>> = OnceLock::new();

thread_local! {
    static THREAD_RNG: RefCell<Generator<DefaultSource>> =
        RefCell::new(Generator::new(DefaultSource::Std(RandSource::from_entropy())));
}

/// Returns the process-wide default generator, initialising it on first use.
pub fn default_generator() -> &'static SyncGenerator<DefaultSource> {
    DEFAULT.get_or_init(|| {
        let config = GeneratorConfig::from_env().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "malformed BITRANGE_* variables, using defaults");
            GeneratorConfig::default()
        });
        tracing::debug!(
            seeded = config.seed().is_some(),
            source = %config.source(),
            "initialising default generator"
        );
        SyncGenerator::from_generator(config.build_generator())
    })
}

/// Runs `f` on the default generator with its lock held.
pub fn with_default<R>(f: impl FnOnce(&mut Generator<DefaultSource>) -> R) -> R {
    default_generator().with(f)
}

/// Runs `f` on this thread's generator.
///
/// # Panics
///
/// Panics if `f` itself calls `with_thread_rng` (the generator is already borrowed).
pub fn with_thread_rng<R>(f: impl FnOnce(&mut Generator<DefaultSource>) -> R) -> R {
    THREAD_RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Reseeds the default generator.
pub fn seed(seed: i64) {
    default_generator().seed(seed);
}

/// Non-negative value in `[0, 2^63)` from the default generator.
pub fn int63() -> i64 {
    default_generator().int63()
}

/// Uniform 64-bit value from the default generator.
pub fn uint64() -> u64 {
    default_generator().uint64()
}

/// Uniform `f64` in `[0, 1)` from the default generator.
pub fn unit_f64() -> f64 {
    default_generator().unit_f64()
}

/// Draws one value uniformly from `[lo, hi)` with the default generator.
///
/// # Errors
///
/// [`SampleError::InvalidRange`] when `hi < lo`.
pub fn range<T: SampleRange>(lo: T, hi: T) -> Result<T, SampleError> {
    default_generator().range(lo, hi)
}

/// Fills `out` from `[lo, hi)` with the default generator.
///
/// # Errors
///
/// [`SampleError::InvalidRange`] when `hi < lo`.
pub fn fill_range<T: SampleRange>(out: &mut [T], lo: T, hi: T) -> Result<(), SampleError> {
    default_generator().fill_range(out, lo, hi)
}

/// Shuffles a slice with the default generator.
pub fn shuffle<T>(items: &mut [T]) {
    default_generator().shuffle(items);
}

/// Returns `true` with probability `p`, using the default generator.
///
/// # Errors
///
/// [`SampleError::InvalidProbability`] when `p` is outside `[0, 1]`.
pub fn flip_coin(p: f64) -> Result<bool, SampleError> {
    default_generator().flip_coin(p)
}

/// Returns `0..n` in random order, using the default generator.
pub fn permutation(n: usize) -> Vec<usize> {
    default_generator().permutation(n)
}

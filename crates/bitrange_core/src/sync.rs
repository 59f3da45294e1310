//! Shared generator guarded by a mutex.
//!
//! This is the second deployment mode: one stream shared by many threads,
//! with the lock held for the duration of a draw (or of a batch, via
//! [`SyncGenerator::with`]). For maximum throughput give each thread its
//! own [`Generator`] instead.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::SampleError;
use crate::generator::Generator;
use crate::sampler::SampleRange;
use crate::source::BitSource;

/// A [`Generator`] that can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use bitrange_core::{RandSource, SyncGenerator};
/// use rand::rngs::StdRng;
///
/// let shared = Arc::new(SyncGenerator::new(RandSource::<StdRng>::from_seed(7)));
/// let handles: Vec<_> = (0..4)
///     .map(|_| {
///         let shared = Arc::clone(&shared);
///         std::thread::spawn(move || shared.range(0_u32, 10).unwrap())
///     })
///     .collect();
/// for handle in handles {
///     assert!(handle.join().unwrap() < 10);
/// }
/// ```
#[derive(Debug)]
pub struct SyncGenerator<S> {
    inner: Mutex<Generator<S>>,
}

impl<S: BitSource> SyncGenerator<S> {
    /// Wraps a fresh generator over `source`.
    pub fn new(source: S) -> Self {
        Self::from_generator(Generator::new(source))
    }

    /// Wraps an existing generator.
    pub fn from_generator(generator: Generator<S>) -> Self {
        Self {
            inner: Mutex::new(generator),
        }
    }

    /// Acquires the lock.
    ///
    /// A poisoned lock is recovered: the generator holds no invariant that a
    /// panicking caller could have broken halfway.
    fn lock(&self) -> MutexGuard<'_, Generator<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` with the lock held, so a batch of draws forms one contiguous
    /// slice of the shared stream.
    pub fn with<R>(&self, f: impl FnOnce(&mut Generator<S>) -> R) -> R {
        f(&mut self.lock())
    }

    /// Reseeds the shared stream.
    ///
    /// Not atomic with respect to other threads' draws; callers needing a
    /// deterministic restart must serialise reseeding against all readers.
    pub fn seed(&self, seed: i64) {
        self.lock().seed(seed);
    }

    /// Non-negative value in `[0, 2^63)`.
    pub fn int63(&self) -> i64 {
        self.lock().int63()
    }

    /// Uniform 64-bit value.
    pub fn uint64(&self) -> u64 {
        self.lock().uint64()
    }

    /// Uniform `f64` in `[0, 1)`.
    pub fn unit_f64(&self) -> f64 {
        self.lock().unit_f64()
    }

    /// Draws one value uniformly from `[lo, hi)`.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `hi < lo`.
    pub fn range<T: SampleRange>(&self, lo: T, hi: T) -> Result<T, SampleError> {
        self.lock().range(lo, hi)
    }

    /// Fills `out` with draws from `[lo, hi)` under a single lock acquisition.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `hi < lo`.
    pub fn fill_range<T: SampleRange>(
        &self,
        out: &mut [T],
        lo: T,
        hi: T,
    ) -> Result<(), SampleError> {
        self.lock().fill_range(out, lo, hi)
    }

    /// Shuffles a slice under a single lock acquisition.
    pub fn shuffle<T>(&self, items: &mut [T]) {
        self.lock().shuffle(items);
    }

    /// Returns `true` with probability `p`.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidProbability`] when `p` is outside `[0, 1]`.
    pub fn flip_coin(&self, p: f64) -> Result<bool, SampleError> {
        self.lock().flip_coin(p)
    }

    /// Returns `0..n` in uniformly random order.
    pub fn permutation(&self, n: usize) -> Vec<usize> {
        self.lock().permutation(n)
    }

    /// Unwraps the generator.
    pub fn into_inner(self) -> Generator<S> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

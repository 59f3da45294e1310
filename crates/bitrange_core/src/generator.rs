//! The [`Generator`] decorator.
//!
//! A generator exclusively owns one [`BitSource`] and derives every bounded
//! scalar, batch, shuffle and coin-flip operation from it. It adds no state
//! of its own, so two generators over identically seeded sources produce
//! identical streams.

use rand::RngCore;
use rand_distr::{Distribution, Exp1, StandardNormal};

use crate::error::SampleError;
use crate::fill::fill_range;
use crate::sampler::{unit_f32, unit_f64, SampleRange};
use crate::scalar;
use crate::shuffle::{shuffle_slice, shuffle_swap, Swap, SwapFn};
use crate::source::BitSource;

/// Bounded-range generator over an interchangeable bit source.
///
/// Not safe for concurrent use: every draw advances the source. Either give
/// each thread its own generator or share a
/// [`SyncGenerator`](crate::SyncGenerator).
///
/// # Examples
///
/// ```rust
/// use bitrange_core::{Generator, RandSource};
/// use rand::rngs::StdRng;
///
/// let mut rng = Generator::new(RandSource::<StdRng>::from_seed(9527));
///
/// let die = rng.range_i64(1, 7).unwrap();
/// assert!((1..7).contains(&die));
///
/// let mut weights = [0.0_f64; 16];
/// rng.fill_f64(&mut weights, 0.5, 1.5).unwrap();
///
/// let mut deck: Vec<u32> = (0..52).collect();
/// rng.shuffle(&mut deck);
///
/// assert!(rng.flip_coin(1.0).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Generator<S> {
    source: S,
}

macro_rules! typed_operations {
    ($($ty:ty => $range:ident, $fill:ident, $shuffle:ident;)*) => {$(
        #[doc = concat!("Draws one `", stringify!($ty), "` uniformly from `[lo, hi)`.")]
        ///
        /// # Errors
        ///
        /// [`SampleError::InvalidRange`] when `hi < lo`.
        #[inline]
        pub fn $range(&mut self, lo: $ty, hi: $ty) -> Result<$ty, SampleError> {
            self.range(lo, hi)
        }

        #[doc = concat!("Fills a `", stringify!($ty), "` slice with draws from `[lo, hi)`.")]
        ///
        /// # Errors
        ///
        /// [`SampleError::InvalidRange`] when `hi < lo`.
        #[inline]
        pub fn $fill(&mut self, out: &mut [$ty], lo: $ty, hi: $ty) -> Result<(), SampleError> {
            self.fill_range(out, lo, hi)
        }

        #[doc = concat!("Shuffles a `", stringify!($ty), "` slice in place.")]
        #[inline]
        pub fn $shuffle(&mut self, items: &mut [$ty]) {
            self.shuffle(items);
        }
    )*};
}

impl<S: BitSource> Generator<S> {
    /// Binds a generator to `source`.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reseeds the underlying source in place.
    pub fn seed(&mut self, seed: i64) {
        tracing::debug!(seed, "reseeding generator");
        self.source.seed(seed);
    }

    /// Returns the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the underlying source mutably.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Unwraps the generator, returning its source.
    pub fn into_source(self) -> S {
        self.source
    }

    /// Non-negative value in `[0, 2^63)`.
    #[inline]
    pub fn int63(&mut self) -> i64 {
        self.source.int63()
    }

    /// Non-negative value in `[0, 2^31)`.
    #[inline]
    pub fn int31(&mut self) -> i32 {
        self.source.int31()
    }

    /// Uniform 32-bit value.
    #[inline]
    pub fn uint32(&mut self) -> u32 {
        self.source.uint32()
    }

    /// Uniform 64-bit value.
    #[inline]
    pub fn uint64(&mut self) -> u64 {
        self.source.uint64()
    }

    /// Uniform value over the whole `i64` domain, negatives included.
    #[inline]
    pub fn int64(&mut self) -> i64 {
        self.source.uint64() as i64
    }

    /// Uniform `f64` in `[0, 1)`.
    #[inline]
    pub fn unit_f64(&mut self) -> f64 {
        unit_f64(&mut self.source)
    }

    /// Uniform `f32` in `[0, 1)`.
    #[inline]
    pub fn unit_f32(&mut self) -> f32 {
        unit_f32(&mut self.source)
    }

    /// Standard normal variate (mean 0, standard deviation 1).
    #[inline]
    pub fn normal_f64(&mut self) -> f64 {
        StandardNormal.sample(self)
    }

    /// Exponential variate with rate 1.
    #[inline]
    pub fn exp_f64(&mut self) -> f64 {
        Exp1.sample(self)
    }

    /// Value in `[0, n)` from the 63-bit path.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `n <= 0`.
    pub fn int63n(&mut self, n: i64) -> Result<i64, SampleError> {
        if n <= 0 {
            return Err(SampleError::invalid_range(0, n));
        }
        Ok(i64::sample_unchecked(&mut self.source, 0, n))
    }

    /// Value in `[0, n)` from the 31-bit path.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `n <= 0`.
    pub fn int31n(&mut self, n: i32) -> Result<i32, SampleError> {
        if n <= 0 {
            return Err(SampleError::invalid_range(0, n));
        }
        Ok(i32::sample_unchecked(&mut self.source, 0, n))
    }

    /// Index in `[0, n)`.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `n == 0`.
    pub fn index(&mut self, n: usize) -> Result<usize, SampleError> {
        if n == 0 {
            return Err(SampleError::invalid_range(0, n));
        }
        Ok(usize::sample_unchecked(&mut self.source, 0, n))
    }

    /// Draws one value uniformly from `[lo, hi)`.
    ///
    /// `lo == hi` returns `lo` without consuming entropy.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `hi < lo` (or a float bound is not finite).
    #[inline]
    pub fn range<T: SampleRange>(&mut self, lo: T, hi: T) -> Result<T, SampleError> {
        T::sample(&mut self.source, lo, hi)
    }

    /// Overwrites every element of `out` with a draw from `[lo, hi)`, in index order.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `hi < lo`; `out` is left untouched.
    #[inline]
    pub fn fill_range<T: SampleRange>(
        &mut self,
        out: &mut [T],
        lo: T,
        hi: T,
    ) -> Result<(), SampleError> {
        fill_range(&mut self.source, lo, hi, out)
    }

    /// Shuffles a slice in place.
    #[inline]
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        shuffle_slice(&mut self.source, items);
    }

    /// Shuffles any sequence exposing the [`Swap`] capability.
    #[inline]
    pub fn shuffle_swap<W: Swap + ?Sized>(&mut self, seq: &mut W) {
        shuffle_swap(&mut self.source, seq);
    }

    /// Shuffles `n` positions through a caller-supplied swap function.
    #[inline]
    pub fn shuffle_with<F: FnMut(usize, usize)>(&mut self, n: usize, swap: F) {
        shuffle_swap(&mut self.source, &mut SwapFn::new(n, swap));
    }

    /// Returns `true` with probability `p`.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidProbability`] when `p` is outside `[0, 1]`.
    #[inline]
    pub fn flip_coin(&mut self, p: f64) -> Result<bool, SampleError> {
        scalar::flip_coin(&mut self.source, p)
    }

    /// Returns `0..n` in uniformly random order.
    #[inline]
    pub fn permutation(&mut self, n: usize) -> Vec<usize> {
        scalar::permutation(&mut self.source, n)
    }

    typed_operations! {
        i32 => range_i32, fill_i32, shuffle_i32;
        i64 => range_i64, fill_i64, shuffle_i64;
        u32 => range_u32, fill_u32, shuffle_u32;
        u64 => range_u64, fill_u64, shuffle_u64;
        f32 => range_f32, fill_f32, shuffle_f32;
        f64 => range_f64, fill_f64, shuffle_f64;
    }
}

/// Byte-stream and `rand` interoperability: a generator is itself an RNG.
impl<S: BitSource> RngCore for Generator<S> {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.source.uint32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.source.uint64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = self.source.uint64().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

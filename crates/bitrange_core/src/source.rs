//! Bit source capability and the `rand` engine adapters.
//!
//! A [`BitSource`] is the only thing the rest of the crate knows about the
//! underlying generator: uniform 63-bit and 64-bit draws plus a reseed.
//! Narrower draws are derived here by bit-width reduction of one 63-bit
//! draw, so every accepted 32-bit sample costs exactly one source call.

use rand::rngs::{SmallRng, StdRng};
use rand::{RngCore, SeedableRng};

/// Mask selecting the low 63 bits of a 64-bit word.
pub const INT63_MASK: u64 = (1 << 63) - 1;

/// Uniform raw-integer generator with reseed semantics.
///
/// Implementors only promise uniform output and that `seed(s)` restarts a
/// reproducible stream. No particular algorithm is assumed.
pub trait BitSource {
    /// Returns a uniformly distributed non-negative value in `[0, 2^63)`.
    fn int63(&mut self) -> i64;

    /// Returns a uniformly distributed 64-bit value.
    ///
    /// The default composes two [`int63`](Self::int63) draws for sources
    /// that only produce 63 bits natively.
    fn uint64(&mut self) -> u64 {
        let low = self.int63() as u64;
        let high = self.int63() as u64;
        (low >> 31) | (high << 32)
    }

    /// Restarts the stream deterministically from `seed`.
    fn seed(&mut self, seed: i64);

    /// Returns a uniform value in `[0, 2^31)` from the top bits of one 63-bit draw.
    #[inline]
    fn int31(&mut self) -> i32 {
        (self.int63() >> 32) as i32
    }

    /// Returns a uniform 32-bit value from the top bits of one 63-bit draw.
    #[inline]
    fn uint32(&mut self) -> u32 {
        (self.int63() >> 31) as u32
    }
}

impl<S: BitSource + ?Sized> BitSource for &mut S {
    #[inline]
    fn int63(&mut self) -> i64 {
        (**self).int63()
    }

    #[inline]
    fn uint64(&mut self) -> u64 {
        (**self).uint64()
    }

    fn seed(&mut self, seed: i64) {
        (**self).seed(seed);
    }

    #[inline]
    fn int31(&mut self) -> i32 {
        (**self).int31()
    }

    #[inline]
    fn uint32(&mut self) -> u32 {
        (**self).uint32()
    }
}

impl<S: BitSource + ?Sized> BitSource for Box<S> {
    #[inline]
    fn int63(&mut self) -> i64 {
        (**self).int63()
    }

    #[inline]
    fn uint64(&mut self) -> u64 {
        (**self).uint64()
    }

    fn seed(&mut self, seed: i64) {
        (**self).seed(seed);
    }

    #[inline]
    fn int31(&mut self) -> i32 {
        (**self).int31()
    }

    #[inline]
    fn uint32(&mut self) -> u32 {
        (**self).uint32()
    }
}

/// Adapter exposing any seedable `rand` engine as a [`BitSource`].
///
/// # Examples
///
/// ```rust
/// use bitrange_core::{BitSource, RandSource};
/// use rand::rngs::StdRng;
///
/// let mut a = RandSource::<StdRng>::from_seed(42);
/// let mut b = RandSource::<StdRng>::from_seed(42);
/// assert_eq!(a.int63(), b.int63());
/// assert!(a.int63() >= 0);
/// ```
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    inner: R,
}

impl<R: RngCore + SeedableRng> RandSource<R> {
    /// Creates a source whose stream is fixed by `seed`.
    pub fn from_seed(seed: i64) -> Self {
        Self {
            inner: R::seed_from_u64(seed as u64),
        }
    }

    /// Creates a source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: R::from_entropy(),
        }
    }
}

impl<R> RandSource<R> {
    /// Wraps an already constructed engine.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped engine.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: RngCore + SeedableRng> BitSource for RandSource<R> {
    #[inline]
    fn int63(&mut self) -> i64 {
        (self.inner.next_u64() >> 1) as i64
    }

    #[inline]
    fn uint64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn seed(&mut self, seed: i64) {
        self.inner = R::seed_from_u64(seed as u64);
    }
}

/// Engine behind configuration-built and process-wide generators.
///
/// See [`SourceKind`](crate::SourceKind) for how the variant is chosen.
#[derive(Debug, Clone)]
pub enum DefaultSource {
    /// `rand`'s standard engine.
    Std(RandSource<StdRng>),
    /// `rand`'s small, fast, non-portable engine.
    Small(RandSource<SmallRng>),
}

impl BitSource for DefaultSource {
    #[inline]
    fn int63(&mut self) -> i64 {
        match self {
            Self::Std(source) => source.int63(),
            Self::Small(source) => source.int63(),
        }
    }

    #[inline]
    fn uint64(&mut self) -> u64 {
        match self {
            Self::Std(source) => source.uint64(),
            Self::Small(source) => source.uint64(),
        }
    }

    fn seed(&mut self, seed: i64) {
        match self {
            Self::Std(source) => source.seed(seed),
            Self::Small(source) => source.seed(seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed list of 63-bit values.
    struct Replay {
        values: Vec<i64>,
        index: usize,
    }

    impl BitSource for Replay {
        fn int63(&mut self) -> i64 {
            let v = self.values[self.index];
            self.index += 1;
            v
        }

        fn seed(&mut self, _seed: i64) {
            self.index = 0;
        }
    }

    #[test]
    fn test_default_uint64_composes_two_draws() {
        let mut source = Replay {
            values: vec![INT63_MASK as i64, 0],
            index: 0,
        };
        // low contributes its top 32 bits, high contributes nothing
        assert_eq!(source.uint64(), INT63_MASK >> 31);
        assert_eq!(source.index, 2);
    }

    #[test]
    fn test_width_reductions_take_top_bits() {
        let top = 0x7654_3210_FEDC_BA98_i64;
        let mut source = Replay {
            values: vec![top, top],
            index: 0,
        };
        assert_eq!(source.int31(), (top >> 32) as i32);
        assert_eq!(source.uint32(), (top >> 31) as u32);
    }

    #[test]
    fn test_rand_source_reseed_restarts_stream() {
        let mut source = RandSource::<StdRng>::from_seed(7);
        let first: Vec<i64> = (0..5).map(|_| source.int63()).collect();
        source.seed(7);
        let again: Vec<i64> = (0..5).map(|_| source.int63()).collect();
        assert_eq!(first, again);
        assert!(first.iter().all(|&v| v >= 0));
    }

    #[test]
    fn test_default_source_variants_are_seedable() {
        let mut std_source = DefaultSource::Std(RandSource::from_seed(11));
        let mut small_source = DefaultSource::Small(RandSource::from_seed(11));
        let a = std_source.uint64();
        let b = small_source.uint64();
        std_source.seed(11);
        small_source.seed(11);
        assert_eq!(std_source.uint64(), a);
        assert_eq!(small_source.uint64(), b);
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut boxed: Box<dyn BitSource> = Box::new(RandSource::<StdRng>::from_seed(3));
        let mut plain = RandSource::<StdRng>::from_seed(3);
        assert_eq!(boxed.int63(), plain.int63());
        assert_eq!(boxed.uint64(), plain.uint64());
    }

    /// Source with its own narrow draws taken from the low bits.
    struct LowBits {
        state: u64,
    }

    impl BitSource for LowBits {
        fn int63(&mut self) -> i64 {
            self.state = self
                .state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (self.state >> 1) as i64
        }

        fn seed(&mut self, seed: i64) {
            self.state = seed as u64;
        }

        fn int31(&mut self) -> i32 {
            (self.int63() & 0x7fff_ffff) as i32
        }

        fn uint32(&mut self) -> u32 {
            self.int63() as u32
        }
    }

    fn narrow_draws<T: BitSource>(mut source: T) -> (i32, u32) {
        (source.int31(), source.uint32())
    }

    #[test]
    fn test_forwarding_keeps_narrow_overrides() {
        let direct = narrow_draws(LowBits { state: 17 });

        let mut borrowed = LowBits { state: 17 };
        assert_eq!(narrow_draws(&mut borrowed), direct);

        let boxed: Box<dyn BitSource> = Box::new(LowBits { state: 17 });
        assert_eq!(narrow_draws(boxed), direct);

        // every path returns the low-bit override, not the top-bit default
        let mut reference = LowBits { state: 17 };
        assert_eq!(direct.0, (reference.int63() & 0x7fff_ffff) as i32);
    }
}

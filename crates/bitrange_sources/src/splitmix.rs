//! SplitMix64 (Steele, Lea & Flood).

use bitrange_core::BitSource;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Single-word engine with a full 2^64 period.
///
/// Cheap to construct, which makes it the usual choice for one generator
/// per worker thread, and for expanding one seed into many.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::BitSource;
/// use bitrange_sources::SplitMix64;
///
/// let mut sm = SplitMix64::new(1234567);
/// assert_eq!(sm.uint64(), 6457827717110365317);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Creates an engine whose state starts at `seed`.
    pub fn new(seed: i64) -> Self {
        Self { state: seed as u64 }
    }

    /// Returns the next seed from this stream, for seeding other generators.
    #[inline]
    pub fn next_seed(&mut self) -> i64 {
        self.uint64() as i64
    }
}

impl BitSource for SplitMix64 {
    #[inline]
    fn int63(&mut self) -> i64 {
        (self.uint64() >> 1) as i64
    }

    #[inline]
    fn uint64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn seed(&mut self, seed: i64) {
        self.state = seed as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_outputs() {
        let mut sm = SplitMix64::new(1_234_567);
        assert_eq!(sm.uint64(), 6_457_827_717_110_365_317);
        assert_eq!(sm.uint64(), 3_203_168_211_198_807_973);
        assert_eq!(sm.uint64(), 9_817_491_932_198_370_423);
    }

    #[test]
    fn test_int63_is_non_negative() {
        let mut sm = SplitMix64::new(-1);
        for _ in 0..1000 {
            assert!(sm.int63() >= 0);
        }
    }

    #[test]
    fn test_seed_restarts() {
        let mut sm = SplitMix64::new(9);
        let a = sm.next_seed();
        sm.seed(9);
        assert_eq!(sm.next_seed(), a);
    }
}

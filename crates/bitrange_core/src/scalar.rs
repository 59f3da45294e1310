//! Scalar utilities built on the sampler and the shuffle engine.

use crate::error::SampleError;
use crate::sampler::unit_f64;
use crate::shuffle::shuffle_slice;
use crate::source::BitSource;

/// Returns `true` with probability `p`.
///
/// Always consumes exactly one unit draw, shared with the float range
/// sampler, even for `p == 0` or `p == 1`. Since the draw lies in `[0, 1)`,
/// `p == 1` is true on every call and `p == 0` never is.
///
/// # Errors
///
/// [`SampleError::InvalidProbability`] when `p` is outside `[0, 1]` or NaN.
pub fn flip_coin<S: BitSource + ?Sized>(source: &mut S, p: f64) -> Result<bool, SampleError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(SampleError::InvalidProbability(p));
    }
    Ok(unit_f64(source) < p)
}

/// Returns `0..n` in uniformly random order.
pub fn permutation<S: BitSource + ?Sized>(source: &mut S, n: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    shuffle_slice(source, &mut order);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RandSource;
    use rand::rngs::StdRng;

    #[test]
    fn test_flip_coin_extremes() {
        let mut source = RandSource::<StdRng>::from_seed(17);
        for _ in 0..10_000 {
            assert!(!flip_coin(&mut source, 0.0).unwrap());
            assert!(flip_coin(&mut source, 1.0).unwrap());
        }
    }

    #[test]
    fn test_flip_coin_rejects_bad_probability() {
        let mut source = RandSource::<StdRng>::from_seed(17);
        let mut reference = RandSource::<StdRng>::from_seed(17);
        assert_eq!(
            flip_coin(&mut source, -0.1),
            Err(SampleError::InvalidProbability(-0.1))
        );
        assert!(flip_coin(&mut source, 1.000_001).is_err());
        assert!(flip_coin(&mut source, f64::NAN).is_err());
        assert_eq!(source.int63(), reference.int63());
    }

    #[test]
    fn test_flip_coin_frequency() {
        let mut source = RandSource::<StdRng>::from_seed(3);
        let trials = 100_000;
        let heads = (0..trials)
            .filter(|_| flip_coin(&mut source, 0.3).unwrap())
            .count();
        let rate = heads as f64 / trials as f64;
        approx::assert_abs_diff_eq!(rate, 0.3, epsilon = 0.01);
    }

    #[test]
    fn test_permutation_contains_each_index_once() {
        let mut source = RandSource::<StdRng>::from_seed(21);
        let mut perm = permutation(&mut source, 100);
        perm.sort_unstable();
        assert_eq!(perm, (0..100).collect::<Vec<_>>());
        assert!(permutation(&mut source, 0).is_empty());
        assert_eq!(permutation(&mut source, 1), vec![0]);
    }
}

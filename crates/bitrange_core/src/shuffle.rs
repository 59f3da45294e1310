//! Shuffle Engine: in-place Fisher–Yates over an abstract swap capability.
//!
//! There is exactly one Fisher–Yates loop, [`shuffle_swap`]. Slices, parallel
//! slices and closure-driven sequences all reach it through the [`Swap`]
//! trait, so every variant consumes entropy in the same pattern for the same
//! length: for `i` from `n - 1` down to `1`, one draw of `j` from `[0, i + 1)`
//! through the `u64` range sampler, then `swap(i, j)`.

use crate::error::SampleError;
use crate::sampler::SampleRange;
use crate::source::BitSource;

/// A fixed-length sequence that can exchange two of its positions.
pub trait Swap {
    /// Number of positions in the sequence.
    fn len(&self) -> usize;

    /// Exchanges the elements at positions `a` and `b`.
    fn swap(&mut self, a: usize, b: usize);

    /// Returns `true` when the sequence has no positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Swap for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b);
    }
}

/// Swap capability backed by a closure, for sequences the engine cannot see.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::{shuffle_swap, RandSource, SwapFn};
/// use rand::rngs::StdRng;
///
/// let mut keys = vec!['a', 'b', 'c', 'd'];
/// let mut source = RandSource::<StdRng>::from_seed(1);
/// shuffle_swap(&mut source, &mut SwapFn::new(keys.len(), |a, b| keys.swap(a, b)));
/// keys.sort();
/// assert_eq!(keys, ['a', 'b', 'c', 'd']);
/// ```
pub struct SwapFn<F> {
    len: usize,
    swap: F,
}

impl<F: FnMut(usize, usize)> SwapFn<F> {
    /// Binds `swap` to a sequence of `len` positions.
    pub fn new(len: usize, swap: F) -> Self {
        Self { len, swap }
    }
}

impl<F: FnMut(usize, usize)> Swap for SwapFn<F> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        (self.swap)(a, b);
    }
}

/// Two slices permuted in lockstep, e.g. keys and their payloads.
pub struct Parallel<'a, A, B> {
    first: &'a mut [A],
    second: &'a mut [B],
}

impl<'a, A, B> Parallel<'a, A, B> {
    /// Pairs two slices of equal length.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidLength`] when the lengths differ.
    pub fn new(first: &'a mut [A], second: &'a mut [B]) -> Result<Self, SampleError> {
        if first.len() != second.len() {
            return Err(SampleError::InvalidLength {
                expected: first.len(),
                actual: second.len(),
            });
        }
        Ok(Self { first, second })
    }
}

impl<A, B> Swap for Parallel<'_, A, B> {
    #[inline]
    fn len(&self) -> usize {
        self.first.len()
    }

    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.first.swap(a, b);
        self.second.swap(a, b);
    }
}

/// Draws a position uniformly from the closed range `[0, i]`.
#[inline]
fn index_through<S: BitSource + ?Sized>(source: &mut S, i: usize) -> usize {
    u64::sample_unchecked(source, 0, i as u64 + 1) as usize
}

/// Permutes `seq` uniformly at random in place.
///
/// Performs exactly `n - 1` swaps; sequences of length 0 or 1 are left
/// unchanged and consume no entropy.
pub fn shuffle_swap<S, W>(source: &mut S, seq: &mut W)
where
    S: BitSource + ?Sized,
    W: Swap + ?Sized,
{
    for i in (1..seq.len()).rev() {
        let j = index_through(source, i);
        seq.swap(i, j);
    }
}

/// Permutes a slice uniformly at random in place.
#[inline]
pub fn shuffle_slice<S, T>(source: &mut S, items: &mut [T])
where
    S: BitSource + ?Sized,
{
    shuffle_swap(source, items);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RandSource;
    use rand::rngs::StdRng;

    fn source(seed: i64) -> RandSource<StdRng> {
        RandSource::from_seed(seed)
    }

    #[test]
    fn test_shuffle_preserves_multiset() {
        let mut items = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let mut sorted = items.clone();
        sorted.sort_unstable();
        shuffle_slice(&mut source(8), &mut items);
        items.sort_unstable();
        assert_eq!(items, sorted);
    }

    #[test]
    fn test_short_sequences_unchanged_without_entropy() {
        let mut s = source(8);
        let mut reference = source(8);
        let mut empty: [u8; 0] = [];
        let mut single = [42];
        shuffle_slice(&mut s, &mut empty);
        shuffle_slice(&mut s, &mut single);
        assert_eq!(single, [42]);
        assert_eq!(s.int63(), reference.int63());
    }

    #[test]
    fn test_swap_count_is_n_minus_one() {
        let mut swaps = 0;
        shuffle_swap(&mut source(1), &mut SwapFn::new(10, |_, _| swaps += 1));
        assert_eq!(swaps, 9);
    }

    #[test]
    fn test_swap_indices_follow_fisher_yates_order() {
        let mut calls = Vec::new();
        shuffle_swap(&mut source(2), &mut SwapFn::new(6, |a, b| calls.push((a, b))));
        let firsts: Vec<usize> = calls.iter().map(|&(a, _)| a).collect();
        assert_eq!(firsts, vec![5, 4, 3, 2, 1]);
        assert!(calls.iter().all(|&(a, b)| b <= a));
    }

    #[test]
    fn test_closure_and_slice_paths_agree() {
        let mut direct: Vec<u32> = (0..50).collect();
        shuffle_slice(&mut source(33), &mut direct);

        let mut via_closure: Vec<u32> = (0..50).collect();
        let len = via_closure.len();
        shuffle_swap(
            &mut source(33),
            &mut SwapFn::new(len, |a, b| via_closure.swap(a, b)),
        );
        assert_eq!(direct, via_closure);
    }

    #[test]
    fn test_parallel_slices_stay_aligned() {
        let mut keys: Vec<u32> = (0..20).collect();
        let mut labels: Vec<String> = keys.iter().map(|k| format!("item-{k}")).collect();
        let mut pair = Parallel::new(&mut keys, &mut labels).unwrap();
        shuffle_swap(&mut source(5), &mut pair);
        for (k, label) in keys.iter().zip(&labels) {
            assert_eq!(label, &format!("item-{k}"));
        }
    }

    #[test]
    fn test_parallel_rejects_mismatched_lengths() {
        let mut a = [1, 2, 3];
        let mut b = [1.0, 2.0];
        let err = Parallel::new(&mut a, &mut b).err();
        assert_eq!(
            err,
            Some(SampleError::InvalidLength {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_positions_are_uniform() {
        // first element of a length-4 sequence should land in each slot equally
        let mut counts = [0_usize; 4];
        let mut s = source(99);
        let trials = 40_000;
        for _ in 0..trials {
            let mut items = [0, 1, 2, 3];
            shuffle_slice(&mut s, &mut items);
            let pos = items.iter().position(|&v| v == 0).unwrap();
            counts[pos] += 1;
        }
        let expected = trials as f64 / 4.0;
        let chi_square: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // 3 degrees of freedom, p = 0.001
        assert!(
            chi_square < 16.27,
            "chi-square {chi_square:.2} for {counts:?}"
        );
    }
}

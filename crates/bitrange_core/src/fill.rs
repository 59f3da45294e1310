//! Batch Filler: overwrites a caller-owned slice with independent range draws.
//!
//! The slice is never resized; its current length decides how many values
//! are drawn. Elements are written in index order `0..n`, one sampler call
//! each, so a filled slice matches `n` consecutive scalar draws exactly.

use crate::error::SampleError;
use crate::sampler::SampleRange;
use crate::source::BitSource;

/// Fills `out` with draws from `[lo, hi)`.
///
/// This is a zero-allocation operation. An empty slice is a no-op and
/// consumes no entropy; a degenerate range writes `lo` everywhere without
/// touching the source.
///
/// # Errors
///
/// [`SampleError::InvalidRange`] when `hi < lo`, reported before any element
/// is written.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::{fill_range, RandSource};
/// use rand::rngs::StdRng;
///
/// let mut source = RandSource::<StdRng>::from_seed(42);
/// let mut buffer = [0_u32; 64];
/// fill_range(&mut source, 10, 20, &mut buffer).unwrap();
/// assert!(buffer.iter().all(|v| (10..20).contains(v)));
/// ```
pub fn fill_range<S, T>(source: &mut S, lo: T, hi: T, out: &mut [T]) -> Result<(), SampleError>
where
    S: BitSource + ?Sized,
    T: SampleRange,
{
    T::check_range(lo, hi)?;
    if lo == hi {
        out.fill(lo);
        return Ok(());
    }
    for slot in out.iter_mut() {
        *slot = T::sample_unchecked(source, lo, hi);
    }
    Ok(())
}

//! # Range Sampler
//!
//! Derives bounded values in a half-open interval `[lo, hi)` from the raw
//! output of a [`BitSource`].
//!
//! ## Integers
//!
//! The span `hi - lo` is computed in the unsigned type of the same width, so
//! signed ranges wider than the signed maximum (e.g. `[i64::MIN, i64::MAX)`)
//! do not overflow. The draw is then reduced into the span:
//!
//! - power-of-two spans mask the raw draw directly;
//! - other spans that fit the 63-bit (resp. 31-bit) draw reject the trailing
//!   partial block `[2^63 - 2^63 % span, 2^63)` and take the remainder;
//! - spans wider than that draw the full 64-bit (resp. 32-bit) word and
//!   reject values `>= span`, which accepts more than half of all draws.
//!
//! 32-bit ranges use the top bits of a single 63-bit draw, so one accepted
//! sample always costs one source call.
//!
//! ## Floats
//!
//! A unit draw `u` in `[0, 1)` is scaled to `lo + (hi - lo) * u`. Rounding
//! can land exactly on `hi` for very narrow or very wide spans; such results
//! are redrawn so the upper bound stays exclusive.
//!
//! ## Degenerate ranges
//!
//! `lo == hi` returns `lo` without touching the source.
//!
//! ```rust
//! use bitrange_core::{RandSource, SampleRange};
//! use rand::rngs::StdRng;
//!
//! let mut source = RandSource::<StdRng>::from_seed(9527);
//! let v = i64::sample(&mut source, -5, 5).unwrap();
//! assert!((-5..5).contains(&v));
//! ```

use std::fmt;

use num_traits::Float;

use crate::error::SampleError;
use crate::source::BitSource;

/// `2^63` as a float, the scale of a 63-bit draw.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Uniform value in `[0, span)` from 63/64-bit draws. `span` must be non-zero.
#[inline]
pub(crate) fn bounded_u64<S: BitSource + ?Sized>(source: &mut S, span: u64) -> u64 {
    debug_assert!(span > 0);
    if span > 1 << 63 {
        loop {
            let v = source.uint64();
            if v < span {
                return v;
            }
            tracing::trace!(span, draw = v, "rejected out-of-span 64-bit draw");
        }
    }
    if span & (span - 1) == 0 {
        return source.int63() as u64 & (span - 1);
    }
    let max = (1 << 63) - 1 - (1 << 63) % span;
    let mut v = source.int63() as u64;
    while v > max {
        tracing::trace!(span, draw = v, "rejected biased 63-bit draw");
        v = source.int63() as u64;
    }
    v % span
}

/// Uniform value in `[0, span)` from 31/32-bit reductions. `span` must be non-zero.
#[inline]
pub(crate) fn bounded_u32<S: BitSource + ?Sized>(source: &mut S, span: u32) -> u32 {
    debug_assert!(span > 0);
    if span > 1 << 31 {
        loop {
            let v = source.uint32();
            if v < span {
                return v;
            }
            tracing::trace!(span, draw = v, "rejected out-of-span 32-bit draw");
        }
    }
    if span & (span - 1) == 0 {
        return source.int31() as u32 & (span - 1);
    }
    let max = (1 << 31) - 1 - (1 << 31) % span;
    let mut v = source.int31() as u32;
    while v > max {
        tracing::trace!(span, draw = v, "rejected biased 31-bit draw");
        v = source.int31() as u32;
    }
    v % span
}

/// Uniform `f64` in `[0, 1)` built from one 63-bit draw.
///
/// Draws that round up to exactly `1.0` are discarded.
#[inline]
pub fn unit_f64<S: BitSource + ?Sized>(source: &mut S) -> f64 {
    loop {
        let f = source.int63() as f64 / TWO_POW_63;
        if f < 1.0 {
            return f;
        }
    }
}

/// Uniform `f32` in `[0, 1)`, narrowed from [`unit_f64`].
#[inline]
pub fn unit_f32<S: BitSource + ?Sized>(source: &mut S) -> f32 {
    loop {
        let f = unit_f64(source) as f32;
        if f < 1.0 {
            return f;
        }
    }
}

/// Maps a unit draw onto `[lo, hi]`, falling back to a weighted sum when
/// `hi - lo` overflows to infinity.
#[inline]
fn scale<F: Float>(lo: F, hi: F, unit: F) -> F {
    let span = hi - lo;
    if span.is_finite() {
        lo + span * unit
    } else {
        lo * (F::one() - unit) + hi * unit
    }
}

/// Numeric types that can be drawn uniformly from a half-open range.
///
/// Implemented for `i32`, `i64`, `isize`, `u32`, `u64`, `usize`, `f32` and `f64`.
pub trait SampleRange: Copy + PartialOrd + fmt::Display {
    /// Checks the `[lo, hi)` contract without consuming entropy.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when `hi < lo` or the bounds are unordered.
    #[inline]
    fn check_range(lo: Self, hi: Self) -> Result<(), SampleError> {
        if lo <= hi {
            Ok(())
        } else {
            Err(SampleError::invalid_range(lo, hi))
        }
    }

    /// Draws from `[lo, hi)` assuming `lo < hi` has already been checked.
    fn sample_unchecked<S: BitSource + ?Sized>(source: &mut S, lo: Self, hi: Self) -> Self;

    /// Draws one value uniformly from `[lo, hi)`.
    ///
    /// A degenerate range (`lo == hi`) returns `lo` and consumes no entropy.
    ///
    /// # Errors
    ///
    /// [`SampleError::InvalidRange`] when the range is invalid; the source is
    /// left untouched in that case.
    #[inline]
    fn sample<S: BitSource + ?Sized>(
        source: &mut S,
        lo: Self,
        hi: Self,
    ) -> Result<Self, SampleError> {
        Self::check_range(lo, hi)?;
        if lo == hi {
            return Ok(lo);
        }
        Ok(Self::sample_unchecked(source, lo, hi))
    }
}

macro_rules! impl_sample_range_int {
    ($($ty:ty => $wide:ty, $bounded:ident;)*) => {$(
        impl SampleRange for $ty {
            #[inline]
            fn sample_unchecked<S: BitSource + ?Sized>(source: &mut S, lo: Self, hi: Self) -> Self {
                let span = (hi as $wide).wrapping_sub(lo as $wide);
                (lo as $wide).wrapping_add($bounded(source, span)) as $ty
            }
        }
    )*};
}

impl_sample_range_int! {
    i32 => u32, bounded_u32;
    u32 => u32, bounded_u32;
    i64 => u64, bounded_u64;
    u64 => u64, bounded_u64;
    isize => u64, bounded_u64;
    usize => u64, bounded_u64;
}

macro_rules! impl_sample_range_float {
    ($($ty:ty => $unit:ident;)*) => {$(
        impl SampleRange for $ty {
            #[inline]
            fn check_range(lo: Self, hi: Self) -> Result<(), SampleError> {
                if lo.is_finite() && hi.is_finite() && lo <= hi {
                    Ok(())
                } else {
                    Err(SampleError::invalid_range(lo, hi))
                }
            }

            #[inline]
            fn sample_unchecked<S: BitSource + ?Sized>(source: &mut S, lo: Self, hi: Self) -> Self {
                loop {
                    let v = scale(lo, hi, $unit(source));
                    if v < hi {
                        return v;
                    }
                    tracing::trace!(lo, hi, "scaled draw rounded onto the upper bound");
                }
            }
        }
    )*};
}

impl_sample_range_float! {
    f32 => unit_f32;
    f64 => unit_f64;
}

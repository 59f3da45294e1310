//! Error types for bounded sampling and generator configuration.
//!
//! Every variant of [`SampleError`] is a caller-contract violation. They are
//! detected before any entropy is consumed, so a failed call leaves the
//! generator state untouched.

use thiserror::Error;

/// Contract violations reported by the sampling, fill and shuffle operations.
///
/// Range bounds are carried already rendered so that one error type serves
/// every numeric width.
///
/// # Examples
///
/// ```
/// use bitrange_core::SampleError;
///
/// let err = SampleError::invalid_range(10, 3);
/// assert_eq!(err.to_string(), "Invalid range [10, 3): upper bound is below lower bound");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleError {
    /// Upper bound below lower bound, or a bound that is not a finite number.
    #[error("Invalid range [{lo}, {hi}): upper bound is below lower bound")]
    InvalidRange {
        /// Lower (inclusive) bound.
        lo: String,
        /// Upper (exclusive) bound.
        hi: String,
    },

    /// Probability outside `[0, 1]` (NaN included).
    #[error("Invalid probability {0}: must be in [0, 1]")]
    InvalidProbability(f64),

    /// Sequence lengths that cannot be used together.
    #[error("Invalid length {actual}: expected {expected}")]
    InvalidLength {
        /// Length required by the operation.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
}

impl SampleError {
    /// Builds an [`SampleError::InvalidRange`] from any displayable bounds.
    pub fn invalid_range<T: std::fmt::Display>(lo: T, hi: T) -> Self {
        Self::InvalidRange {
            lo: lo.to_string(),
            hi: hi.to_string(),
        }
    }
}

/// Errors raised while loading a [`GeneratorConfig`](crate::GeneratorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment or layered source could not be read.
    #[error("Configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    /// TOML document could not be parsed.
    #[error("Configuration parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Unknown bit source name.
    #[error("Invalid source '{0}': must be one of: std, small")]
    InvalidSource(String),
}

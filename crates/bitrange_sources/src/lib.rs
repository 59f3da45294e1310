//! # Bitrange Sources
//!
//! Concrete [`BitSource`](bitrange_core::BitSource) engines with fixed,
//! portable output, for regression pins and per-thread use.
//!
//! - [`Mt19937_64`]: 64-bit Mersenne Twister, the reference engine
//! - [`SplitMix64`]: tiny single-word engine, also used to derive seeds
//!
//! ## Usage Example
//!
//! ```rust
//! use bitrange_core::Generator;
//! use bitrange_sources::Mt19937_64;
//!
//! let mut rng = Generator::new(Mt19937_64::new(9527));
//! assert_eq!(rng.range_i64(0, 10), Ok(5));
//! ```

#![warn(missing_docs)]

mod mt19937;
mod splitmix;

// Public re-exports
pub use mt19937::Mt19937_64;
pub use splitmix::SplitMix64;

//! # Bitrange Core
//!
//! Bounded-range sampling, batch fill and shuffles decorating an
//! interchangeable bit source.
//!
//! This crate provides:
//! - [`BitSource`]: the narrow capability every engine implements (63-bit and
//!   64-bit uniform draws plus reseed)
//! - [`Generator`]: the decorator deriving bounded scalars of every width,
//!   in-place batch fills, Fisher–Yates shuffles, coin flips and permutations
//! - [`SyncGenerator`] and [`global`]: shared and process-wide generators
//! - [`GeneratorConfig`]: builder, TOML and environment configuration
//!
//! ## Determinism
//!
//! A generator holds no state beyond its source, so the same source and seed
//! always reproduce the same stream. Degenerate ranges, empty batches and
//! contract violations never consume entropy.
//!
//! ## Usage Example
//!
//! ```rust
//! use bitrange_core::{Generator, RandSource};
//! use rand::rngs::StdRng;
//!
//! let mut rng = Generator::new(RandSource::<StdRng>::from_seed(12345));
//!
//! let v = rng.range_i32(-10, 10).unwrap();
//! assert!((-10..10).contains(&v));
//!
//! let mut buffer = vec![0.0_f64; 1000];
//! rng.fill_f64(&mut buffer, 0.0, 1.0).unwrap();
//!
//! let order = rng.permutation(5);
//! assert_eq!(order.len(), 5);
//!
//! assert!(rng.range_u64(5, 1).is_err());
//! ```
//!
//! ## Non-goals
//!
//! Nothing here is cryptographically secure; sources are assumed uniform,
//! not adversarially resistant.

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod fill;
pub mod generator;
pub mod global;
pub mod sampler;
pub mod scalar;
pub mod shuffle;
pub mod source;
pub mod sync;

// Public re-exports
pub use config::{GeneratorConfig, GeneratorConfigBuilder, SourceKind};
pub use error::{ConfigError, SampleError};
pub use fill::fill_range;
pub use generator::Generator;
pub use sampler::{unit_f32, unit_f64, SampleRange};
pub use scalar::{flip_coin, permutation};
pub use shuffle::{shuffle_slice, shuffle_swap, Parallel, Swap, SwapFn};
pub use source::{BitSource, DefaultSource, RandSource};
pub use sync::SyncGenerator;

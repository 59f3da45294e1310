//! Generator configuration.
//!
//! Handles building a generator from code (builder), from a TOML document,
//! or from `BITRANGE_*` environment variables.

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::generator::Generator;
use crate::source::{DefaultSource, RandSource};

/// Prefix of the environment variables read by [`GeneratorConfig::from_env`].
pub const ENV_PREFIX: &str = "BITRANGE";

/// Engine behind a configuration-built generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// `rand::rngs::StdRng`.
    #[default]
    Std,
    /// `rand::rngs::SmallRng`.
    Small,
}

impl FromStr for SourceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "std" | "standard" => Ok(SourceKind::Std),
            "small" => Ok(SourceKind::Small),
            _ => Err(ConfigError::InvalidSource(s.to_string())),
        }
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Std => write!(f, "std"),
            SourceKind::Small => write!(f, "small"),
        }
    }
}

fn deserialize_source<'de, D>(deserializer: D) -> Result<SourceKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    SourceKind::from_str(&s).map_err(serde::de::Error::custom)
}

/// How to construct a generator.
///
/// Without a seed the source is seeded from operating-system entropy, so
/// the stream differs per run.
///
/// # Examples
///
/// ```rust
/// use bitrange_core::{GeneratorConfig, SourceKind};
///
/// let config = GeneratorConfig::builder()
///     .seed(9527)
///     .source(SourceKind::Small)
///     .build();
///
/// let mut a = config.build_generator();
/// let mut b = config.build_generator();
/// assert_eq!(a.range_i64(0, 10), b.range_i64(0, 10));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible streams.
    seed: Option<i64>,
    /// Engine selection.
    #[serde(deserialize_with = "deserialize_source")]
    source: SourceKind,
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Returns the configured seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<i64> {
        self.seed
    }

    /// Returns the configured engine.
    #[inline]
    pub fn source(&self) -> SourceKind {
        self.source
    }

    /// Parses a TOML document such as `seed = 9527` / `source = "small"`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed TOML or an unknown source name.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Reads `BITRANGE_SEED` and `BITRANGE_SOURCE` from the environment.
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Load`] when a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(env: config::Environment) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(env.try_parsing(true))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Builds the configured bit source.
    pub fn build_source(&self) -> DefaultSource {
        match (self.source, self.seed) {
            (SourceKind::Std, Some(seed)) => DefaultSource::Std(RandSource::from_seed(seed)),
            (SourceKind::Std, None) => DefaultSource::Std(RandSource::from_entropy()),
            (SourceKind::Small, Some(seed)) => DefaultSource::Small(RandSource::from_seed(seed)),
            (SourceKind::Small, None) => DefaultSource::Small(RandSource::from_entropy()),
        }
    }

    /// Builds a generator over the configured source.
    pub fn build_generator(&self) -> Generator<DefaultSource> {
        tracing::debug!(seed = ?self.seed, source = %self.source, "building generator");
        Generator::new(self.build_source())
    }
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    seed: Option<i64>,
    source: SourceKind,
}

impl GeneratorConfigBuilder {
    /// Sets a fixed seed.
    #[inline]
    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Selects the engine.
    #[inline]
    pub fn source(mut self, source: SourceKind) -> Self {
        self.source = source;
        self
    }

    /// Builds the configuration.
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig {
            seed: self.seed,
            source: self.source,
        }
    }
}

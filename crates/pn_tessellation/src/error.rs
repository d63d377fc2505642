//! Error types for configuration and mesh adapters.
//!
//! The per-patch math is total and never fails; errors only arise where
//! external data enters the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading or validating a tessellation configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// Config file could not be read.
  #[error("Failed to read config file {path}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  /// Config text is not valid TOML for this schema.
  #[error("Failed to parse config TOML: {0}")]
  Parse(#[from] toml::de::Error),

  /// Band table has no levels at all.
  #[error("Distance band table is empty")]
  EmptyBands,

  /// Band table needs exactly one more level than thresholds.
  #[error("Distance band table has {thresholds} thresholds but {levels} levels (expected {expected})")]
  BandLengthMismatch {
    thresholds: usize,
    levels: usize,
    expected: usize,
  },

  /// Thresholds must be finite and strictly ascending.
  #[error("Band threshold {index} ({value}) must be finite and greater than the previous threshold")]
  UnorderedThreshold { index: usize, value: f32 },

  /// Levels must be finite and non-increasing with distance.
  #[error("Band level {index} ({value}) must be finite and not exceed the previous level")]
  IncreasingLevel { index: usize, value: f32 },

  /// Factor scales every banded level and must be a finite non-negative number.
  #[error("Tessellation factor must be finite and >= 0, got {0}")]
  InvalidFactor(f32),

  /// Fixed levels are segment counts and cannot drop below one.
  #[error("Fixed tessellation level {0} is below the minimum of 1.0")]
  FixedLevelTooLow(f32),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors from adapting an indexed mesh into patches.
#[derive(Debug, Error)]
pub enum MeshError {
  /// Attribute streams disagree on vertex count.
  #[error("Attribute stream '{stream}' has {len} entries, expected {expected}")]
  StreamLengthMismatch {
    stream: &'static str,
    len: usize,
    expected: usize,
  },

  /// A triangle references a vertex that does not exist.
  #[error("Triangle {triangle} references vertex {index} (vertex count {vertex_count})")]
  IndexOutOfRange {
    triangle: usize,
    index: u32,
    vertex_count: usize,
  },
}

/// Result type for mesh adapter operations.
pub type MeshResult<T> = std::result::Result<T, MeshError>;

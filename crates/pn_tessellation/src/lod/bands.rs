//! DistanceBands - discrete distance-to-level table.
//!
//! ```text
//! level
//!  175 ┤■■■■■
//!   80 ┤     ■■■■■
//!   20 ┤          ■■■■■
//!   10 ┤               ■■■■■
//!    5 ┤                    ■■■■■■■■■■
//!      └────┬────┬────┬────┬──────────► average edge distance
//!           2    4    6    8
//! ```
//!
//! Each band covers `(previous_threshold, threshold]`. Distances beyond the
//! last threshold (and NaN) fall into the final band.

use smallvec::SmallVec;

use crate::constants::{DEFAULT_BAND_LEVELS, DEFAULT_BAND_THRESHOLDS, MIN_TESSELLATION_LEVEL};
use crate::error::{ConfigError, ConfigResult};

/// Validated band table: ascending thresholds, non-increasing levels.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceBands {
  thresholds: SmallVec<[f32; 8]>,
  levels: SmallVec<[f32; 8]>,
}

impl DistanceBands {
  /// Build a table from inclusive upper thresholds and per-band base levels.
  ///
  /// `levels` must have exactly one more entry than `thresholds`.
  pub fn new(thresholds: &[f32], levels: &[f32]) -> ConfigResult<Self> {
    if levels.is_empty() {
      return Err(ConfigError::EmptyBands);
    }
    if levels.len() != thresholds.len() + 1 {
      return Err(ConfigError::BandLengthMismatch {
        thresholds: thresholds.len(),
        levels: levels.len(),
        expected: thresholds.len() + 1,
      });
    }

    let mut previous = f32::NEG_INFINITY;
    for (index, &value) in thresholds.iter().enumerate() {
      if !value.is_finite() || value <= previous {
        return Err(ConfigError::UnorderedThreshold { index, value });
      }
      previous = value;
    }

    let mut previous = f32::INFINITY;
    for (index, &value) in levels.iter().enumerate() {
      if !value.is_finite() || value > previous {
        return Err(ConfigError::IncreasingLevel { index, value });
      }
      previous = value;
    }

    Ok(Self {
      thresholds: SmallVec::from_slice(thresholds),
      levels: SmallVec::from_slice(levels),
    })
  }

  /// Inclusive upper distance bound of each band except the last.
  pub fn thresholds(&self) -> &[f32] {
    &self.thresholds
  }

  /// Unscaled level of each band.
  pub fn levels(&self) -> &[f32] {
    &self.levels
  }

  pub fn band_count(&self) -> usize {
    self.levels.len()
  }

  /// Index of the band containing `distance`.
  #[inline]
  pub fn band_index(&self, distance: f32) -> usize {
    self
      .thresholds
      .iter()
      .position(|&threshold| distance <= threshold)
      .unwrap_or(self.thresholds.len())
  }

  /// Unscaled level for `distance`.
  #[inline]
  pub fn base_level(&self, distance: f32) -> f32 {
    self.levels[self.band_index(distance)]
  }

  /// Level for `distance`, scaled by `factor` and floored at
  /// [`MIN_TESSELLATION_LEVEL`].
  #[inline]
  pub fn level(&self, distance: f32, factor: f32) -> f32 {
    (self.base_level(distance) * factor).max(MIN_TESSELLATION_LEVEL)
  }

  /// Level for an edge whose endpoints are `distance_a` and `distance_b` away
  /// from the viewer. Uses the average of the two.
  #[inline]
  pub fn edge_level(&self, distance_a: f32, distance_b: f32, factor: f32) -> f32 {
    self.level((distance_a + distance_b) / 2.0, factor)
  }
}

impl Default for DistanceBands {
  fn default() -> Self {
    Self {
      thresholds: SmallVec::from_slice(&DEFAULT_BAND_THRESHOLDS),
      levels: SmallVec::from_slice(&DEFAULT_BAND_LEVELS),
    }
  }
}

#[cfg(test)]
#[path = "bands_test.rs"]
mod bands_test;

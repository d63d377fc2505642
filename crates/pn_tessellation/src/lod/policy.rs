//! TessellationPolicy - how a batch turns geometry into levels.

use super::bands::DistanceBands;
use crate::constants::{
  CORNER_COUNT, DEFAULT_FIXED_INNER, DEFAULT_FIXED_OUTER, MIN_TESSELLATION_LEVEL,
};
use crate::error::{ConfigError, ConfigResult};

/// Level selection strategy, chosen once per batch.
#[derive(Clone, Debug, PartialEq)]
pub enum TessellationPolicy {
  /// Distance-banded levels scaled by the frame's tessellation factor.
  Banded(DistanceBands),

  /// Constant levels regardless of viewer (low detail / debug passes).
  /// The tessellation factor is ignored.
  Fixed {
    outer: [f32; CORNER_COUNT],
    inner: f32,
  },
}

impl Default for TessellationPolicy {
  fn default() -> Self {
    Self::Banded(DistanceBands::default())
  }
}

impl TessellationPolicy {
  /// Banded policy with the default five-band table.
  pub fn banded() -> Self {
    Self::default()
  }

  /// Fixed policy with validated levels.
  pub fn fixed(outer: [f32; CORNER_COUNT], inner: f32) -> ConfigResult<Self> {
    for &level in outer.iter().chain(std::iter::once(&inner)) {
      if !level.is_finite() || level < MIN_TESSELLATION_LEVEL {
        return Err(ConfigError::FixedLevelTooLow(level));
      }
    }
    Ok(Self::Fixed { outer, inner })
  }

  /// Fixed policy with outer = [2, 2, 2], inner = 1.
  pub fn default_fixed() -> Self {
    Self::Fixed {
      outer: DEFAULT_FIXED_OUTER,
      inner: DEFAULT_FIXED_INNER,
    }
  }

  /// Every level set to `level` (clamped to the minimum). Handy as a debug
  /// override that pins all patches to one density.
  pub fn uniform(level: f32) -> Self {
    let level = level.max(MIN_TESSELLATION_LEVEL);
    Self::Fixed {
      outer: [level; CORNER_COUNT],
      inner: level,
    }
  }

  /// Short name for logs and reports.
  pub fn name(&self) -> &'static str {
    match self {
      Self::Banded(_) => "banded",
      Self::Fixed { .. } => "fixed",
    }
  }

  /// Whether levels depend on the viewer position.
  pub fn is_view_dependent(&self) -> bool {
    matches!(self, Self::Banded(_))
  }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;

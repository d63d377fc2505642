//! Configuration parsing for patch tessellation.
//!
//! ```toml
//! tessellation_factor = 1.0
//! attributes = "full"          # or "basic"
//!
//! [policy]
//! kind = "banded"
//! thresholds = [2.0, 4.0, 6.0, 8.0]
//! levels = [175.0, 80.0, 20.0, 10.0, 5.0]
//! ```
//!
//! or, for a low-detail pass:
//!
//! ```toml
//! [policy]
//! kind = "fixed"
//! outer = [2.0, 2.0, 2.0]
//! inner = 1.0
//! ```

use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::constants::{
  DEFAULT_BAND_LEVELS, DEFAULT_BAND_THRESHOLDS, DEFAULT_FIXED_INNER, DEFAULT_FIXED_OUTER,
};
use crate::error::{ConfigError, ConfigResult};
use crate::lod::{DistanceBands, FrameUniforms, TessellationPolicy};
use crate::pipeline::BatchConfig;
use crate::types::AttributeSet;

/// Root configuration for a tessellated material or pass.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TessellationConfig {
  /// Multiplier applied to banded levels.
  #[serde(default = "default_factor")]
  pub tessellation_factor: f32,
  /// Per-corner attributes carried to the evaluation stage.
  #[serde(default)]
  pub attributes: AttributeSet,
  /// Level selection strategy.
  #[serde(default)]
  pub policy: PolicyConfig,
}

/// Serialized form of [`TessellationPolicy`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PolicyConfig {
  /// Distance bands; defaults to the standard five-band table.
  Banded {
    #[serde(default = "default_thresholds")]
    thresholds: Vec<f32>,
    #[serde(default = "default_levels")]
    levels: Vec<f32>,
  },
  /// Constant levels.
  Fixed {
    #[serde(default = "default_fixed_outer")]
    outer: [f32; 3],
    #[serde(default = "default_fixed_inner")]
    inner: f32,
  },
}

fn default_factor() -> f32 {
  1.0
}

fn default_thresholds() -> Vec<f32> {
  DEFAULT_BAND_THRESHOLDS.to_vec()
}

fn default_levels() -> Vec<f32> {
  DEFAULT_BAND_LEVELS.to_vec()
}

fn default_fixed_outer() -> [f32; 3] {
  DEFAULT_FIXED_OUTER
}

fn default_fixed_inner() -> f32 {
  DEFAULT_FIXED_INNER
}

impl Default for PolicyConfig {
  fn default() -> Self {
    Self::Banded {
      thresholds: default_thresholds(),
      levels: default_levels(),
    }
  }
}

impl PolicyConfig {
  /// Validate and convert into the runtime policy.
  pub fn build(&self) -> ConfigResult<TessellationPolicy> {
    match self {
      Self::Banded { thresholds, levels } => {
        DistanceBands::new(thresholds, levels).map(TessellationPolicy::Banded)
      }
      Self::Fixed { outer, inner } => TessellationPolicy::fixed(*outer, *inner),
    }
  }
}

impl Default for TessellationConfig {
  fn default() -> Self {
    Self {
      tessellation_factor: default_factor(),
      attributes: AttributeSet::default(),
      policy: PolicyConfig::default(),
    }
  }
}

impl TessellationConfig {
  pub fn new() -> Self {
    Self::default()
  }

  /// Load and validate configuration from a TOML file.
  pub fn load(path: &Path) -> ConfigResult<Self> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    #[cfg(feature = "tracing")]
    tracing::debug!(path = %path.display(), "loading tessellation config");

    Self::from_toml_str(&content)
  }

  /// Parse and validate configuration from TOML text.
  pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
    let config: Self = toml::from_str(content)?;
    config.validate()?;

    #[cfg(feature = "tracing")]
    tracing::debug!(
      factor = config.tessellation_factor,
      attributes = ?config.attributes,
      policy = ?config.policy,
      "tessellation config parsed"
    );

    Ok(config)
  }

  /// Check every field without building anything long-lived.
  pub fn validate(&self) -> ConfigResult<()> {
    if !self.tessellation_factor.is_finite() || self.tessellation_factor < 0.0 {
      return Err(ConfigError::InvalidFactor(self.tessellation_factor));
    }
    self.policy.build().map(|_| ())
  }

  /// Runtime policy for this configuration.
  pub fn policy(&self) -> ConfigResult<TessellationPolicy> {
    self.policy.build()
  }

  /// Uniforms for a frame rendered from `viewer_position`.
  pub fn frame_uniforms(&self, viewer_position: Vec3) -> FrameUniforms {
    FrameUniforms::new(viewer_position, self.tessellation_factor)
  }

  /// Complete batch configuration for a frame rendered from `viewer_position`.
  pub fn batch_config(&self, viewer_position: Vec3) -> ConfigResult<BatchConfig> {
    self.validate()?;
    Ok(
      BatchConfig::new(self.policy()?)
        .with_attribute_set(self.attributes)
        .with_uniforms(self.frame_uniforms(viewer_position)),
    )
  }

  pub fn with_tessellation_factor(mut self, factor: f32) -> Self {
    self.tessellation_factor = factor;
    self
  }

  pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
    self.attributes = attributes;
    self
  }

  pub fn with_policy(mut self, policy: PolicyConfig) -> Self {
    self.policy = policy;
    self
  }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

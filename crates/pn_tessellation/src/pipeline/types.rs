//! Pipeline I/O types for patch batches.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────┐
//! │ BATCH (one draw call / one frame)                                    │
//! │                                                                      │
//! │  BatchConfig { policy, attribute_set, uniforms }   (read-only)       │
//! │        │                                                             │
//! │        ▼                                                             │
//! │  PatchSource ──► patch(i) ──► process_patch ──► OutputPatch          │
//! │                  (rayon: one task per patch, order preserved)        │
//! │        │                                                             │
//! │        ▼                                                             │
//! │  BatchOutput { patches, stats }                                      │
//! └──────────────────────────────────────────────────────────────────────┘
//! ```

use crate::lod::{FrameUniforms, TessellationPolicy};
use crate::types::{AttributeSet, OutputPatch};

// =============================================================================
// BatchConfig - per-batch read-only inputs
// =============================================================================

/// Everything a batch shares across its patches.
///
/// Immutable for the lifetime of one batch; shared by reference across worker
/// threads without locking.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BatchConfig {
  /// Level selection strategy.
  pub policy: TessellationPolicy,

  /// Which per-corner attributes travel with each patch.
  pub attribute_set: AttributeSet,

  /// Viewer position and tessellation factor for this frame.
  pub uniforms: FrameUniforms,
}

impl BatchConfig {
  pub fn new(policy: TessellationPolicy) -> Self {
    Self {
      policy,
      ..Self::default()
    }
  }

  pub fn with_policy(mut self, policy: TessellationPolicy) -> Self {
    self.policy = policy;
    self
  }

  pub fn with_attribute_set(mut self, attribute_set: AttributeSet) -> Self {
    self.attribute_set = attribute_set;
    self
  }

  pub fn with_uniforms(mut self, uniforms: FrameUniforms) -> Self {
    self.uniforms = uniforms;
    self
  }
}

// =============================================================================
// BatchOutput - results and statistics
// =============================================================================

/// Summary of one processed batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchStats {
  /// Number of patches processed.
  pub patch_count: usize,
  /// Smallest outer level in the batch (0 when empty).
  pub min_outer_level: f32,
  /// Largest outer level in the batch (0 when empty).
  pub max_outer_level: f32,
  /// Mean of all outer levels (0 when empty).
  pub mean_outer_level: f32,
  /// Sum of per-patch micro-triangle upper bounds, saturating.
  pub triangle_upper_bound: u64,
  /// Wall time for the whole batch in microseconds.
  pub timing_us: u64,
}

impl Default for BatchStats {
  fn default() -> Self {
    Self {
      patch_count: 0,
      min_outer_level: 0.0,
      max_outer_level: 0.0,
      mean_outer_level: 0.0,
      triangle_upper_bound: 0,
      timing_us: 0,
    }
  }
}

impl BatchStats {
  /// Aggregate level statistics over finished patches. Timing is left at 0.
  pub fn from_patches(patches: &[OutputPatch]) -> Self {
    if patches.is_empty() {
      return Self::default();
    }

    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    let mut sum = 0.0f64;
    let mut triangles = 0u64;

    for patch in patches {
      min = min.min(patch.levels.min_outer());
      max = max.max(patch.levels.max_outer());
      sum += patch.levels.outer.iter().map(|&l| l as f64).sum::<f64>();
      triangles = triangles.saturating_add(patch.levels.triangle_upper_bound());
    }

    Self {
      patch_count: patches.len(),
      min_outer_level: min,
      max_outer_level: max,
      mean_outer_level: (sum / (patches.len() * 3) as f64) as f32,
      triangle_upper_bound: triangles,
      timing_us: 0,
    }
  }
}

/// Output of a batch, in source patch order.
#[derive(Clone, Debug, Default)]
pub struct BatchOutput {
  pub patches: Vec<OutputPatch>,
  pub stats: BatchStats,
}

impl BatchOutput {
  pub fn is_empty(&self) -> bool {
    self.patches.is_empty()
  }

  pub fn len(&self) -> usize {
    self.patches.len()
  }
}

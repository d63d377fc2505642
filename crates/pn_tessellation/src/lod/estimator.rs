//! Per-patch tessellation level estimation.
//!
//! ```text
//!            viewer
//!           ╱  │  ╲
//!       d0 ╱   │d1 ╲ d2
//!         ╱    │    ╲
//!   corner0──corner1──corner2
//!
//!   outer[0] = level((d1 + d2) / 2)   edge opposite corner 0
//!   outer[1] = level((d2 + d0) / 2)   edge opposite corner 1
//!   outer[2] = level((d0 + d1) / 2)   edge opposite corner 2
//!   inner    = outer[2]
//! ```

use glam::Vec3;

use super::bands::DistanceBands;
use super::policy::TessellationPolicy;
use crate::constants::{CORNER_COUNT, EDGE_CORNERS, INNER_LEVEL_SOURCE_EDGE, MIN_TESSELLATION_LEVEL};
use crate::types::TessellationLevels;

/// Per-frame uniform inputs shared read-only by every patch in a batch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameUniforms {
  /// Viewer position, in the same space as patch positions.
  pub viewer_position: Vec3,

  /// Global multiplier applied to banded levels.
  pub tessellation_factor: f32,
}

impl Default for FrameUniforms {
  fn default() -> Self {
    Self {
      viewer_position: Vec3::ZERO,
      tessellation_factor: 1.0,
    }
  }
}

impl FrameUniforms {
  pub fn new(viewer_position: Vec3, tessellation_factor: f32) -> Self {
    Self {
      viewer_position,
      tessellation_factor,
    }
  }

  pub fn with_viewer_position(mut self, viewer_position: Vec3) -> Self {
    self.viewer_position = viewer_position;
    self
  }

  pub fn with_tessellation_factor(mut self, factor: f32) -> Self {
    self.tessellation_factor = factor;
    self
  }
}

/// Euclidean distance from the viewer to each corner.
#[inline]
pub fn corner_distances(viewer_position: Vec3, corners: &[Vec3; CORNER_COUNT]) -> [f32; CORNER_COUNT] {
  corners.map(|corner| viewer_position.distance(corner))
}

/// Banded levels for one patch.
///
/// Outer level `i` averages the distances of the two corners that are not
/// corner `i`. The inner level copies the outer level of the edge opposite
/// corner 2 rather than blending all three.
#[inline]
pub fn estimate_banded(
  bands: &DistanceBands,
  viewer_position: Vec3,
  corners: &[Vec3; CORNER_COUNT],
  factor: f32,
) -> TessellationLevels {
  let distances = corner_distances(viewer_position, corners);
  let outer = EDGE_CORNERS.map(|[a, b]| bands.edge_level(distances[a], distances[b], factor));

  TessellationLevels {
    outer,
    inner: outer[INNER_LEVEL_SOURCE_EDGE],
  }
}

/// Compute the four tessellation levels for a patch under `policy`.
///
/// `corners` are the patch corner positions in input order, which equal the
/// B030/B003/B300 control points.
#[inline]
pub fn estimate(
  policy: &TessellationPolicy,
  uniforms: &FrameUniforms,
  corners: &[Vec3; CORNER_COUNT],
) -> TessellationLevels {
  match policy {
    TessellationPolicy::Banded(bands) => estimate_banded(
      bands,
      uniforms.viewer_position,
      corners,
      uniforms.tessellation_factor,
    ),
    // Fields are public, so a hand-built policy may skip `fixed()` validation
    TessellationPolicy::Fixed { outer, inner } => TessellationLevels {
      outer: outer.map(|level| level.max(MIN_TESSELLATION_LEVEL)),
      inner: inner.max(MIN_TESSELLATION_LEVEL),
    },
  }
}

#[cfg(test)]
#[path = "estimator_test.rs"]
mod estimator_test;

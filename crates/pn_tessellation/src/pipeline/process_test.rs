//! Tests for the batch processor.

use glam::Vec3;

use super::{process_batch, process_batch_sequential, process_patch};
use crate::config::TessellationConfig;
use crate::lod::{FrameUniforms, TessellationPolicy};
use crate::pipeline::source::PatchSource;
use crate::pipeline::test_utils::*;
use crate::pipeline::types::BatchConfig;
use crate::types::{AttributeSet, PatchInput};

// =============================================================================
// Batch 1: Single Patch
// =============================================================================

#[test]
fn test_process_patch_near_flat_triangle() {
  let input = unit_right_patch();
  let uniforms = FrameUniforms::new(Vec3::new(0.3, 0.3, 0.5), 1.0);

  let patch = process_patch(&input, &uniforms, &TessellationPolicy::banded(), AttributeSet::Full);

  assert_eq!(patch.control_points.corners(), input.positions());
  assert_eq!(patch.levels.outer, [175.0; 3]);
  assert_eq!(patch.levels.inner, 175.0);

  let centroid = Vec3::new(1.0 / 3.0, 1.0 / 3.0, 0.0);
  assert!((patch.control_points.b111 - centroid).length() < 1e-6);
}

#[test]
fn test_process_patch_keeps_attributes_bound_to_corners() {
  let input = unit_right_patch();
  let patch = process_patch(
    &input,
    &FrameUniforms::default(),
    &TessellationPolicy::default_fixed(),
    AttributeSet::Full,
  );

  for corner in 0..3 {
    assert_eq!(patch.control_points.corners()[corner], input.vertices[corner].position);
    assert_eq!(patch.attributes.normals[corner], input.vertices[corner].normal);
    assert_eq!(patch.attributes.uvs[corner], input.vertices[corner].uv);
  }
  assert!(patch.attributes.tangent_frame.is_some());
}

#[test]
fn test_process_patch_basic_attributes() {
  let patch = process_patch(
    &unit_right_patch(),
    &FrameUniforms::default(),
    &TessellationPolicy::default_fixed(),
    AttributeSet::Basic,
  );

  assert!(patch.attributes.tangent_frame.is_none());
  assert_eq!(patch.levels.outer, [2.0, 2.0, 2.0]);
  assert_eq!(patch.levels.inner, 1.0);
}

// =============================================================================
// Batch 2: Batches
// =============================================================================

#[test]
fn test_empty_batch() {
  let source: Vec<PatchInput> = Vec::new();
  let output = process_batch(&source, &BatchConfig::default());

  assert!(output.is_empty());
  assert_eq!(output.stats.patch_count, 0);
  assert_eq!(output.stats.timing_us, 0);
}

#[test]
fn test_batch_preserves_source_order() {
  let mesh = make_octahedron(Vec3::new(0.0, 0.0, -5.0), 2.0);
  let config = BatchConfig::default();

  let output = process_batch(&mesh, &config);

  assert_eq!(output.len(), mesh.patch_count());
  for (index, patch) in output.patches.iter().enumerate() {
    assert_eq!(
      patch.control_points.corners(),
      mesh.patch(index).positions(),
      "patch {} out of order",
      index
    );
  }
}

#[test]
fn test_batch_stats_for_fixed_policy() {
  let mesh = make_flat_grid(4, 1.0);
  let config = BatchConfig::new(TessellationPolicy::uniform(4.0));

  let output = process_batch(&mesh, &config);

  assert_eq!(output.stats.patch_count, 32);
  assert_eq!(output.stats.min_outer_level, 4.0);
  assert_eq!(output.stats.max_outer_level, 4.0);
  assert_eq!(output.stats.mean_outer_level, 4.0);
  assert_eq!(output.stats.triangle_upper_bound, 32 * 16);
}

#[test]
fn test_batch_floors_hand_built_fixed_levels() {
  let config = BatchConfig::new(TessellationPolicy::Fixed {
    outer: [0.25, 0.0, -3.0],
    inner: 0.0,
  });
  let output = process_batch(&make_flat_grid(2, 1.0), &config);

  assert!(output
    .patches
    .iter()
    .all(|patch| patch.levels.outer == [1.0; 3] && patch.levels.inner == 1.0));
  assert_eq!(output.stats.min_outer_level, 1.0);
}

#[test]
fn test_batch_stats_saturate_for_huge_factor() {
  let config = TessellationConfig::from_toml_str("tessellation_factor = 1.0e8")
    .unwrap()
    .batch_config(Vec3::new(0.0, 0.0, 1.0))
    .unwrap();
  let mesh = make_flat_grid(2, 0.5);

  let output = process_batch(&mesh, &config);

  assert_eq!(output.stats.patch_count, 8);
  assert_eq!(output.stats.max_outer_level, 175.0e8);
  assert_eq!(output.stats.triangle_upper_bound, u64::MAX);
}

#[test]
fn test_batch_levels_drop_away_from_viewer() {
  // Grid spans 0..16 on X/Y; viewer hovers over the origin corner
  let mesh = make_flat_grid(16, 1.0);
  let config = BatchConfig::default().with_uniforms(FrameUniforms::new(Vec3::new(0.0, 0.0, 0.5), 1.0));

  let output = process_batch(&mesh, &config);

  assert_eq!(output.stats.max_outer_level, 175.0);
  assert_eq!(output.stats.min_outer_level, 5.0);

  let first = &output.patches[0];
  let last = output.patches.last().unwrap();
  assert!(first.levels.inner > last.levels.inner);
}

#[test]
fn test_sequential_matches_parallel() {
  let patches = make_patch_cloud(500);
  let config = BatchConfig::default().with_uniforms(FrameUniforms::new(Vec3::new(1.0, -2.0, 3.0), 0.8));

  let parallel = process_batch(&patches, &config);
  let sequential = process_batch_sequential(&patches, &config);

  assert_eq!(parallel.patches, sequential.patches);
  assert_eq!(parallel.stats.patch_count, sequential.stats.patch_count);
  assert_eq!(parallel.stats.min_outer_level, sequential.stats.min_outer_level);
  assert_eq!(parallel.stats.max_outer_level, sequential.stats.max_outer_level);
}

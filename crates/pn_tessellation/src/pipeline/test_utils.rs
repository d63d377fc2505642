//! Test utilities for pipeline tests.
//!
//! Provides procedural meshes and patch fixtures for exercising each stage
//! in isolation.

use glam::{Vec2, Vec3};

use super::source::IndexedMesh;
use crate::types::{InputVertex, PatchInput};

// =============================================================================
// Procedural meshes
// =============================================================================

/// Octahedron of the given radius centered at `center`, normals pointing
/// outward. 6 vertices, 8 triangles.
pub fn make_octahedron(center: Vec3, radius: f32) -> IndexedMesh {
  let directions = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
  ];
  let positions = directions.iter().map(|d| center + *d * radius).collect();
  let normals = directions.to_vec();
  let uvs = directions
    .iter()
    .map(|d| Vec2::new(d.x * 0.5 + 0.5, d.y * 0.5 + 0.5))
    .collect();
  let triangles = vec![
    [0, 2, 4],
    [2, 1, 4],
    [1, 3, 4],
    [3, 0, 4],
    [2, 0, 5],
    [1, 2, 5],
    [3, 1, 5],
    [0, 3, 5],
  ];

  IndexedMesh::new(positions, normals, uvs, triangles).expect("octahedron is valid")
}

/// Flat grid of `cells × cells` quads (two triangles each) in the XY plane,
/// normals +Z, tangents +X, bitangents +Y.
pub fn make_flat_grid(cells: u32, spacing: f32) -> IndexedMesh {
  let side = cells + 1;
  let mut positions = Vec::new();
  let mut uvs = Vec::new();
  for y in 0..side {
    for x in 0..side {
      positions.push(Vec3::new(x as f32 * spacing, y as f32 * spacing, 0.0));
      uvs.push(Vec2::new(x as f32 / cells as f32, y as f32 / cells as f32));
    }
  }
  let vertex_count = positions.len();

  let mut triangles = Vec::new();
  for y in 0..cells {
    for x in 0..cells {
      let i = y * side + x;
      triangles.push([i, i + 1, i + side]);
      triangles.push([i + 1, i + side + 1, i + side]);
    }
  }

  IndexedMesh::new(positions, vec![Vec3::Z; vertex_count], uvs, triangles)
    .and_then(|mesh| mesh.with_tangent_frame(vec![Vec3::X; vertex_count], vec![Vec3::Y; vertex_count]))
    .expect("grid is valid")
}

// =============================================================================
// Patch fixtures
// =============================================================================

/// The unit right triangle in the XY plane with +Z normals.
pub fn unit_right_patch() -> PatchInput {
  PatchInput::new([
    InputVertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::Z, Vec2::new(0.0, 0.0)),
    InputVertex::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z, Vec2::new(1.0, 0.0)),
    InputVertex::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, Vec2::new(0.0, 1.0)),
  ])
}

/// Deterministic spread of curved patches, `count` long.
///
/// Uses a fixed LCG so runs are reproducible without a rand dependency.
pub fn make_patch_cloud(count: usize) -> Vec<PatchInput> {
  let mut state = 0x2545_f491_u32;
  let mut next = move || {
    state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
    (state >> 8) as f32 / (1u32 << 24) as f32 * 2.0 - 1.0
  };

  (0..count)
    .map(|_| {
      let base = Vec3::new(next(), next(), next()) * 12.0;
      let vertices = [0, 1, 2].map(|_| {
        let position = base + Vec3::new(next(), next(), next());
        let normal = Vec3::new(next(), next(), next() + 2.0).normalize();
        InputVertex::new(position, normal, Vec2::new(next(), next()))
          .with_tangent_frame(normal.any_orthonormal_vector(), Vec3::new(next(), next(), next()))
      });
      PatchInput::new(vertices)
    })
    .collect()
}

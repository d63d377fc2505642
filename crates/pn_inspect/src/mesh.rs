//! Procedural test meshes.

use anyhow::{Context, Result};
use clap::ValueEnum;
use glam::{Vec2, Vec3};
use pn_tessellation::IndexedMesh;

/// Shape tessellated by the inspector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MeshKind {
  /// Flat grid in the XZ plane, centered on the origin.
  Grid,
  /// UV sphere centered on the origin.
  Sphere,
}

impl MeshKind {
  /// Build the mesh at `resolution` (grid cells or sphere rings) and `size`
  /// (grid extent or sphere radius).
  pub fn build(self, resolution: u32, size: f32) -> Result<IndexedMesh> {
    match self {
      Self::Grid => grid(resolution, size),
      Self::Sphere => uv_sphere(resolution, size),
    }
  }
}

/// `cells × cells` grid of side `extent`, normals +Y, tangents +X,
/// bitangents +Z.
pub fn grid(cells: u32, extent: f32) -> Result<IndexedMesh> {
  let cells = cells.max(1);
  let side = cells
    .checked_add(1)
    .and_then(|side| side.checked_mul(side).map(|_| side))
    .with_context(|| format!("Grid of {cells} cells exceeds u32 vertex indices"))?;
  let triangle_count = cells
    .checked_mul(cells)
    .and_then(|quads| quads.checked_mul(2))
    .with_context(|| format!("Grid of {cells} cells exceeds u32 triangle count"))?;
  let step = extent / cells as f32;
  let origin = -extent * 0.5;

  let mut positions = Vec::with_capacity(side as usize * side as usize);
  let mut uvs = Vec::with_capacity(positions.capacity());
  for z in 0..side {
    for x in 0..side {
      positions.push(Vec3::new(origin + x as f32 * step, 0.0, origin + z as f32 * step));
      uvs.push(Vec2::new(x as f32 / cells as f32, z as f32 / cells as f32));
    }
  }

  let mut triangles = Vec::with_capacity(triangle_count as usize);
  for z in 0..cells {
    for x in 0..cells {
      let i = z * side + x;
      triangles.push([i, i + side, i + 1]);
      triangles.push([i + 1, i + side, i + side + 1]);
    }
  }

  let count = positions.len();
  let mesh = IndexedMesh::new(positions, vec![Vec3::Y; count], uvs, triangles)?
    .with_tangent_frame(vec![Vec3::X; count], vec![Vec3::Z; count])?;
  Ok(mesh)
}

/// UV sphere with `rings` latitude bands and `2 * rings` segments.
///
/// Poles are duplicated per segment so every vertex has a unique UV.
pub fn uv_sphere(rings: u32, radius: f32) -> Result<IndexedMesh> {
  let rings = rings.max(2);
  let (segments, stride) = rings
    .checked_mul(2)
    .and_then(|segments| {
      let stride = segments.checked_add(1)?;
      // Every vertex index must fit in u32
      stride.checked_mul(rings.checked_add(1)?)?;
      Some((segments, stride))
    })
    .with_context(|| format!("Sphere of {rings} rings exceeds u32 vertex indices"))?;

  let mut positions = Vec::new();
  let mut normals = Vec::new();
  let mut uvs = Vec::new();
  let mut tangents = Vec::new();
  let mut bitangents = Vec::new();

  for ring in 0..=rings {
    let v = ring as f32 / rings as f32;
    let theta = v * std::f32::consts::PI;
    for segment in 0..=segments {
      let u = segment as f32 / segments as f32;
      let phi = u * std::f32::consts::TAU;

      let normal = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
      let tangent = Vec3::new(-phi.sin(), 0.0, phi.cos());

      positions.push(normal * radius);
      normals.push(normal);
      uvs.push(Vec2::new(u, v));
      tangents.push(tangent);
      bitangents.push(normal.cross(tangent));
    }
  }

  let mut triangles = Vec::new();
  for ring in 0..rings {
    for segment in 0..segments {
      let a = ring * stride + segment;
      let b = a + stride;
      if ring != 0 {
        triangles.push([a, a + 1, b]);
      }
      if ring != rings - 1 {
        triangles.push([a + 1, b + 1, b]);
      }
    }
  }

  let mesh = IndexedMesh::new(positions, normals, uvs, triangles)?.with_tangent_frame(tangents, bitangents)?;
  Ok(mesh)
}

#[cfg(test)]
#[path = "mesh_test.rs"]
mod mesh_test;

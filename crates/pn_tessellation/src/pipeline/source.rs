//! Patch sources - where a batch reads its triangles from.
//!
//! The pipeline is generic over [`PatchSource`] so hot paths can specialize
//! at compile time. Engine bridges may hand in `Arc<dyn PatchSource + Send>`.

use std::sync::Arc;

use glam::{Vec2, Vec3};

use crate::error::{MeshError, MeshResult};
use crate::types::{InputVertex, PatchInput};

/// Random-access provider of patches for one batch.
///
/// Implementations must be safe to read from many worker threads at once.
pub trait PatchSource: Sync {
  /// Number of patches in the batch.
  fn patch_count(&self) -> usize;

  /// Patch at `index` (`index < patch_count()`).
  fn patch(&self, index: usize) -> PatchInput;
}

impl PatchSource for [PatchInput] {
  fn patch_count(&self) -> usize {
    self.len()
  }

  fn patch(&self, index: usize) -> PatchInput {
    self[index]
  }
}

impl PatchSource for Vec<PatchInput> {
  fn patch_count(&self) -> usize {
    self.len()
  }

  fn patch(&self, index: usize) -> PatchInput {
    self[index]
  }
}

impl<T: PatchSource + Send + ?Sized> PatchSource for Arc<T> {
  fn patch_count(&self) -> usize {
    (**self).patch_count()
  }

  fn patch(&self, index: usize) -> PatchInput {
    (**self).patch(index)
  }
}

// =============================================================================
// IndexedMesh - shared vertex streams + triangle list
// =============================================================================

/// Indexed triangle mesh already transformed into viewer space.
///
/// Streams are validated on construction, so reading a patch never fails.
#[derive(Clone, Debug, Default)]
pub struct IndexedMesh {
  positions: Vec<Vec3>,
  normals: Vec<Vec3>,
  uvs: Vec<Vec2>,
  tangents: Option<Vec<Vec3>>,
  bitangents: Option<Vec<Vec3>>,
  triangles: Vec<[u32; 3]>,
}

fn check_stream(stream: &'static str, len: usize, expected: usize) -> MeshResult<()> {
  if len != expected {
    return Err(MeshError::StreamLengthMismatch {
      stream,
      len,
      expected,
    });
  }
  Ok(())
}

impl IndexedMesh {
  /// Build a mesh from index-aligned streams and a triangle list.
  pub fn new(
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    uvs: Vec<Vec2>,
    triangles: Vec<[u32; 3]>,
  ) -> MeshResult<Self> {
    let vertex_count = positions.len();
    check_stream("normals", normals.len(), vertex_count)?;
    check_stream("uvs", uvs.len(), vertex_count)?;

    for (triangle, corners) in triangles.iter().enumerate() {
      for &index in corners {
        if index as usize >= vertex_count {
          return Err(MeshError::IndexOutOfRange {
            triangle,
            index,
            vertex_count,
          });
        }
      }
    }

    Ok(Self {
      positions,
      normals,
      uvs,
      tangents: None,
      bitangents: None,
      triangles,
    })
  }

  /// Attach per-vertex tangent and bitangent streams.
  pub fn with_tangent_frame(mut self, tangents: Vec<Vec3>, bitangents: Vec<Vec3>) -> MeshResult<Self> {
    let vertex_count = self.positions.len();
    check_stream("tangents", tangents.len(), vertex_count)?;
    check_stream("bitangents", bitangents.len(), vertex_count)?;
    self.tangents = Some(tangents);
    self.bitangents = Some(bitangents);
    Ok(self)
  }

  pub fn vertex_count(&self) -> usize {
    self.positions.len()
  }

  pub fn triangle_count(&self) -> usize {
    self.triangles.len()
  }

  pub fn has_tangent_frame(&self) -> bool {
    self.tangents.is_some()
  }

  fn vertex(&self, index: u32) -> InputVertex {
    let i = index as usize;
    let mut vertex = InputVertex::new(self.positions[i], self.normals[i], self.uvs[i]);
    if let (Some(tangents), Some(bitangents)) = (&self.tangents, &self.bitangents) {
      vertex = vertex.with_tangent_frame(tangents[i], bitangents[i]);
    }
    vertex
  }
}

impl PatchSource for IndexedMesh {
  fn patch_count(&self) -> usize {
    self.triangles.len()
  }

  fn patch(&self, index: usize) -> PatchInput {
    PatchInput::new(self.triangles[index].map(|corner| self.vertex(corner)))
  }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;

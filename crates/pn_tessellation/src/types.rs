//! Core data types for PN-triangle patches.

use glam::{Vec2, Vec3};
use serde::Deserialize;

use crate::constants::{CONTROL_POINT_COUNT, CONTROL_POINT_NAMES, CORNER_COUNT, EDGE_POINT_COUNT};

/// Upstream vertex as produced by the transform stage.
///
/// Position must live in the same space as the viewer position handed to the
/// level estimator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputVertex {
  /// Vertex position (world or view space).
  pub position: Vec3,

  /// Surface normal (unit vector).
  pub normal: Vec3,

  /// Texture coordinate.
  pub uv: Vec2,

  /// Tangent vector (normal mapping).
  pub tangent: Vec3,

  /// Bitangent vector (normal mapping).
  pub bitangent: Vec3,
}

impl Default for InputVertex {
  fn default() -> Self {
    Self {
      position: Vec3::ZERO,
      normal: Vec3::Y,
      uv: Vec2::ZERO,
      tangent: Vec3::X,
      bitangent: Vec3::Z,
    }
  }
}

impl InputVertex {
  pub fn new(position: Vec3, normal: Vec3, uv: Vec2) -> Self {
    Self {
      position,
      normal,
      uv,
      ..Self::default()
    }
  }

  pub fn with_tangent_frame(mut self, tangent: Vec3, bitangent: Vec3) -> Self {
    self.tangent = tangent;
    self.bitangent = bitangent;
    self
  }
}

/// One triangle worth of upstream vertices, in corner order.
///
/// Corner order defines edge adjacency: edge `i` is the one opposite corner
/// `i` (see [`EDGE_CORNERS`](crate::constants::EDGE_CORNERS)).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PatchInput {
  pub vertices: [InputVertex; CORNER_COUNT],
}

impl PatchInput {
  pub fn new(vertices: [InputVertex; CORNER_COUNT]) -> Self {
    Self { vertices }
  }

  /// Corner positions in corner order.
  #[inline]
  pub fn positions(&self) -> [Vec3; CORNER_COUNT] {
    self.vertices.map(|v| v.position)
  }

  /// Corner normals in corner order.
  #[inline]
  pub fn normals(&self) -> [Vec3; CORNER_COUNT] {
    self.vertices.map(|v| v.normal)
  }
}

/// Which per-corner attributes travel with the patch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeSet {
  /// Normal, UV, tangent and bitangent.
  #[default]
  Full,

  /// Normal and UV only (no normal mapping downstream).
  Basic,
}

impl AttributeSet {
  #[inline]
  pub const fn has_tangent_frame(&self) -> bool {
    matches!(self, Self::Full)
  }
}

/// Per-corner tangent basis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TangentFrame {
  pub tangents: [Vec3; CORNER_COUNT],
  pub bitangents: [Vec3; CORNER_COUNT],
}

/// Per-corner attributes carried through unchanged.
///
/// Index `i` always refers to input corner `i`, the same ordering used by
/// control point generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PatchAttributes {
  pub normals: [Vec3; CORNER_COUNT],
  pub uvs: [Vec2; CORNER_COUNT],
  /// Present only for [`AttributeSet::Full`].
  pub tangent_frame: Option<TangentFrame>,
}

impl PatchAttributes {
  pub fn tangents(&self) -> Option<&[Vec3; CORNER_COUNT]> {
    self.tangent_frame.as_ref().map(|frame| &frame.tangents)
  }

  pub fn bitangents(&self) -> Option<&[Vec3; CORNER_COUNT]> {
    self.tangent_frame.as_ref().map(|frame| &frame.bitangents)
  }
}

/// The 10 control points of a cubic Bézier triangle.
///
/// Field names follow the standard PN-triangle convention where the digits
/// are the barycentric exponents of the corner weights.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlPointSet {
  pub b030: Vec3,
  pub b021: Vec3,
  pub b012: Vec3,
  pub b003: Vec3,
  pub b102: Vec3,
  pub b201: Vec3,
  pub b300: Vec3,
  pub b210: Vec3,
  pub b120: Vec3,
  pub b111: Vec3,
}

impl ControlPointSet {
  /// Corner points in input corner order (B030, B003, B300).
  #[inline]
  pub fn corners(&self) -> [Vec3; CORNER_COUNT] {
    [self.b030, self.b003, self.b300]
  }

  /// Edge points in canonical order.
  #[inline]
  pub fn edge_points(&self) -> [Vec3; EDGE_POINT_COUNT] {
    [
      self.b021, self.b012, self.b102, self.b201, self.b210, self.b120,
    ]
  }

  /// All points in canonical output order (see
  /// [`CONTROL_POINT_NAMES`]).
  pub fn to_array(&self) -> [Vec3; CONTROL_POINT_COUNT] {
    [
      self.b030, self.b021, self.b012, self.b003, self.b102, self.b201, self.b300, self.b210,
      self.b120, self.b111,
    ]
  }

  /// Tightly packed positions for upload to a patch buffer.
  pub fn to_flat_array(&self) -> [[f32; 3]; CONTROL_POINT_COUNT] {
    self.to_array().map(|p| p.to_array())
  }

  /// Look up a point by its PN-triangle name (e.g. `"B210"`).
  pub fn by_name(&self, name: &str) -> Option<Vec3> {
    CONTROL_POINT_NAMES
      .iter()
      .position(|&n| n.eq_ignore_ascii_case(name))
      .map(|idx| self.to_array()[idx])
  }
}

/// Subdivision levels consumed by the fixed-function tessellator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TessellationLevels {
  /// One level per edge, indexed by the opposite corner.
  pub outer: [f32; CORNER_COUNT],

  /// Interior ring density.
  pub inner: f32,
}

impl TessellationLevels {
  pub fn new(outer: [f32; CORNER_COUNT], inner: f32) -> Self {
    Self { outer, inner }
  }

  pub fn min_outer(&self) -> f32 {
    self.outer.iter().copied().fold(f32::INFINITY, f32::min)
  }

  pub fn max_outer(&self) -> f32 {
    self.outer.iter().copied().fold(f32::NEG_INFINITY, f32::max)
  }

  /// Upper bound on emitted micro-triangles for a triangle domain with equal
  /// spacing: a uniform level `n` produces `n²` triangles. Saturates at
  /// `u64::MAX` for levels too large to square.
  pub fn triangle_upper_bound(&self) -> u64 {
    let n = self.max_outer().max(self.inner).ceil().max(1.0) as u64;
    n.saturating_mul(n)
  }
}

/// Final per-patch record handed to the evaluation stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutputPatch {
  pub control_points: ControlPointSet,
  pub attributes: PatchAttributes,
  pub levels: TessellationLevels,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

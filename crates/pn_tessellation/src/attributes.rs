//! Per-corner attribute collection.
//!
//! Gathers normal, UV and (optionally) tangent frame from the three input
//! vertices. Values are copied unchanged; the curvature math only reads the
//! normals.

use crate::types::{AttributeSet, PatchAttributes, PatchInput, TangentFrame};

/// Collect per-corner attributes for one patch.
///
/// Index `i` of every output array is input corner `i`.
#[inline]
pub fn collect(input: &PatchInput, attribute_set: AttributeSet) -> PatchAttributes {
  let vertices = &input.vertices;

  let tangent_frame = attribute_set.has_tangent_frame().then(|| TangentFrame {
    tangents: vertices.map(|v| v.tangent),
    bitangents: vertices.map(|v| v.bitangent),
  });

  PatchAttributes {
    normals: vertices.map(|v| v.normal),
    uvs: vertices.map(|v| v.uv),
    tangent_frame,
  }
}

#[cfg(test)]
#[path = "attributes_test.rs"]
mod attributes_test;

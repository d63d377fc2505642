//! Tangent-plane projection for edge control points.

use glam::Vec3;

/// Orthogonally project `point` onto the plane through `plane_point` with
/// normal `plane_normal`.
///
/// `plane_normal` must be unit length. It is not normalized here; a longer or
/// shorter normal scales the correction term instead.
#[inline(always)]
pub fn project_to_plane(point: Vec3, plane_point: Vec3, plane_normal: Vec3) -> Vec3 {
  let offset = (point - plane_point).dot(plane_normal);
  point - offset * plane_normal
}

#[cfg(test)]
#[path = "projection_test.rs"]
mod projection_test;

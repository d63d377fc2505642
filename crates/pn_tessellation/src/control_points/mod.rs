//! PN-triangle control point generation.
//!
//! Builds a cubic Bézier triangle from three corners and their normals:
//!
//! 1. Corners are copied verbatim (B030, B003, B300).
//! 2. Each edge gets two points at 1/3 and 2/3 of its length.
//! 3. Each edge point is projected onto the tangent plane of its nearer corner.
//! 4. B111 is the average of the projected edge points, pushed away from the
//!    flat centroid by half the centroid→average distance.
//!
//! ```text
//!   corner 0 (B030) ── B021 ── B012 ── corner 1 (B003)
//!        \                                  /
//!        B120                            B102
//!          \             B111            /
//!          B210                       B201
//!             \                        /
//!              ──── corner 2 (B300) ───
//! ```
//!
//! Edges are named after the corner they do not touch: `EdgeB300` runs
//! B030→B003, `EdgeB030` runs B003→B300, `EdgeB003` runs B300→B030.

pub mod projection;

use glam::Vec3;

pub use projection::project_to_plane;

use crate::constants::{CORNER_COUNT, EDGE_POINT_COUNT};
use crate::types::ControlPointSet;

/// Corner whose tangent plane each edge point (canonical edge order) is
/// projected onto.
pub const EDGE_POINT_ANCHORS: [usize; EDGE_POINT_COUNT] = [
  0, // B021 → B030
  1, // B012 → B003
  1, // B102 → B003
  2, // B201 → B300
  2, // B210 → B300
  0, // B120 → B030
];

/// Edge points before projection, in canonical edge order
/// (B021, B012, B102, B201, B210, B120).
///
/// Each pair lies at 1/3 and 2/3 along its edge, measured from the edge's
/// start corner.
#[inline]
pub fn linear_edge_points(corners: &[Vec3; CORNER_COUNT]) -> [Vec3; EDGE_POINT_COUNT] {
  let [b030, b003, b300] = *corners;

  let edge_b300 = b003 - b030;
  let edge_b030 = b300 - b003;
  let edge_b003 = b030 - b300;

  let third_b300 = edge_b300 / 3.0;
  let third_b030 = edge_b030 / 3.0;
  let third_b003 = edge_b003 / 3.0;

  [
    b030 + third_b300,
    b030 + third_b300 * 2.0,
    b003 + third_b030,
    b003 + third_b030 * 2.0,
    b300 + third_b003,
    b300 + third_b003 * 2.0,
  ]
}

/// Unweighted centroid of the three corners.
#[inline]
pub fn corner_centroid(corners: &[Vec3; CORNER_COUNT]) -> Vec3 {
  let [b030, b003, b300] = *corners;
  (b003 + b030 + b300) / 3.0
}

/// Generate the 10 control points of a PN-triangle.
///
/// Normals must be unit length. Degenerate triangles produce a degenerate but
/// well-defined set; nothing here can fail.
pub fn generate(corners: [Vec3; CORNER_COUNT], normals: [Vec3; CORNER_COUNT]) -> ControlPointSet {
  let mut edge = linear_edge_points(&corners);
  for (point, &anchor) in edge.iter_mut().zip(EDGE_POINT_ANCHORS.iter()) {
    *point = project_to_plane(*point, corners[anchor], normals[anchor]);
  }

  let center = corner_centroid(&corners);
  let average = (edge[0] + edge[1] + edge[2] + edge[3] + edge[4] + edge[5]) / 6.0;
  let b111 = average + (average - center) / 2.0;

  let [b021, b012, b102, b201, b210, b120] = edge;
  ControlPointSet {
    b030: corners[0],
    b021,
    b012,
    b003: corners[1],
    b102,
    b201,
    b300: corners[2],
    b210,
    b120,
    b111,
  }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

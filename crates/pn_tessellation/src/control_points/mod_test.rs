use glam::Vec3;

use super::*;

const EPSILON: f32 = 1e-5;

fn assert_close(a: Vec3, b: Vec3, what: &str) {
  assert!(
    (a - b).length() < EPSILON,
    "{}: expected {:?}, got {:?}",
    what,
    b,
    a
  );
}

fn unit_right_triangle() -> [Vec3; 3] {
  [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
  ]
}

/// Octant of the unit sphere: corners on the axes, normals pointing outward.
fn sphere_octant() -> ([Vec3; 3], [Vec3; 3]) {
  let corners = [Vec3::X, Vec3::Y, Vec3::Z];
  (corners, corners)
}

// =========================================================================
// Corners
// =========================================================================

#[test]
fn test_corners_are_copied_bit_for_bit() {
  let corners = [
    Vec3::new(0.1, -7.3, 1e-7),
    Vec3::new(123.456, 0.333_333_3, -0.0),
    Vec3::new(f32::MIN_POSITIVE, 9.99, -42.0),
  ];
  let normals = [Vec3::Z, Vec3::X, Vec3::Y];

  let points = generate(corners, normals);

  assert_eq!(points.b030.to_array(), corners[0].to_array());
  assert_eq!(points.b003.to_array(), corners[1].to_array());
  assert_eq!(points.b300.to_array(), corners[2].to_array());
  assert_eq!(points.corners(), corners);
}

// =========================================================================
// Edge points
// =========================================================================

#[test]
fn test_linear_edge_points_sit_at_thirds() {
  let corners = [
    Vec3::new(-3.0, 0.0, 6.0),
    Vec3::new(3.0, 9.0, 0.0),
    Vec3::new(0.0, -6.0, 3.0),
  ];
  let edge = linear_edge_points(&corners);
  let [c0, c1, c2] = corners;

  assert_close(edge[0], c0.lerp(c1, 1.0 / 3.0), "B021");
  assert_close(edge[1], c0.lerp(c1, 2.0 / 3.0), "B012");
  assert_close(edge[2], c1.lerp(c2, 1.0 / 3.0), "B102");
  assert_close(edge[3], c1.lerp(c2, 2.0 / 3.0), "B201");
  assert_close(edge[4], c2.lerp(c0, 1.0 / 3.0), "B210");
  assert_close(edge[5], c2.lerp(c0, 2.0 / 3.0), "B120");
}

#[test]
fn test_anchors_are_nearer_corners() {
  let corners = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(9.0, 0.0, 0.0),
    Vec3::new(0.0, 9.0, 0.0),
  ];
  let edge = linear_edge_points(&corners);

  for (idx, (&point, &anchor)) in edge.iter().zip(EDGE_POINT_ANCHORS.iter()).enumerate() {
    let anchor_distance = point.distance(corners[anchor]);
    for (corner_idx, corner) in corners.iter().enumerate() {
      assert!(
        anchor_distance <= point.distance(*corner) + EPSILON,
        "edge point {} anchored to {} but corner {} is closer",
        idx,
        anchor,
        corner_idx
      );
    }
  }
}

#[test]
fn test_edge_points_lie_on_anchor_tangent_planes() {
  let corners = [
    Vec3::new(0.2, 1.0, -0.5),
    Vec3::new(2.0, 0.3, 0.4),
    Vec3::new(0.9, -1.5, 1.1),
  ];
  let normals = [
    Vec3::new(0.3, 1.0, 0.2).normalize(),
    Vec3::new(1.0, 0.1, 0.5).normalize(),
    Vec3::new(-0.2, -1.0, 0.6).normalize(),
  ];

  let points = generate(corners, normals);

  for (idx, (&point, &anchor)) in points
    .edge_points()
    .iter()
    .zip(EDGE_POINT_ANCHORS.iter())
    .enumerate()
  {
    let residual = (point - corners[anchor]).dot(normals[anchor]);
    assert!(
      residual.abs() < EPSILON,
      "edge point {} off its tangent plane by {}",
      idx,
      residual
    );
  }
}

#[test]
fn test_flat_triangle_projection_is_noop() {
  let corners = unit_right_triangle();
  let points = generate(corners, [Vec3::Z; 3]);

  assert_eq!(points.edge_points(), linear_edge_points(&corners));
}

// =========================================================================
// Center point
// =========================================================================

#[test]
fn test_center_extrapolates_half_the_centroid_offset() {
  let corners = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(2.0, 0.0, 0.5),
    Vec3::new(0.5, 2.0, 0.0),
  ];
  let normals = [
    Vec3::new(-0.3, -0.3, 1.0).normalize(),
    Vec3::new(0.4, -0.1, 1.0).normalize(),
    Vec3::new(0.0, 0.5, 1.0).normalize(),
  ];

  let points = generate(corners, normals);

  let candidate = points.edge_points().iter().copied().sum::<Vec3>() / 6.0;
  let centroid = corner_centroid(&corners);
  assert_close(points.b111, candidate + (candidate - centroid) * 0.5, "B111");
}

#[test]
fn test_flat_triangle_center_is_centroid() {
  let corners = unit_right_triangle();
  let points = generate(corners, [Vec3::Z; 3]);

  assert_close(points.b111, corner_centroid(&corners), "B111");
  assert_eq!(points.b111.z, 0.0);
}

#[test]
fn test_sphere_octant_bulges_outward() {
  let (corners, normals) = sphere_octant();
  let points = generate(corners, normals);

  // Every edge point has one coordinate at 1, one at 1/3, one at 0, so the
  // average is 4/9 per axis and B111 = 4/9 + (4/9 - 1/3) / 2 = 1/2.
  assert_close(points.b111, Vec3::splat(0.5), "B111");
  assert!(points.b111.length() > corner_centroid(&corners).length());

  assert_close(points.b021, Vec3::new(1.0, 1.0 / 3.0, 0.0), "B021");
  assert_close(points.b012, Vec3::new(1.0 / 3.0, 1.0, 0.0), "B012");
}

// =========================================================================
// Degenerate input
// =========================================================================

#[test]
fn test_collapsed_triangle_is_well_defined() {
  let p = Vec3::new(1.0, 2.0, 3.0);
  let points = generate([p; 3], [Vec3::Y; 3]);

  for point in points.to_array() {
    assert_close(point, p, "collapsed point");
  }
}

#[test]
fn test_colinear_triangle_stays_finite() {
  let corners = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(2.0, 0.0, 0.0),
  ];
  let points = generate(corners, [Vec3::Y, Vec3::Z, Vec3::Y]);

  assert!(points.to_array().iter().all(|p| p.is_finite()));
}

#[test]
fn test_generation_is_deterministic() {
  let (corners, normals) = sphere_octant();
  assert_eq!(generate(corners, normals), generate(corners, normals));
}

//! Patch layout constants for cubic PN-triangles.
//!
//! # Control Point Layout
//!
//! ```text
//!      B003-------B012-------B021-------B030
//!          \      /  \       /  \       /
//!           \    /    \     /    \     /
//!            \  /      \   /      \   /
//!            B102-------B111-------B120
//!               \      /   \      /
//!                \    /     \    /
//!                 \  /       \  /
//!                 B201-------B210
//!                    \       /
//!                     \     /
//!                      \   /
//!                      B300
//! ```
//!
//! Input corner `i` maps onto the patch as:
//!
//! ```text
//! corner 0 → B030
//! corner 1 → B003
//! corner 2 → B300
//! ```
//!
//! # Edge Convention
//!
//! Edges (and their outer tessellation levels) are indexed by the corner they
//! do NOT touch:
//!
//! ```text
//! outer[0] → edge corner1–corner2 (B003–B300)
//! outer[1] → edge corner2–corner0 (B300–B030)
//! outer[2] → edge corner0–corner1 (B030–B003)
//! ```

/// Number of corners per triangular patch.
pub const CORNER_COUNT: usize = 3;

/// Number of control points in a cubic Bézier triangle.
pub const CONTROL_POINT_COUNT: usize = 10;

/// Number of interior edge control points (two per edge).
pub const EDGE_POINT_COUNT: usize = 6;

/// Hardware subdividers treat levels as segment counts; nothing below one.
pub const MIN_TESSELLATION_LEVEL: f32 = 1.0;

/// Outer level that the inner level mirrors (edge opposite corner 2).
pub const INNER_LEVEL_SOURCE_EDGE: usize = 2;

/// Default distance band upper bounds (inclusive), in world units.
pub const DEFAULT_BAND_THRESHOLDS: [f32; 4] = [2.0, 4.0, 6.0, 8.0];

/// Default base level per band. One more entry than thresholds: the last
/// level applies beyond the final threshold.
pub const DEFAULT_BAND_LEVELS: [f32; 5] = [175.0, 80.0, 20.0, 10.0, 5.0];

/// Default outer levels for the fixed policy.
pub const DEFAULT_FIXED_OUTER: [f32; 3] = [2.0, 2.0, 2.0];

/// Default inner level for the fixed policy.
pub const DEFAULT_FIXED_INNER: f32 = 1.0;

/// Corner pair for each edge, indexed by the opposite corner.
///
/// Pairs are ordered the way distances are averaged: `(d1, d2)`, `(d2, d0)`,
/// `(d0, d1)`.
pub const EDGE_CORNERS: [[usize; 2]; CORNER_COUNT] = [
  [1, 2], // opposite corner 0
  [2, 0], // opposite corner 1
  [0, 1], // opposite corner 2
];

/// Canonical control point names in output order.
pub const CONTROL_POINT_NAMES: [&str; CONTROL_POINT_COUNT] = [
  "B030", "B021", "B012", "B003", "B102", "B201", "B300", "B210", "B120", "B111",
];

/// Index of the given input corner within [`CONTROL_POINT_NAMES`] order.
#[inline(always)]
pub const fn corner_slot(corner: usize) -> usize {
  match corner {
    0 => 0, // B030
    1 => 3, // B003
    _ => 6, // B300
  }
}

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;

//! Output record assembly.

use crate::types::{ControlPointSet, OutputPatch, PatchAttributes, TessellationLevels};

/// Merge the three per-patch results into the record read by the evaluation
/// stage. No computation; attribute index `i` stays bound to corner `i`.
#[inline]
pub fn emit(
  control_points: ControlPointSet,
  attributes: PatchAttributes,
  levels: TessellationLevels,
) -> OutputPatch {
  OutputPatch {
    control_points,
    attributes,
    levels,
  }
}

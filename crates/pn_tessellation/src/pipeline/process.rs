//! Batch Processor
//!
//! Runs collect → generate → estimate → emit for every patch of a source,
//! one rayon task per patch. Patches share nothing but the read-only
//! [`BatchConfig`], so no synchronization is needed beyond the implicit join
//! at the end of the batch.
//!
//! # Usage
//!
//! ```ignore
//! let config = BatchConfig::new(TessellationPolicy::banded())
//!     .with_uniforms(FrameUniforms::new(camera_position, 1.0));
//!
//! let output = process_batch(&mesh, &config);
//! upload_patches(&output.patches);
//! ```

use rayon::prelude::*;
use web_time::Instant;

use super::source::PatchSource;
use super::types::{BatchConfig, BatchOutput, BatchStats};
use crate::attributes;
use crate::control_points;
use crate::emitter;
use crate::lod::{self, FrameUniforms, TessellationPolicy};
use crate::types::{AttributeSet, OutputPatch, PatchInput};

/// Process a single patch.
///
/// Pure function: the same input and configuration always produce the same
/// record.
#[inline]
pub fn process_patch(
  input: &PatchInput,
  uniforms: &FrameUniforms,
  policy: &TessellationPolicy,
  attribute_set: AttributeSet,
) -> OutputPatch {
  let attributes = attributes::collect(input, attribute_set);
  let corners = input.positions();
  let control_points = control_points::generate(corners, attributes.normals);
  let levels = lod::estimate(policy, uniforms, &control_points.corners());
  emitter::emit(control_points, attributes, levels)
}

/// Process every patch of `source` in parallel.
///
/// Output order matches source order regardless of scheduling.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, name = "pipeline::process_batch"))]
pub fn process_batch<S: PatchSource + ?Sized>(source: &S, config: &BatchConfig) -> BatchOutput {
  let count = source.patch_count();
  if count == 0 {
    return BatchOutput::default();
  }

  let start = Instant::now();

  let patches: Vec<OutputPatch> = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("patch_stage", patches = count).entered();

    (0..count)
      .into_par_iter()
      .map(|index| {
        process_patch(
          &source.patch(index),
          &config.uniforms,
          &config.policy,
          config.attribute_set,
        )
      })
      .collect()
  };

  let timing_us = start.elapsed().as_micros() as u64;

  let stats = {
    #[cfg(feature = "tracing")]
    let _span = tracing::info_span!("batch_stats").entered();

    BatchStats {
      timing_us,
      ..BatchStats::from_patches(&patches)
    }
  };

  #[cfg(feature = "tracing")]
  tracing::debug!(
    patches = stats.patch_count,
    policy = config.policy.name(),
    min_level = stats.min_outer_level,
    max_level = stats.max_outer_level,
    timing_us = stats.timing_us,
    "batch processed"
  );

  BatchOutput { patches, stats }
}

/// Single-threaded variant of [`process_batch`].
///
/// Used where a rayon pool is unavailable (e.g. wasm without threads) and as
/// the reference for consistency checks.
pub fn process_batch_sequential<S: PatchSource + ?Sized>(
  source: &S,
  config: &BatchConfig,
) -> BatchOutput {
  let start = Instant::now();

  let patches: Vec<OutputPatch> = (0..source.patch_count())
    .map(|index| {
      process_patch(
        &source.patch(index),
        &config.uniforms,
        &config.policy,
        config.attribute_set,
      )
    })
    .collect();

  let stats = BatchStats {
    timing_us: start.elapsed().as_micros() as u64,
    ..BatchStats::from_patches(&patches)
  };

  BatchOutput { patches, stats }
}

#[cfg(test)]
#[path = "process_test.rs"]
mod process_test;

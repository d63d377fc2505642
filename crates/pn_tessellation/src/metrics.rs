//! Engine-agnostic tessellation statistics.
//!
//! Feature-gated and runtime-toggled so recording is a no-op unless the
//! `metrics` feature is compiled in and [`COLLECT_METRICS`] is set.
//!
//! # Usage
//!
//! ```ignore
//! use pn_tessellation::metrics::{TessellationMetrics, COLLECT_METRICS};
//!
//! // Compile with --features metrics
//! // Runtime toggle:
//! COLLECT_METRICS.store(false, Ordering::Relaxed);
//!
//! // After each batch:
//! metrics.record_batch(&output);
//! println!("{:.1} us avg", metrics.avg_batch_timing_us());
//! ```

use std::collections::VecDeque;
use std::sync::atomic::AtomicBool;
#[cfg(feature = "metrics")]
use std::sync::atomic::Ordering;

use crate::pipeline::BatchOutput;

/// Number of power-of-two level buckets.
pub const LEVEL_BUCKETS: usize = 16;

/// Runtime toggle for metrics collection.
pub static COLLECT_METRICS: AtomicBool = AtomicBool::new(true);

/// Check if metrics collection is enabled (both compile-time and runtime).
#[inline]
pub fn is_enabled() -> bool {
  #[cfg(feature = "metrics")]
  {
    COLLECT_METRICS.load(Ordering::Relaxed)
  }
  #[cfg(not(feature = "metrics"))]
  {
    false
  }
}

/// Histogram bucket for a tessellation level: `floor(log2(level))`, clamped
/// to `0..LEVEL_BUCKETS`. Levels below 1 (never produced) land in bucket 0.
#[inline]
pub fn level_bucket(level: f32) -> usize {
  let level = if level.is_nan() { 1.0 } else { level.max(1.0) };
  (level.log2().floor() as usize).min(LEVEL_BUCKETS - 1)
}

/// Level range `[lo, hi)` covered by a bucket.
pub fn bucket_range(bucket: usize) -> (f32, f32) {
  let lo = (1u32 << bucket.min(LEVEL_BUCKETS - 1)) as f32;
  (lo, lo * 2.0)
}

// =============================================================================
// RollingWindow
// =============================================================================

/// Fixed-capacity history of per-batch samples; the oldest sample is evicted
/// once full.
#[derive(Debug, Clone)]
pub struct RollingWindow {
  samples: VecDeque<u64>,
  capacity: usize,
}

impl RollingWindow {
  pub fn new(capacity: usize) -> Self {
    Self {
      samples: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  pub fn push(&mut self, sample: u64) {
    if self.capacity == 0 {
      return;
    }
    if self.samples.len() == self.capacity {
      self.samples.pop_front();
    }
    self.samples.push_back(sample);
  }

  pub fn is_empty(&self) -> bool {
    self.samples.is_empty()
  }

  pub fn clear(&mut self) {
    self.samples.clear();
  }

  /// Mean of the retained samples, 0 when empty.
  pub fn average(&self) -> f64 {
    if self.samples.is_empty() {
      return 0.0;
    }
    let total: f64 = self.samples.iter().map(|&sample| sample as f64).sum();
    total / self.samples.len() as f64
  }
}

// =============================================================================
// TessellationMetrics
// =============================================================================

/// Statistics accumulated across batches.
#[derive(Debug, Clone)]
pub struct TessellationMetrics {
  /// Count of outer edge levels per power-of-two bucket (see [`level_bucket`]).
  pub outer_level_histogram: [u64; LEVEL_BUCKETS],
  /// Count of inner levels per power-of-two bucket.
  pub inner_level_histogram: [u64; LEVEL_BUCKETS],

  /// Rolling window of batch times in microseconds.
  pub batch_timings: RollingWindow,
  /// Rolling window of per-batch micro-triangle upper bounds.
  pub triangle_estimates: RollingWindow,

  /// Last batch time in microseconds.
  pub last_batch_us: u64,
  /// Patches in the last batch.
  pub last_batch_patches: usize,

  /// Total patches processed this session.
  pub total_patches: u64,
  /// Total batches processed this session.
  pub total_batches: u64,
}

impl Default for TessellationMetrics {
  fn default() -> Self {
    Self {
      outer_level_histogram: [0; LEVEL_BUCKETS],
      inner_level_histogram: [0; LEVEL_BUCKETS],
      batch_timings: RollingWindow::new(128),
      triangle_estimates: RollingWindow::new(128),
      last_batch_us: 0,
      last_batch_patches: 0,
      total_patches: 0,
      total_batches: 0,
    }
  }
}

impl TessellationMetrics {
  pub fn new() -> Self {
    Self::default()
  }

  /// Reset per-window statistics. Session totals are cumulative and kept.
  pub fn reset(&mut self) {
    self.outer_level_histogram.fill(0);
    self.inner_level_histogram.fill(0);
    self.batch_timings.clear();
    self.triangle_estimates.clear();
    self.last_batch_us = 0;
    self.last_batch_patches = 0;
  }

  /// Record a finished batch.
  pub fn record_batch(&mut self, output: &BatchOutput) {
    if !is_enabled() {
      return;
    }

    for patch in &output.patches {
      for &level in &patch.levels.outer {
        self.outer_level_histogram[level_bucket(level)] += 1;
      }
      self.inner_level_histogram[level_bucket(patch.levels.inner)] += 1;
    }

    self.batch_timings.push(output.stats.timing_us);
    self.triangle_estimates.push(output.stats.triangle_upper_bound);
    self.last_batch_us = output.stats.timing_us;
    self.last_batch_patches = output.stats.patch_count;
    self.total_patches += output.stats.patch_count as u64;
    self.total_batches += 1;
  }

  /// Total outer edges counted in the histogram.
  pub fn total_outer_edges(&self) -> u64 {
    self.outer_level_histogram.iter().sum()
  }

  /// Average batch time in microseconds.
  pub fn avg_batch_timing_us(&self) -> f64 {
    self.batch_timings.average()
  }

  /// Average micro-triangle upper bound per batch.
  pub fn avg_triangle_estimate(&self) -> f64 {
    self.triangle_estimates.average()
  }
}

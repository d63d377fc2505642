//! PN-triangle tessellation inspector.
//!
//! Loads a tessellation config, optionally prints the distance → level curve
//! of its policy, then tessellates a procedural mesh from a sequence of viewer
//! positions and reports per-frame level statistics.
//!
//! ```text
//! pn_inspect --config tessellation.toml --curve
//! pn_inspect --mesh sphere --resolution 24 --size 3 --viewer 0,0,6 --frames 8 --dolly 0,0,-0.5
//! RUST_LOG=pn_tessellation=debug pn_inspect
//! ```

mod mesh;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use glam::Vec3;
use pn_tessellation::metrics::{bucket_range, TessellationMetrics, LEVEL_BUCKETS};
use pn_tessellation::{AsyncTessellator, TessellationConfig, TessellationPolicy, TessellationRequest};
use tracing_subscriber::EnvFilter;

use mesh::MeshKind;

/// Inspector for PN-triangle tessellation levels.
#[derive(Parser, Debug)]
#[command(name = "pn_inspect")]
#[command(about = "Prints tessellation level curves and per-frame patch statistics")]
struct Args {
  /// Path to a tessellation TOML file (default: built-in banded policy).
  #[arg(short, long)]
  config: Option<PathBuf>,

  /// Override the configured tessellation factor.
  #[arg(short, long)]
  factor: Option<f32>,

  /// Viewer position for the first frame, as `x,y,z`.
  #[arg(short, long, value_parser = parse_vec3, default_value = "0,2,0")]
  viewer: Vec3,

  /// Viewer offset applied per frame, as `x,y,z`.
  #[arg(long, value_parser = parse_vec3, default_value = "0,1,0")]
  dolly: Vec3,

  /// Number of frames to tessellate.
  #[arg(long, default_value_t = 1)]
  frames: u32,

  /// Procedural mesh to tessellate.
  #[arg(short, long, value_enum, default_value_t = MeshKind::Grid)]
  mesh: MeshKind,

  /// Grid cells per side, or sphere rings.
  #[arg(short, long, default_value_t = 32)]
  resolution: u32,

  /// Grid extent, or sphere radius.
  #[arg(short, long, default_value_t = 16.0)]
  size: f32,

  /// Print the distance → level curve before tessellating.
  #[arg(long)]
  curve: bool,

  /// Farthest distance sampled by `--curve`.
  #[arg(long, default_value_t = 12.0)]
  curve_max: f32,

  /// Distance step for `--curve`.
  #[arg(long, default_value_t = 0.5)]
  curve_step: f32,
}

fn parse_vec3(s: &str) -> std::result::Result<Vec3, String> {
  let parts: Vec<&str> = s.split(',').map(str::trim).collect();
  let &[x, y, z] = parts.as_slice() else {
    return Err(format!("expected x,y,z but got {s:?}"));
  };
  let parse = |v: &str| v.parse::<f32>().map_err(|e| format!("invalid component {v:?}: {e}"));
  Ok(Vec3::new(parse(x)?, parse(y)?, parse(z)?))
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let args = Args::parse();

  let mut config = match &args.config {
    Some(path) => {
      println!("Loading config from: {}", path.display());
      TessellationConfig::load(path).with_context(|| format!("Failed to load config: {}", path.display()))?
    }
    None => TessellationConfig::default(),
  };
  if let Some(factor) = args.factor {
    config = config.with_tessellation_factor(factor);
    config.validate().context("Invalid --factor")?;
  }

  let policy = config.policy().context("Building tessellation policy")?;
  println!(
    "Policy: {} | factor {} | attributes {:?}",
    policy.name(),
    config.tessellation_factor,
    config.attributes
  );

  if args.curve {
    print_curve(&policy, config.tessellation_factor, args.curve_max, args.curve_step)?;
  }

  let mesh = Arc::new(
    args
      .mesh
      .build(args.resolution, args.size)
      .with_context(|| format!("Building {:?} mesh", args.mesh))?,
  );
  println!(
    "Mesh: {:?} | {} vertices | {} patches",
    args.mesh,
    mesh.vertex_count(),
    mesh.triangle_count()
  );

  let mut tessellator = AsyncTessellator::new();
  let mut metrics = TessellationMetrics::new();

  println!("\n{:>5}  {:>24}  {:>8}  {:>8}  {:>8}  {:>12}  {:>8}", "frame", "viewer", "min", "mean", "max", "triangles", "us");
  for frame in 0..args.frames {
    let viewer = args.viewer + args.dolly * frame as f32;
    let batch_config = config.batch_config(viewer)?;

    tessellator.start(TessellationRequest {
      frame: frame as u64,
      source: Arc::clone(&mesh),
      config: batch_config,
    });
    let result = tessellator
      .wait()
      .with_context(|| format!("Frame {frame} produced no result"))?;

    let stats = &result.output.stats;
    println!(
      "{:>5}  {:>24}  {:>8.2}  {:>8.2}  {:>8.2}  {:>12}  {:>8}",
      result.frame,
      format!("({:.2}, {:.2}, {:.2})", viewer.x, viewer.y, viewer.z),
      stats.min_outer_level,
      stats.mean_outer_level,
      stats.max_outer_level,
      stats.triangle_upper_bound,
      stats.timing_us
    );
    metrics.record_batch(&result.output);
  }

  print_summary(&metrics);
  Ok(())
}

/// Upper bound on rows printed by `--curve`.
const MAX_CURVE_SAMPLES: usize = 10_000;

/// Distances sampled by `--curve`: `0, step, 2 * step, ..` up to `max_distance`.
fn curve_distances(max_distance: f32, step: f32) -> Result<Vec<f32>> {
  if !max_distance.is_finite() || max_distance < 0.0 {
    bail!("--curve-max must be finite and >= 0, got {max_distance}");
  }
  if !step.is_finite() || step <= 0.0 || max_distance + step <= max_distance {
    bail!("--curve-step {step} is too small to advance past {max_distance}");
  }
  let samples = ((max_distance / step).floor() as usize).saturating_add(1);
  if samples > MAX_CURVE_SAMPLES {
    bail!("--curve-step {step} yields {samples} samples (max {MAX_CURVE_SAMPLES})");
  }
  Ok((0..samples).map(|i| i as f32 * step).collect())
}

/// Print the level an edge gets when both endpoints sit at each sampled distance.
fn print_curve(policy: &TessellationPolicy, factor: f32, max_distance: f32, step: f32) -> Result<()> {
  println!("\nDistance → level:");
  match policy {
    TessellationPolicy::Banded(bands) => {
      for (i, level) in bands.levels().iter().enumerate() {
        let range = match (i.checked_sub(1).map(|j| bands.thresholds()[j]), bands.thresholds().get(i)) {
          (None, Some(hi)) => format!("d <= {hi}"),
          (Some(lo), Some(hi)) => format!("{lo} < d <= {hi}"),
          (Some(lo), None) => format!("d > {lo}"),
          (None, None) => "any d".to_string(),
        };
        println!("  band {i}: {range:<16} base {level}");
      }

      for distance in curve_distances(max_distance, step)? {
        let level = bands.level(distance, factor);
        println!("  {distance:>6.2}  {level:>8.2}  {}", "#".repeat(level.log2().ceil().max(1.0) as usize));
      }
    }
    TessellationPolicy::Fixed { outer, inner } => {
      println!("  view independent: outer {outer:?}, inner {inner}");
    }
  }
  Ok(())
}

fn print_summary(metrics: &TessellationMetrics) {
  println!(
    "\n{} batches | {} patches | avg {:.1} us | avg {:.0} triangles/batch",
    metrics.total_batches,
    metrics.total_patches,
    metrics.avg_batch_timing_us(),
    metrics.avg_triangle_estimate()
  );

  let total = metrics.total_outer_edges();
  if total == 0 {
    return;
  }

  println!("Outer level histogram:");
  for bucket in 0..LEVEL_BUCKETS {
    let count = metrics.outer_level_histogram[bucket];
    if count == 0 {
      continue;
    }
    let (lo, hi) = bucket_range(bucket);
    let share = count as f64 / total as f64;
    println!(
      "  [{lo:>6}, {hi:>6})  {count:>10}  {:>5.1}%  {}",
      share * 100.0,
      "#".repeat((share * 40.0).round() as usize)
    );
  }
}

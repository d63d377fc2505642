//! pn_tessellation - Engine independent PN-triangle patch preparation
//!
//! This crate turns flat triangles with per-corner normals into curved
//! PN-triangle patches: ten cubic Bézier control points per triangle, plus
//! tessellation levels chosen from the distance between the viewer and each
//! patch corner. The output feeds a hardware (or software) evaluation stage;
//! evaluating the Bézier surface itself is not done here.
//!
//! # Features
//!
//! - **Control points**: edge points projected onto the nearest corner's
//!   tangent plane, center point pushed out from the corner centroid
//! - **Distance-banded LOD**: per-edge levels from the two endpoint distances,
//!   so neighbours sharing an edge agree
//! - **Fixed LOD**: constant levels for low-detail passes
//! - **Batch pipeline**: rayon data-parallel processing of whole meshes, with
//!   an off-thread variant that can be cancelled per frame
//! - **TOML configuration**: band tables, factor and attribute set
//!
//! # Example
//!
//! ```ignore
//! use pn_tessellation::{process_batch, BatchConfig, FrameUniforms, IndexedMesh};
//!
//! let mesh = IndexedMesh::new(positions, normals, uvs, triangles)?;
//! let config = BatchConfig::default()
//!   .with_uniforms(FrameUniforms::new(camera_position, 1.0));
//!
//! let output = process_batch(&mesh, &config);
//! println!("{} patches, max outer level {}",
//!   output.len(), output.stats.max_outer_level);
//! ```

pub mod constants;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use constants::{
  CONTROL_POINT_COUNT, CONTROL_POINT_NAMES, CORNER_COUNT, EDGE_CORNERS, MIN_TESSELLATION_LEVEL,
};
pub use error::{ConfigError, ConfigResult, MeshError, MeshResult};
pub use types::{
  AttributeSet, ControlPointSet, InputVertex, OutputPatch, PatchAttributes, PatchInput,
  TangentFrame, TessellationLevels,
};

// Per-patch stages
pub mod attributes;
pub mod control_points;
pub mod emitter;
pub mod lod;
pub use lod::{DistanceBands, FrameUniforms, TessellationPolicy};

// Batch processing across patches
pub mod pipeline;
pub use pipeline::{
  process_batch, process_patch, AsyncTessellator, BatchConfig, BatchOutput, BatchStats,
  IndexedMesh, PatchSource, TessellationRequest,
};

// TOML configuration
pub mod config;
pub use config::{PolicyConfig, TessellationConfig};

// Engine-agnostic statistics
pub mod metrics;
pub use metrics::TessellationMetrics;

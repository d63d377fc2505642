//! Patch Pipeline
//!
//! Per-patch stages with data-parallel execution across patches via rayon.
//!
//! ```text
//! ┌────────────┐     ┌───────────────┐     ┌────────────┐     ┌──────┐
//! │ Attributes ├────►│ Control Points├────►│ LOD Levels ├────►│ Emit │
//! └────────────┘     └───────────────┘     └────────────┘     └──────┘
//!       │                    │                    │               │
//! PatchAttributes     ControlPointSet    TessellationLevels   OutputPatch
//!  (normal, uv,        (10 points)        (3 outer + inner)
//!   tangent frame)
//! ```
//!
//! # Pipeline Stages
//!
//! 1. **Attributes**: copies per-corner normal/UV/tangent frame
//! 2. **Control Points**: PN-triangle construction from corners + normals
//! 3. **LOD Levels**: banded or fixed policy against the frame uniforms
//! 4. **Emit**: structural merge into the output record
//!
//! # Entry Points
//!
//! - `process_patch`: one patch, pure function
//! - `process_batch`: all patches of a `PatchSource`, parallel, order kept
//! - `AsyncTessellator`: off-thread batch with poll/cancel per frame

pub mod types;

pub mod async_process;
pub mod process;
pub mod source;

// Test utilities
#[cfg(test)]
pub mod test_utils;

// Re-exports
pub use types::{BatchConfig, BatchOutput, BatchStats};

// Synchronous entry points
pub use process::{process_batch, process_batch_sequential, process_patch};
pub use source::{IndexedMesh, PatchSource};

// Async entry point (non-blocking)
pub use async_process::{AsyncTessellator, FrameResult, TessellationRequest};

//! View-adaptive level-of-detail for patch tessellation.
//!
//! Levels are recomputed for every patch every frame; nothing is cached.
//!
//! # LOD Convention
//!
//! Higher level = more segments per edge = finer detail. Levels are always
//! at least 1.0 because the fixed-function subdivider treats them as segment
//! counts.
//!
//! # Module Structure
//!
//! - [`bands`]: `DistanceBands` - validated distance → base level table
//! - [`policy`]: `TessellationPolicy` - banded or fixed strategy per batch
//! - [`estimator`]: `FrameUniforms` and the per-patch `estimate` function
//!
//! # Known Limitation
//!
//! Neighbouring patches only agree on a shared edge's level because both
//! average the same two endpoint distances. There is no stitching beyond
//! that; patches at different fixed levels will crack.

pub mod bands;
pub mod estimator;
pub mod policy;

// Re-exports
pub use bands::DistanceBands;
pub use estimator::{corner_distances, estimate, estimate_banded, FrameUniforms};
pub use policy::TessellationPolicy;

//! GPU-facing seams for LOD rendering: opaque pipeline handles, per-tier
//! pipeline selection, and the fixed-layout shader constant block.
//!
//! Device creation, command submission, and presentation belong to an external
//! rendering backend; this crate only defines the data and trait boundary that
//! the frame loop talks through.

mod backend;
mod constants;
mod pipeline;

pub use backend::{BackendCall, RecordingBackend, RenderBackend};
pub use constants::ShaderConstants;
pub use pipeline::{LodPipelines, PipelineHandle};

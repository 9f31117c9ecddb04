//! Level-of-detail blending: distance-based tier classification and smoothed
//! blend-factor interpolation to avoid visual popping between detail levels.

mod blend;
mod classifier;

pub use blend::{BlendState, quadratic_blend, quantize};
pub use classifier::{LodTier, MID_MAX_DISTANCE, NEAR_MAX_DISTANCE, classify_distance};

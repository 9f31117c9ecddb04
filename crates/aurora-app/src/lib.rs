//! Frame loop glue: throttled LOD classification, per-frame blend
//! interpolation, and draw submission through the rendering backend seam.

mod frame;

pub use frame::{FrameClock, LodDriver, UPDATE_INTERVAL};

//! Per-frame LOD driver: throttled classification, interpolation, and draw
//! submission, in strict order.

use std::time::Instant;

use aurora_lod::{BlendState, LodTier, classify_distance};
use aurora_render::{LodPipelines, PipelineHandle, RenderBackend, ShaderConstants};
use glam::Mat4;
use tracing::{info, trace};

/// Minimum time between LOD re-classifications, in seconds. The classifier
/// itself has no timing; the driver enforces this throttle.
pub const UPDATE_INTERVAL: f32 = 1.0;

/// Monotonic frame clock: measures the delta between successive frames.
///
/// Backed by [`Instant`], so elapsed times are immune to wall-clock
/// adjustments.
pub struct FrameClock {
    previous: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            previous: Instant::now(),
        }
    }

    /// Seconds since the previous tick (or since creation for the first one).
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.previous).as_secs_f32();
        self.previous = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-object LOD state driven once per frame.
///
/// Owns the blend state, the elapsed-time clock for the current transition,
/// and the current pipeline selection. Single-threaded by construction: the
/// frame loop is the sole owner and passes it by `&mut` — no hidden globals,
/// no locking.
pub struct LodDriver {
    blend: BlendState,
    pipelines: LodPipelines,
    current_pipeline: PipelineHandle,
    /// Seconds since the classifier last ran. Doubles as the transition's
    /// elapsed-time input, so progress is measured from the start of the
    /// current transition rather than per interpolator call.
    since_update: f32,
    tier: LodTier,
}

impl LodDriver {
    /// Create a driver in the zeroed startup state: both blend factors at
    /// 0.0, far pipeline current, no classification performed yet.
    pub fn new(pipelines: LodPipelines) -> Self {
        let blend = BlendState::new();
        let current_pipeline = pipelines.select(blend.target_factor());
        Self {
            blend,
            pipelines,
            current_pipeline,
            since_update: 0.0,
            tier: LodTier::Far,
        }
    }

    /// Run one frame and return the quantized display factor.
    ///
    /// `dt` is the monotonic time since the previous frame and `distance` the
    /// camera-to-object distance for this frame. The order is fixed:
    /// throttled classification (with pipeline selection), then
    /// interpolation, then constant upload, pipeline bind, and draw.
    pub fn frame(
        &mut self,
        dt: f32,
        distance: f32,
        world_view_projection: Mat4,
        backend: &mut impl RenderBackend,
    ) -> f32 {
        self.since_update += dt;

        if self.since_update >= UPDATE_INTERVAL {
            self.classify(distance);
        }

        let factor = self.blend.interpolate(self.since_update);
        trace!(
            factor,
            progress = self.blend.progress(),
            "interpolated blend factor"
        );

        let constants = ShaderConstants::new(
            self.blend.previous_factor(),
            self.blend.target_factor(),
            self.blend.progress(),
            factor,
            world_view_projection,
        );
        backend.upload_constants(&constants);
        backend.bind_pipeline(self.current_pipeline);
        backend.draw();

        factor
    }

    /// Classify `distance`, retarget the blend state, select the pipeline
    /// for the new target, and restart the update clock.
    fn classify(&mut self, distance: f32) {
        let tier = classify_distance(distance);
        if tier != self.tier {
            info!(?tier, distance, "LOD tier changed");
        }
        self.tier = tier;
        self.blend.retarget(tier.blend_factor());
        self.current_pipeline = self.pipelines.select(self.blend.target_factor());
        self.since_update = 0.0;
    }

    /// Blend state snapshot (previous/target factors and progress).
    pub fn blend(&self) -> &BlendState {
        &self.blend
    }

    /// Tier from the most recent classification.
    pub fn tier(&self) -> LodTier {
        self.tier
    }

    /// Pipeline selected for the current target factor.
    pub fn current_pipeline(&self) -> PipelineHandle {
        self.current_pipeline
    }
}

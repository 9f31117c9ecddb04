//! Blend-factor state and quadratic interpolation between LOD targets.

/// Round a value to two decimal places.
///
/// Every factor stored in [`BlendState`] and every emitted display value
/// passes through this, so repeated classification and interpolation stay
/// deterministic frame to frame.
pub fn quantize(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}

/// Quadratic Bezier evaluation between `a` and `b` with the control point
/// fixed at their arithmetic mean.
///
/// With the midpoint pinned to the mean, the curve degenerates to
/// `a + t * (b - a)`. That is the intended blend shape; keep the Bezier form
/// rather than swapping in an eased curve.
pub fn quadratic_blend(a: f32, b: f32, t: f32) -> f32 {
    let midpoint = 0.5 * (a + b);
    (1.0 - t) * (1.0 - t) * a + 2.0 * t * (1.0 - t) * midpoint + t * t * b
}

/// Blend-factor state for a single object's LOD transition.
///
/// Owned and mutated exclusively by the frame loop. `previous_factor` and
/// `target_factor` are always quantized before storage; `progress` is
/// monotonically non-decreasing within a transition and resets to zero only
/// when a new target is committed via [`retarget`](Self::retarget).
///
/// A transition spans one second of elapsed time: `progress` is the elapsed
/// seconds since the last retarget, clamped to 1.0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BlendState {
    previous_factor: f32,
    target_factor: f32,
    progress: f32,
}

impl BlendState {
    /// Zeroed state: no transition yet, both factors at 0.0 (far tier).
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new target factor. The old target becomes the start point of
    /// the transition and progress resets to zero.
    pub fn retarget(&mut self, factor: f32) {
        self.previous_factor = quantize(self.target_factor);
        self.target_factor = quantize(factor);
        self.progress = 0.0;
    }

    /// Advance the transition to `elapsed` seconds since the last retarget
    /// and return the quantized display factor.
    ///
    /// Progress is measured from the start of the current transition, not
    /// accumulated per call: interpolating twice with the same elapsed time
    /// yields the same value. An elapsed time that runs backwards (or past
    /// 1.0) cannot lower progress.
    pub fn interpolate(&mut self, elapsed: f32) -> f32 {
        let t = elapsed.clamp(0.0, 1.0);
        if t > self.progress {
            self.progress = t;
        }
        quantize(quadratic_blend(
            self.previous_factor,
            self.target_factor,
            self.progress,
        ))
    }

    /// Blend value at the start of the current transition.
    pub fn previous_factor(&self) -> f32 {
        self.previous_factor
    }

    /// Blend value at the end of the current transition.
    pub fn target_factor(&self) -> f32 {
        self.target_factor
    }

    /// Normalized position within the current transition, in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }
}

//! Opaque pipeline handles and per-tier pipeline selection.

use aurora_lod::LodTier;

/// Opaque handle to a compiled shader pipeline owned by the rendering backend.
///
/// The frame loop never inspects a pipeline; it only passes handles back to
/// the backend at bind time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PipelineHandle(u32);

impl PipelineHandle {
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

/// One pipeline handle per LOD tier, fixed at startup.
#[derive(Clone, Copy, Debug)]
pub struct LodPipelines {
    near: PipelineHandle,
    mid: PipelineHandle,
    far: PipelineHandle,
}

impl LodPipelines {
    pub fn new(near: PipelineHandle, mid: PipelineHandle, far: PipelineHandle) -> Self {
        Self { near, mid, far }
    }

    /// Handle for a known tier.
    pub fn for_tier(&self, tier: LodTier) -> PipelineHandle {
        match tier {
            LodTier::Near => self.near,
            LodTier::Mid => self.mid,
            LodTier::Far => self.far,
        }
    }

    /// Select the pipeline for a target blend factor: 1.0 is near, 0.5 is
    /// mid, anything else is far.
    ///
    /// Exact float equality is intentional here. Target factors only ever
    /// come from the classifier's fixed constant set plus quantization, never
    /// from interpolation. If target values ever become continuous, replace
    /// this with tolerance-based tier classification rather than widening the
    /// comparisons ad hoc.
    pub fn select(&self, target_factor: f32) -> PipelineHandle {
        if target_factor == 1.0 {
            self.near
        } else if target_factor == 0.5 {
            self.mid
        } else {
            self.far
        }
    }
}

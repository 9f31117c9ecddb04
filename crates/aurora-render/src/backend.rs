//! Seam between the LOD frame loop and the external rendering backend.

use crate::constants::ShaderConstants;
use crate::pipeline::PipelineHandle;

/// External rendering backend consumed by the frame loop.
///
/// Device management, synchronization, and presentation all live behind this
/// trait. The frame loop only uploads the constant block, binds a pipeline,
/// and issues the draw, once per frame in that order.
pub trait RenderBackend {
    /// Use `handle` for subsequent draws.
    fn bind_pipeline(&mut self, handle: PipelineHandle);

    /// Push the constant block to the GPU-visible uniform buffer.
    fn upload_constants(&mut self, constants: &ShaderConstants);

    /// Submit the draw for this frame.
    fn draw(&mut self);
}

/// A single call observed by [`RecordingBackend`].
#[derive(Clone, Debug, PartialEq)]
pub enum BackendCall {
    BindPipeline(PipelineHandle),
    UploadConstants(ShaderConstants),
    Draw,
}

/// Backend that records every call in order, for tests and dry runs.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    calls: Vec<BackendCall>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[BackendCall] {
        &self.calls
    }

    /// Most recently uploaded constant block, if any.
    pub fn last_constants(&self) -> Option<&ShaderConstants> {
        self.calls.iter().rev().find_map(|call| match call {
            BackendCall::UploadConstants(constants) => Some(constants),
            _ => None,
        })
    }

    /// Most recently bound pipeline, if any.
    pub fn last_pipeline(&self) -> Option<PipelineHandle> {
        self.calls.iter().rev().find_map(|call| match call {
            BackendCall::BindPipeline(handle) => Some(*handle),
            _ => None,
        })
    }

    pub fn draw_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, BackendCall::Draw))
            .count()
    }
}

impl RenderBackend for RecordingBackend {
    fn bind_pipeline(&mut self, handle: PipelineHandle) {
        log::trace!("bind_pipeline({})", handle.raw());
        self.calls.push(BackendCall::BindPipeline(handle));
    }

    fn upload_constants(&mut self, constants: &ShaderConstants) {
        self.calls.push(BackendCall::UploadConstants(*constants));
    }

    fn draw(&mut self) {
        self.calls.push(BackendCall::Draw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat4;

    #[test]
    fn test_records_calls_in_order() {
        let mut backend = RecordingBackend::new();
        let constants = ShaderConstants::new(0.0, 1.0, 0.5, 0.5, Mat4::IDENTITY);
        backend.upload_constants(&constants);
        backend.bind_pipeline(PipelineHandle::new(7));
        backend.draw();

        assert_eq!(
            backend.calls(),
            &[
                BackendCall::UploadConstants(constants),
                BackendCall::BindPipeline(PipelineHandle::new(7)),
                BackendCall::Draw,
            ]
        );
        assert_eq!(backend.draw_count(), 1);
        assert_eq!(backend.last_pipeline(), Some(PipelineHandle::new(7)));
        assert_eq!(backend.last_constants(), Some(&constants));
    }

    #[test]
    fn test_empty_backend_has_no_state() {
        let backend = RecordingBackend::new();
        assert!(backend.last_pipeline().is_none());
        assert!(backend.last_constants().is_none());
        assert_eq!(backend.draw_count(), 0);
    }
}

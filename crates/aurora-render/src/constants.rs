//! Fixed-layout uniform block pushed to the GPU each frame.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-draw shader constants: the two blend endpoints, transition progress,
/// and the world-view-projection matrix.
///
/// Layout matches the uniform block the LOD shaders declare. All fields are
/// 4-byte-aligned f32, so the struct has no padding and is safe to upload as
/// raw bytes.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct ShaderConstants {
    /// Blend value at the start of the current transition.
    pub fac_prev: f32,
    /// Blend value at the end of the current transition.
    pub fac_new: f32,
    /// Normalized transition progress in `[0, 1]`.
    pub t: f32,
    /// Quantized interpolated blend factor for this frame.
    pub fac: f32,
    /// Column-major world-view-projection matrix.
    pub world_view_projection: [[f32; 4]; 4],
}

impl ShaderConstants {
    pub fn new(fac_prev: f32, fac_new: f32, t: f32, fac: f32, world_view_projection: Mat4) -> Self {
        Self {
            fac_prev,
            fac_new,
            t,
            fac,
            world_view_projection: world_view_projection.to_cols_array_2d(),
        }
    }

    /// Raw byte view for the backend's uniform upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Four f32 scalars plus a mat4x4, no padding.
    #[test]
    fn test_fixed_layout() {
        assert_eq!(std::mem::size_of::<ShaderConstants>(), 4 * 4 + 64);
        assert_eq!(std::mem::align_of::<ShaderConstants>(), 4);
    }

    #[test]
    fn test_matrix_stored_column_major() {
        let wvp = Mat4::from_cols_array_2d(&[
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let constants = ShaderConstants::new(0.5, 1.0, 0.25, 0.63, wvp);
        assert_eq!(constants.world_view_projection[0], [1.0, 2.0, 3.0, 4.0]);
        assert_eq!(constants.world_view_projection[3], [13.0, 14.0, 15.0, 16.0]);
    }

    #[test]
    fn test_byte_view_length() {
        let constants = ShaderConstants::new(0.0, 1.0, 0.0, 0.0, Mat4::IDENTITY);
        assert_eq!(constants.as_bytes().len(), std::mem::size_of::<ShaderConstants>());
    }
}

//! Fixed-topology UV sphere for the waveform surface.
//!
//! Generated once at startup; the topology never changes. Displacement
//! happens in the vertex shader, so the buffers stay static for the life of
//! the app.

use crate::constants::{SPHERE_HEIGHT_SEGMENTS, SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS};
use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

pub struct SphereMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl SphereMesh {
    /// Build the waveform sphere at its fixed resolution.
    pub fn waveform() -> Self {
        Self::new(SPHERE_RADIUS, SPHERE_WIDTH_SEGMENTS, SPHERE_HEIGHT_SEGMENTS)
    }

    /// UV sphere with `width_segments` around the equator and
    /// `height_segments` from pole to pole.
    pub fn new(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        let w = width_segments.max(3);
        let h = height_segments.max(2);
        let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
        for iy in 0..=h {
            let v = iy as f32 / h as f32;
            let theta = v * PI;
            let (sin_t, cos_t) = theta.sin_cos();
            for ix in 0..=w {
                let u = ix as f32 / w as f32;
                let phi = u * 2.0 * PI;
                let (sin_p, cos_p) = phi.sin_cos();
                // Unit normal doubles as the direction from center
                let n = [cos_p * sin_t, cos_t, sin_p * sin_t];
                vertices.push(MeshVertex {
                    position: [n[0] * radius, n[1] * radius, n[2] * radius],
                    normal: n,
                });
            }
        }
        let mut indices = Vec::with_capacity((w * h * 6) as usize);
        let stride = w + 1;
        for iy in 0..h {
            for ix in 0..w {
                let a = iy * stride + ix;
                let b = a + stride;
                indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
            }
        }
        Self { vertices, indices }
    }

    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }
}

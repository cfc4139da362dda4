//! Static zone markers: two wireframe half-shells and the reincarnation band.
//!
//! Built once as a line list; the geometry never changes, only the camera
//! moves around it.

use crate::constants::*;
use crate::state::Zone;
use glam::Vec3;
use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl LineVertex {
    fn new(p: Vec3, color: Vec3, opacity: f32) -> Self {
        Self {
            position: p.to_array(),
            color: [color.x, color.y, color.z, opacity],
        }
    }
}

/// All marker geometry as one line list: heaven shell up top, hell shell
/// below, and the band of vertical lines around the equator.
pub fn zone_marker_lines() -> Vec<LineVertex> {
    let mut lines = Vec::new();
    half_shell_wireframe(
        &mut lines,
        Vec3::new(0.0, MARKER_SHELL_Y, 0.0),
        0.0,
        Zone::Heaven.marker_color(),
    );
    half_shell_wireframe(
        &mut lines,
        Vec3::new(0.0, -MARKER_SHELL_Y, 0.0),
        PI,
        Zone::Hell.marker_color(),
    );
    reincarnation_band(&mut lines);
    lines
}

/// Lat/long wireframe of a half shell (phi spans `phi_start..phi_start + PI`).
fn half_shell_wireframe(out: &mut Vec<LineVertex>, center: Vec3, phi_start: f32, color: Vec3) {
    let w = MARKER_SHELL_WIDTH_SEGMENTS;
    let h = MARKER_SHELL_HEIGHT_SEGMENTS;
    let point = |ix: u32, iy: u32| -> Vec3 {
        let u = ix as f32 / w as f32;
        let v = iy as f32 / h as f32;
        let phi = phi_start + u * PI;
        let theta = v * PI;
        center
            + Vec3::new(
                phi.cos() * theta.sin(),
                theta.cos(),
                phi.sin() * theta.sin(),
            ) * MARKER_SHELL_RADIUS
    };
    for iy in 0..=h {
        for ix in 0..w {
            out.push(LineVertex::new(point(ix, iy), color, MARKER_SHELL_OPACITY));
            out.push(LineVertex::new(point(ix + 1, iy), color, MARKER_SHELL_OPACITY));
        }
    }
    for ix in 0..=w {
        for iy in 0..h {
            out.push(LineVertex::new(point(ix, iy), color, MARKER_SHELL_OPACITY));
            out.push(LineVertex::new(point(ix, iy + 1), color, MARKER_SHELL_OPACITY));
        }
    }
}

/// Sixteen vertical lines around the equator at the band radius.
fn reincarnation_band(out: &mut Vec<LineVertex>) {
    let color = Zone::Reincarnation.marker_color();
    for i in 0..BAND_LINE_COUNT {
        let angle = (i as f32 / BAND_LINE_COUNT as f32) * 2.0 * PI;
        let x = angle.cos() * BAND_RADIUS;
        let z = angle.sin() * BAND_RADIUS;
        out.push(LineVertex::new(
            Vec3::new(x, -BAND_HALF_HEIGHT, z),
            color,
            BAND_OPACITY,
        ));
        out.push(LineVertex::new(
            Vec3::new(x, BAND_HALF_HEIGHT, z),
            color,
            BAND_OPACITY,
        ));
    }
}

//! Orbit camera around the scene origin.
//!
//! Pointer drag rotates, the wheel zooms within a clamped range, and an idle
//! auto-rotation keeps the scene slowly turning.

use crate::constants::*;
use glam::{Mat4, Vec3};

pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: CAMERA_DISTANCE_DEFAULT,
        }
    }
}

impl OrbitCamera {
    /// Advance the idle auto-rotation.
    pub fn auto_rotate(&mut self, dt_sec: f32) {
        self.yaw += AUTO_ROTATE_RATE * dt_sec;
    }

    /// Apply a pointer drag delta in css pixels.
    pub fn rotate(&mut self, dx_px: f32, dy_px: f32) {
        self.yaw += dx_px * DRAG_ROTATE_GAIN;
        self.pitch = (self.pitch + dy_px * DRAG_ROTATE_GAIN)
            .clamp(-CAMERA_PITCH_LIMIT, CAMERA_PITCH_LIMIT);
    }

    /// Apply a wheel delta; positive deltas zoom out.
    pub fn zoom(&mut self, wheel_delta: f32) {
        self.distance = (self.distance + wheel_delta * WHEEL_ZOOM_GAIN)
            .clamp(CAMERA_DISTANCE_MIN, CAMERA_DISTANCE_MAX);
    }

    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        Vec3::new(
            sin_yaw * cos_pitch,
            sin_pitch,
            cos_yaw * cos_pitch,
        ) * self.distance
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn proj(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(CAMERA_FOV_RADIANS, aspect.max(1e-4), CAMERA_ZNEAR, CAMERA_ZFAR)
    }

    /// Clip-space view-projection for the current orbit position.
    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.proj(aspect) * self.view()
    }
}

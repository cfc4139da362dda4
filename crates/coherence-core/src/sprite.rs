//! Point-sprite billboard law.
//!
//! Mirrors the vertex stage of `shaders/sprites.wgsl`: quad corners are
//! offset after the view transform, so a sprite spans the view plane and
//! keeps its projected size from every camera angle. Keep the two in sync
//! when tuning.

use glam::{Mat4, Vec2, Vec3, Vec4};

/// Clip-space position of one sprite-quad corner.
///
/// `local` is the unscaled corner in quad space ([-0.5, 0.5]^2).
pub fn corner_clip_position(
    local: Vec2,
    scale: f32,
    center: Vec3,
    model: Mat4,
    view: Mat4,
    proj: Mat4,
) -> Vec4 {
    let center_view = view * model * center.extend(1.0);
    let corner_view = center_view + (local * scale).extend(0.0).extend(0.0);
    proj * corner_view
}

// Host-side tests for the sprite billboard law mirrored by the sprite
// shader's vertex stage.

use coherence_core::sprite::corner_clip_position;
use glam::{Mat4, Vec2, Vec3};
use std::f32::consts::FRAC_PI_3;

fn orbit_view(yaw: f32, distance: f32) -> Mat4 {
    let eye = Vec3::new(yaw.sin(), 0.0, yaw.cos()) * distance;
    Mat4::look_at_rh(eye, Vec3::ZERO, Vec3::Y)
}

fn proj() -> Mat4 {
    Mat4::perspective_rh(FRAC_PI_3, 16.0 / 9.0, 0.1, 100.0)
}

/// NDC width of a sprite quad at the given camera yaw.
fn ndc_width(yaw: f32, center: Vec3, scale: f32) -> f32 {
    let view = orbit_view(yaw, 15.0);
    let left = corner_clip_position(
        Vec2::new(-0.5, 0.0),
        scale,
        center,
        Mat4::IDENTITY,
        view,
        proj(),
    );
    let right = corner_clip_position(
        Vec2::new(0.5, 0.0),
        scale,
        center,
        Mat4::IDENTITY,
        view,
        proj(),
    );
    (right.x / right.w - left.x / left.w).abs()
}

#[test]
fn sprites_keep_their_size_viewed_edge_on() {
    // A quarter orbit must not collapse the quad to a sliver
    let center = Vec3::new(3.0, 1.0, -2.0);
    let front = ndc_width(0.0, center, 0.4);
    for yaw_deg in [45.0_f32, 90.0, 135.0, 180.0, 270.0] {
        let w = ndc_width(yaw_deg.to_radians(), center, 0.4);
        assert!(
            w > front * 0.3,
            "sprite width {w} collapsed at yaw {yaw_deg} (front-on {front})"
        );
    }
}

#[test]
fn origin_sprite_width_is_yaw_invariant() {
    // At the orbit center the projected size must be identical from any angle
    let front = ndc_width(0.0, Vec3::ZERO, 0.2);
    for step in 1..12 {
        let yaw = step as f32 * std::f32::consts::PI / 6.0;
        let w = ndc_width(yaw, Vec3::ZERO, 0.2);
        assert!(
            (w - front).abs() < front * 1e-3,
            "width {w} at yaw {yaw} differs from front-on {front}"
        );
    }
}

#[test]
fn corner_offset_scales_with_sprite_size() {
    let view = orbit_view(0.7, 15.0);
    let center = Vec3::new(1.0, -0.5, 2.0);
    let at = |scale: f32| {
        let c = corner_clip_position(Vec2::new(0.5, 0.5), scale, center, Mat4::IDENTITY, view, proj());
        let base =
            corner_clip_position(Vec2::ZERO, scale, center, Mat4::IDENTITY, view, proj());
        ((c.x / c.w - base.x / base.w).powi(2) + (c.y / c.w - base.y / base.w).powi(2)).sqrt()
    };
    assert!(at(0.4) > at(0.2));
    assert!(at(0.2) > 0.0);
}

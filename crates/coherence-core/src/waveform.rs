//! Waveform sphere update laws.
//!
//! Everything here is a pure function of (elapsed time, state, vertex) so the
//! shader math can be verified host-side. `shaders/waveform.wgsl` implements
//! the identical laws on the GPU; keep the two in sync when tuning.

use crate::constants::*;
use crate::state::VisualState;
use glam::Vec3;

/// Scalar displacement along the vertex normal.
///
/// Bounded by `WAVEFORM_AMPLITUDE * coherence_level` for all t.
#[inline]
pub fn displacement(position: Vec3, t: f32, state: &VisualState) -> f32 {
    (position.x * state.core_tone + t * 2.0).sin()
        * (position.z * state.core_tone * 0.5 + t * 1.5).cos()
        * state.coherence_level
        * WAVEFORM_AMPLITUDE
}

/// Palette mix weight in [0, 1] driving the purple/cyan blend.
#[inline]
pub fn color_mix_factor(x: f32, t: f32, core_tone: f32) -> f32 {
    (t * 2.0 + x * core_tone).sin() * 0.5 + 0.5
}

/// Surface color for one vertex, before the glow boost.
///
/// The palette blend is weighted toward the zone base color by karma load.
pub fn surface_color(position: Vec3, t: f32, state: &VisualState) -> Vec3 {
    let m = color_mix_factor(position.x, t, state.core_tone);
    let blended = WAVEFORM_COLOR_PRIMARY.lerp(WAVEFORM_COLOR_ACCENT, m);
    blended.lerp(state.zone.base_color(), state.karma_load * ZONE_BLEND_WEIGHT)
}

/// Brightness multiplier from the local elevation (the "ethereal glow").
#[inline]
pub fn glow_intensity(elevation: f32) -> f32 {
    1.0 + elevation.abs() * GLOW_GAIN
}

/// Overall surface opacity; coherence brightens the sphere toward solid.
#[inline]
pub fn surface_alpha(state: &VisualState) -> f32 {
    WAVEFORM_ALPHA_BASE + state.coherence_level * WAVEFORM_ALPHA_SPAN
}

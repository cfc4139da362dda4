//! Orbit-node ring: eight emissive nodes circling the waveform sphere.
//!
//! All node-local values are expressed in the ring's rotating group frame;
//! the renderer applies the accumulated group rotation as a model transform
//! rather than re-deriving absolute positions.

use crate::color::{hsl_to_rgb, wrap_hue};
use crate::constants::*;
use crate::state::VisualState;
use glam::Vec3;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug)]
pub struct OrbitNode {
    pub position: Vec3,
    pub color: Vec3,
    pub intensity: f32,
}

/// Group-frame position of node `i`. Static per index: the ring wobbles in
/// radius and height but individual nodes never move within the group.
pub fn node_position(i: usize) -> Vec3 {
    let angle = (i as f32 / NODE_COUNT as f32) * 2.0 * std::f32::consts::PI;
    let radius = RING_BASE_RADIUS + (i as f32 * 0.5).sin() * RING_RADIUS_WOBBLE;
    Vec3::new(
        angle.cos() * radius,
        (i as f32 * 1.2).sin() * RING_Y_AMPLITUDE,
        angle.sin() * radius,
    )
}

/// Emissive brightness for node `i`; coherence lifts the whole ring while the
/// per-index sine keeps neighbors from pulsing in lockstep.
#[inline]
pub fn node_intensity(i: usize, coherence_level: f32) -> f32 {
    (coherence_level + (i as f32 * 0.8).sin() * 0.3) * 0.5
}

/// Hue for node `i`, advanced around the wheel by the core tone.
#[inline]
pub fn node_hue(i: usize, core_tone: f32) -> f32 {
    wrap_hue(core_tone * 0.1 + i as f32 * 0.125)
}

pub fn node_color(i: usize, state: &VisualState) -> Vec3 {
    let intensity = node_intensity(i, state.coherence_level);
    hsl_to_rgb(node_hue(i, state.core_tone), 0.8, 0.4 + intensity * 0.4)
}

/// Compute the full ring for one frame.
pub fn ring_nodes(state: &VisualState) -> SmallVec<[OrbitNode; NODE_COUNT]> {
    (0..NODE_COUNT)
        .map(|i| OrbitNode {
            position: node_position(i),
            color: node_color(i, state),
            intensity: node_intensity(i, state.coherence_level),
        })
        .collect()
}

/// Group-frame endpoints of the spoke connecting node `i` to the origin.
#[inline]
pub fn spoke_endpoints(i: usize) -> (Vec3, Vec3) {
    (node_position(i), Vec3::ZERO)
}

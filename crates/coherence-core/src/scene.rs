//! Scene composer: the accumulating per-frame state shared by all elements.
//!
//! `advance` is the whole update step expressed as plain memory mutation, so
//! the frame loop stays a thin platform shell and everything here runs in
//! host-side tests.

use crate::constants::{RING_ROTATION_PER_FRAME, WAVEFORM_ROTATION_PER_FRAME};
use crate::particles::ParticleField;
use crate::state::VisualState;

pub struct Scene {
    pub elapsed: f32,
    pub waveform_rotation: f32,
    pub ring_rotation: f32,
    pub particles: ParticleField,
}

impl Scene {
    pub fn new(particle_seed: u64) -> Self {
        Self {
            elapsed: 0.0,
            waveform_rotation: 0.0,
            ring_rotation: 0.0,
            particles: ParticleField::new(particle_seed),
        }
    }

    /// One frame tick. The rotation increments are per invocation (not
    /// dt-scaled), matching the display-refresh-coupled behavior of the
    /// original animation.
    pub fn advance(&mut self, dt: f32, state: &VisualState) {
        self.elapsed += dt.max(0.0);
        self.waveform_rotation += WAVEFORM_ROTATION_PER_FRAME;
        self.ring_rotation += RING_ROTATION_PER_FRAME;
        self.particles.step(self.elapsed, state.mirror_interactions);
    }
}

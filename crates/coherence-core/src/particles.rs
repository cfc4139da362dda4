//! Spectral particle field.
//!
//! 2000 points seeded uniformly in a cube; only the y coordinate mutates per
//! frame. The drift is intentionally unclamped, so y wanders without bound
//! over long sessions — with mirror interactions at zero the field is
//! perfectly still.

use crate::color::hsl_to_rgb;
use crate::constants::*;
use crate::state::VisualState;
use glam::Vec3;
use rand::prelude::*;

pub struct ParticleField {
    positions: Vec<[f32; 3]>,
}

impl ParticleField {
    /// Seeded init keeps the field deterministic across runs and testable
    /// host-side.
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let positions = (0..PARTICLE_COUNT)
            .map(|_| {
                let mut coord = || {
                    (rng.gen::<f32>() - 0.5) * 2.0 * PARTICLE_CUBE_HALF_EXTENT
                };
                [coord(), coord(), coord()]
            })
            .collect::<Vec<[f32; 3]>>();
        log::debug!("[particles] seeded {} points from {}", positions.len(), seed);
        Self { positions }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Per-frame y perturbation. x is read from the point's own (immutable)
    /// x coordinate, so repeated steps accumulate a sum of sine terms scaled
    /// by the drift gain and the mirror-interaction fraction.
    pub fn step(&mut self, t: f32, mirror_interactions: f32) {
        for p in &mut self.positions {
            let x = p[0];
            p[1] += (t * 2.0 + x * 0.1).sin() * PARTICLE_DRIFT_GAIN * mirror_interactions;
        }
    }
}

/// Render size of a single particle sprite.
#[inline]
pub fn point_size(coherence_level: f32) -> f32 {
    PARTICLE_SIZE_BASE + coherence_level * PARTICLE_SIZE_SPAN
}

/// Shared tint of the whole field, driven by the core tone.
pub fn field_color(state: &VisualState) -> Vec3 {
    hsl_to_rgb(state.core_tone * 0.1, 0.7, 0.6)
}

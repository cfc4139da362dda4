//! Scene tuning constants.
//!
//! These express intended behavior (amplitudes, rates, counts) and keep
//! magic numbers out of the per-frame code.

use glam::Vec3;

// Control ranges
pub const CORE_TONE_MIN: f32 = 1.0;
pub const CORE_TONE_MAX: f32 = 10.0;

// State defaults
pub const DEFAULT_CORE_TONE: f32 = 5.0;
pub const DEFAULT_KARMA_LOAD: f32 = 0.5;
pub const DEFAULT_COHERENCE_LEVEL: f32 = 0.7;
pub const DEFAULT_MIRROR_INTERACTIONS: f32 = 0.3;

// Waveform sphere
pub const SPHERE_RADIUS: f32 = 2.0;
pub const SPHERE_WIDTH_SEGMENTS: u32 = 64;
pub const SPHERE_HEIGHT_SEGMENTS: u32 = 64;
pub const WAVEFORM_AMPLITUDE: f32 = 0.3; // peak displacement at full coherence
pub const WAVEFORM_ROTATION_PER_FRAME: f32 = 0.005; // rad, per invocation
pub const WAVEFORM_ALPHA_BASE: f32 = 0.7;
pub const WAVEFORM_ALPHA_SPAN: f32 = 0.3;
pub const ZONE_BLEND_WEIGHT: f32 = 0.3; // karma-weighted zone color mix
pub const GLOW_GAIN: f32 = 2.0; // brightness boost per unit |elevation|

// Waveform palette endpoints
pub const WAVEFORM_COLOR_PRIMARY: Vec3 = Vec3::new(0.8, 0.2, 1.0); // purple
pub const WAVEFORM_COLOR_ACCENT: Vec3 = Vec3::new(0.2, 0.8, 1.0); // cyan

// Orbit-node ring
pub const NODE_COUNT: usize = 8;
pub const RING_BASE_RADIUS: f32 = 4.0;
pub const RING_RADIUS_WOBBLE: f32 = 1.0;
pub const RING_Y_AMPLITUDE: f32 = 2.0;
pub const RING_ROTATION_PER_FRAME: f32 = 0.002; // rad, per invocation
pub const NODE_RADIUS: f32 = 0.2;
pub const NODE_OPACITY: f32 = 0.8;
pub const SPOKE_OPACITY: f32 = 0.3;

// Particle field
pub const PARTICLE_COUNT: usize = 2000;
pub const PARTICLE_CUBE_HALF_EXTENT: f32 = 10.0; // init volume is [-10,10]^3
pub const PARTICLE_DRIFT_GAIN: f32 = 0.01;
pub const PARTICLE_SIZE_BASE: f32 = 0.1;
pub const PARTICLE_SIZE_SPAN: f32 = 0.1;
pub const PARTICLE_OPACITY: f32 = 0.6;

// Zone markers
pub const MARKER_SHELL_RADIUS: f32 = 6.0;
pub const MARKER_SHELL_WIDTH_SEGMENTS: u32 = 32;
pub const MARKER_SHELL_HEIGHT_SEGMENTS: u32 = 16;
pub const MARKER_SHELL_Y: f32 = 8.0;
pub const MARKER_SHELL_OPACITY: f32 = 0.1;
pub const BAND_RADIUS: f32 = 7.0;
pub const BAND_LINE_COUNT: usize = 16;
pub const BAND_HALF_HEIGHT: f32 = 1.0;
pub const BAND_OPACITY: f32 = 0.3;

//! Frontend interaction and camera tuning constants.

// Orbit camera
pub const CAMERA_FOV_RADIANS: f32 = std::f32::consts::FRAC_PI_3; // 60 degrees
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const CAMERA_DISTANCE_DEFAULT: f32 = 15.0;
pub const CAMERA_DISTANCE_MIN: f32 = 5.0;
pub const CAMERA_DISTANCE_MAX: f32 = 25.0;
pub const CAMERA_PITCH_LIMIT: f32 = 1.45; // rad, keeps the view off the poles
pub const AUTO_ROTATE_RATE: f32 = 0.052; // rad per second while idle
pub const DRAG_ROTATE_GAIN: f32 = 0.005; // rad per css pixel
pub const WHEEL_ZOOM_GAIN: f32 = 0.01; // distance units per wheel delta

// Deterministic particle placement across reloads
pub const PARTICLE_SEED: u64 = 42;

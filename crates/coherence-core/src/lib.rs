pub mod color;
pub mod constants;
pub mod markers;
pub mod mesh;
pub mod nodes;
pub mod particles;
pub mod scene;
pub mod sprite;
pub mod state;
pub mod waveform;

// Shaders bundled as string constants
pub static WAVEFORM_WGSL: &str = include_str!("../shaders/waveform.wgsl");
pub static SPRITES_WGSL: &str = include_str!("../shaders/sprites.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");

pub use constants::*;
pub use state::{UiFlags, VisualState, Zone};

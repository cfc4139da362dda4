//! Shared visual state driving every scene element.
//!
//! These types intentionally avoid platform-specific APIs and are suitable
//! for both host-side tests and the wasm frontend. The frontend replaces the
//! whole record on each control event; scene elements only ever borrow it.

use crate::constants::*;
use glam::Vec3;

/// One of four mutually exclusive display modes, each mapped to a distinct
/// base color blended into the waveform surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Zone {
    Heaven,
    Hell,
    Reincarnation,
    Neutral,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Heaven, Zone::Hell, Zone::Reincarnation, Zone::Neutral];

    /// Base color mixed into the waveform shader, weighted by karma load.
    pub fn base_color(self) -> Vec3 {
        match self {
            Zone::Heaven => Vec3::new(1.0, 0.98, 0.4),
            Zone::Hell => Vec3::new(1.0, 0.2, 0.2),
            Zone::Reincarnation => Vec3::new(0.8, 0.4, 1.0),
            Zone::Neutral => Vec3::new(0.5, 0.5, 0.8),
        }
    }

    /// Color of this zone's static marker geometry.
    pub fn marker_color(self) -> Vec3 {
        match self {
            Zone::Heaven => Vec3::new(1.0, 0.898, 0.361), // #FFE55C
            Zone::Hell => Vec3::new(1.0, 0.2, 0.2),       // #FF3333
            Zone::Reincarnation => Vec3::new(0.8, 0.4, 1.0), // #CC66FF
            Zone::Neutral => Vec3::new(0.5, 0.5, 0.8),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Zone::Heaven => "HEAVEN",
            Zone::Hell => "HELL",
            Zone::Reincarnation => "REINCARNATION",
            Zone::Neutral => "NEUTRAL",
        }
    }
}

/// The record of slider/selector values read by every frame update.
///
/// Replaced wholesale via the `with_*` builders; never partially mutated.
/// Each builder clamps its own field so keyboard shortcuts and other
/// non-widget paths cannot push a value out of range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub core_tone: f32,
    pub karma_load: f32,
    pub coherence_level: f32,
    pub mirror_interactions: f32,
    pub zone: Zone,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            core_tone: DEFAULT_CORE_TONE,
            karma_load: DEFAULT_KARMA_LOAD,
            coherence_level: DEFAULT_COHERENCE_LEVEL,
            mirror_interactions: DEFAULT_MIRROR_INTERACTIONS,
            zone: Zone::Neutral,
        }
    }
}

impl VisualState {
    pub fn with_core_tone(self, value: f32) -> Self {
        Self {
            core_tone: value.clamp(CORE_TONE_MIN, CORE_TONE_MAX),
            ..self
        }
    }

    pub fn with_karma_load(self, value: f32) -> Self {
        Self {
            karma_load: value.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn with_coherence_level(self, value: f32) -> Self {
        Self {
            coherence_level: value.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn with_mirror_interactions(self, value: f32) -> Self {
        Self {
            mirror_interactions: value.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn with_zone(self, zone: Zone) -> Self {
        Self { zone, ..self }
    }
}

/// UI-only flags that never feed the visual state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiFlags {
    pub post_death: bool,
}

impl UiFlags {
    pub fn toggle_post_death(&mut self) {
        self.post_death = !self.post_death;
    }

    pub fn mode_label(self) -> &'static str {
        if self.post_death {
            "POST-DEATH"
        } else {
            "INCARNATE"
        }
    }
}

//! HSL color helpers for node and particle tinting.

use glam::Vec3;

/// Wrap a hue into [0, 1). Tones above 10 would push the raw hue past 1, so
/// all hue laws go through this before conversion.
#[inline]
pub fn wrap_hue(h: f32) -> f32 {
    h.rem_euclid(1.0)
}

/// Convert HSL (all components in [0, 1]) to linear-ish RGB.
///
/// Matches the conversion used by the usual canvas/CSS color model: lightness
/// 0.5 at full saturation yields the pure hue.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> Vec3 {
    let h = wrap_hue(h);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return Vec3::splat(l);
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    Vec3::new(
        hue_to_channel(p, q, h + 1.0 / 3.0),
        hue_to_channel(p, q, h),
        hue_to_channel(p, q, h - 1.0 / 3.0),
    )
}

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

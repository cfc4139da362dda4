// Host-side tests for the waveform displacement and color laws.

use coherence_core::waveform::{
    color_mix_factor, displacement, glow_intensity, surface_alpha, surface_color,
};
use coherence_core::{VisualState, Zone};
use glam::Vec3;

fn sample_vertices() -> Vec<Vec3> {
    // A spread of points on and around the sphere surface
    let mut pts = vec![
        Vec3::new(2.0, 0.0, 0.0),
        Vec3::new(-2.0, 0.0, 0.0),
        Vec3::new(0.0, 2.0, 0.0),
        Vec3::new(0.0, 0.0, -2.0),
        Vec3::new(1.2, -1.1, 0.9),
    ];
    for i in 0..20 {
        let a = i as f32 * 0.37;
        pts.push(Vec3::new(a.sin() * 2.0, a.cos() * 2.0, (a * 1.7).sin() * 2.0));
    }
    pts
}

#[test]
fn displacement_magnitude_bounded_by_coherence() {
    // |d| <= 0.3 * coherence for all tone, t, vertex
    for tone_step in 0..=18 {
        let tone = 1.0 + tone_step as f32 * 0.5;
        for coh_step in 0..=10 {
            let coherence = coh_step as f32 * 0.1;
            let state = VisualState::default()
                .with_core_tone(tone)
                .with_coherence_level(coherence);
            for t_step in 0..=40 {
                let t = t_step as f32 * 0.25;
                for p in sample_vertices() {
                    let d = displacement(p, t, &state);
                    assert!(
                        d.abs() <= 0.3 * coherence + 1e-6,
                        "|{d}| exceeds bound at tone={tone} coherence={coherence} t={t}"
                    );
                }
            }
        }
    }
}

#[test]
fn displacement_finite_at_tone_extremes() {
    for tone in [1.0, 10.0] {
        let state = VisualState::default().with_core_tone(tone);
        for t in [0.0, 1.0, 1e4] {
            for p in sample_vertices() {
                let d = displacement(p, t, &state);
                assert!(d.is_finite(), "non-finite displacement at tone={tone} t={t}");
                let c = surface_color(p, t, &state);
                assert!(c.is_finite(), "non-finite color at tone={tone} t={t}");
            }
        }
    }
}

#[test]
fn zero_coherence_flattens_the_sphere() {
    let state = VisualState::default().with_coherence_level(0.0);
    for p in sample_vertices() {
        assert_eq!(displacement(p, 3.2, &state), 0.0);
    }
}

#[test]
fn color_mix_factor_stays_in_unit_interval() {
    for x_step in -10..=10 {
        let x = x_step as f32 * 0.2;
        for t_step in 0..=30 {
            let t = t_step as f32 * 0.33;
            let m = color_mix_factor(x, t, 10.0);
            assert!((0.0..=1.0).contains(&m), "mix factor {m} out of range");
        }
    }
}

#[test]
fn zone_selection_changes_the_blended_color() {
    // With nonzero karma the zone-weighted component must differ per zone
    let t = 1.5;
    let p = Vec3::new(1.0, 0.5, -0.7);
    let base = VisualState::default().with_karma_load(1.0);
    let colors: Vec<Vec3> = Zone::ALL
        .iter()
        .map(|&z| surface_color(p, t, &base.with_zone(z)))
        .collect();
    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            assert!(
                (colors[i] - colors[j]).length() > 1e-4,
                "zones {:?} and {:?} blend to the same color",
                Zone::ALL[i],
                Zone::ALL[j]
            );
        }
    }
}

#[test]
fn zero_karma_ignores_the_zone_color() {
    let t = 0.8;
    let p = Vec3::new(-0.4, 1.9, 0.2);
    let base = VisualState::default().with_karma_load(0.0);
    let reference = surface_color(p, t, &base.with_zone(Zone::Neutral));
    for zone in Zone::ALL {
        let c = surface_color(p, t, &base.with_zone(zone));
        assert!((c - reference).length() < 1e-6);
    }
}

#[test]
fn alpha_tracks_coherence() {
    let lo = VisualState::default().with_coherence_level(0.0);
    let hi = VisualState::default().with_coherence_level(1.0);
    assert!((surface_alpha(&lo) - 0.7).abs() < 1e-6);
    assert!((surface_alpha(&hi) - 1.0).abs() < 1e-6);
    let mid = VisualState::default().with_coherence_level(0.5);
    assert!((surface_alpha(&mid) - 0.85).abs() < 1e-6);
}

#[test]
fn glow_grows_with_elevation_magnitude() {
    assert_eq!(glow_intensity(0.0), 1.0);
    assert!(glow_intensity(0.3) > glow_intensity(0.1));
    assert_eq!(glow_intensity(-0.2), glow_intensity(0.2));
}

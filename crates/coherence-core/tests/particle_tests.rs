// Host-side tests for the spectral particle field.

use coherence_core::particles::{field_color, point_size, ParticleField};
use coherence_core::VisualState;

#[test]
fn field_initializes_inside_the_cube() {
    let field = ParticleField::new(42);
    assert_eq!(field.len(), 2000);
    for p in field.positions() {
        for c in p {
            assert!(
                (-10.0..=10.0).contains(c),
                "initial coordinate {c} outside cube"
            );
        }
    }
}

#[test]
fn seeding_is_deterministic() {
    let a = ParticleField::new(7);
    let b = ParticleField::new(7);
    assert_eq!(a.positions(), b.positions());
    let c = ParticleField::new(8);
    assert_ne!(a.positions(), c.positions());
}

#[test]
fn zero_mirror_interactions_leaves_y_invariant() {
    let mut field = ParticleField::new(42);
    let before: Vec<[f32; 3]> = field.positions().to_vec();
    for i in 0..500 {
        field.step(i as f32 * 0.016, 0.0);
    }
    assert_eq!(field.positions(), &before[..]);
}

#[test]
fn only_y_mutates_under_drift() {
    let mut field = ParticleField::new(42);
    let before: Vec<[f32; 3]> = field.positions().to_vec();
    for i in 0..200 {
        field.step(i as f32 * 0.016, 1.0);
    }
    for (p, q) in field.positions().iter().zip(before.iter()) {
        assert_eq!(p[0], q[0], "x must never change");
        assert_eq!(p[2], q[2], "z must never change");
    }
}

#[test]
fn drift_accumulates_the_per_frame_sine_sum() {
    let mut field = ParticleField::new(3);
    let mirror = 0.6;
    let x0 = field.positions()[0][0];
    let y0 = field.positions()[0][1];
    let mut expected = y0;
    for i in 0..50 {
        let t = i as f32 * 0.02;
        field.step(t, mirror);
        expected += (t * 2.0 + x0 * 0.1).sin() * 0.01 * mirror;
    }
    let y = field.positions()[0][1];
    assert!(
        (y - expected).abs() < 1e-4,
        "accumulated drift {y} != expected {expected}"
    );
}

#[test]
fn drift_scales_linearly_with_mirror_interactions() {
    let mut half = ParticleField::new(9);
    let mut full = ParticleField::new(9);
    let y0 = half.positions()[10][1];
    for i in 0..100 {
        let t = i as f32 * 0.016;
        half.step(t, 0.5);
        full.step(t, 1.0);
    }
    let dh = half.positions()[10][1] - y0;
    let df = full.positions()[10][1] - y0;
    assert!(
        (df - 2.0 * dh).abs() < 1e-4,
        "drift not linear in mirror fraction: half={dh} full={df}"
    );
}

#[test]
fn point_size_tracks_coherence() {
    assert!((point_size(0.0) - 0.1).abs() < 1e-6);
    assert!((point_size(1.0) - 0.2).abs() < 1e-6);
    assert!(point_size(0.3) < point_size(0.7));
}

#[test]
fn field_color_is_normalized_across_the_tone_range() {
    for tone_step in 0..=90 {
        let tone = 1.0 + tone_step as f32 * 0.1;
        let state = VisualState::default().with_core_tone(tone);
        let c = field_color(&state);
        assert!(
            c.min_element() >= 0.0 && c.max_element() <= 1.0,
            "field color {c:?} out of range at tone={tone}"
        );
    }
}

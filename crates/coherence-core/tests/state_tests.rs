// Host-side tests for the shared visual state: full-record replacement,
// clamping, and the UI flag involution.

use coherence_core::{UiFlags, VisualState, Zone};

#[test]
fn defaults_match_startup_values() {
    let s = VisualState::default();
    assert_eq!(s.core_tone, 5.0);
    assert_eq!(s.karma_load, 0.5);
    assert_eq!(s.coherence_level, 0.7);
    assert_eq!(s.mirror_interactions, 0.3);
    assert_eq!(s.zone, Zone::Neutral);
}

#[test]
fn single_field_replacement_preserves_all_other_fields() {
    let base = VisualState::default()
        .with_core_tone(7.3)
        .with_karma_load(0.9)
        .with_zone(Zone::Hell);

    let s = base.with_coherence_level(0.25);
    assert_eq!(s.coherence_level, 0.25);
    assert_eq!(s.core_tone, base.core_tone);
    assert_eq!(s.karma_load, base.karma_load);
    assert_eq!(s.mirror_interactions, base.mirror_interactions);
    assert_eq!(s.zone, base.zone);

    let s = base.with_mirror_interactions(1.0);
    assert_eq!(s.mirror_interactions, 1.0);
    assert_eq!(s.core_tone, base.core_tone);
    assert_eq!(s.karma_load, base.karma_load);
    assert_eq!(s.coherence_level, base.coherence_level);
    assert_eq!(s.zone, base.zone);

    let s = base.with_zone(Zone::Heaven);
    assert_eq!(s.zone, Zone::Heaven);
    assert_eq!(s.core_tone, base.core_tone);
    assert_eq!(s.karma_load, base.karma_load);
    assert_eq!(s.coherence_level, base.coherence_level);
    assert_eq!(s.mirror_interactions, base.mirror_interactions);
}

#[test]
fn builders_clamp_out_of_range_inputs() {
    let s = VisualState::default();
    assert_eq!(s.with_core_tone(0.0).core_tone, 1.0);
    assert_eq!(s.with_core_tone(99.0).core_tone, 10.0);
    assert_eq!(s.with_karma_load(-0.5).karma_load, 0.0);
    assert_eq!(s.with_karma_load(1.5).karma_load, 1.0);
    assert_eq!(s.with_coherence_level(2.0).coherence_level, 1.0);
    assert_eq!(s.with_mirror_interactions(-1.0).mirror_interactions, 0.0);
}

#[test]
fn reselecting_same_zone_is_idempotent() {
    let s = VisualState::default().with_zone(Zone::Reincarnation);
    let twice = s.with_zone(Zone::Reincarnation);
    assert_eq!(s, twice);
}

#[test]
fn each_zone_has_a_distinct_base_color() {
    for (i, a) in Zone::ALL.iter().enumerate() {
        for b in Zone::ALL.iter().skip(i + 1) {
            assert_ne!(
                a.base_color(),
                b.base_color(),
                "zones {:?} and {:?} share a base color",
                a,
                b
            );
        }
    }
}

#[test]
fn zone_colors_are_normalized() {
    for zone in Zone::ALL {
        for c in [zone.base_color(), zone.marker_color()] {
            assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
        }
    }
}

#[test]
fn post_death_toggle_is_an_involution() {
    let mut flags = UiFlags::default();
    assert!(!flags.post_death);
    flags.toggle_post_death();
    assert!(flags.post_death);
    assert_eq!(flags.mode_label(), "POST-DEATH");
    flags.toggle_post_death();
    assert_eq!(flags, UiFlags::default());
    assert_eq!(flags.mode_label(), "INCARNATE");
}

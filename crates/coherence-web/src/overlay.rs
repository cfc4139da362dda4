//! Status bar and slider readout refresh.

use crate::dom;
use coherence_core::{UiFlags, VisualState, Zone};
use web_sys as web;

/// Refresh the bottom status bar from the current state.
pub fn update_status(document: &web::Document, state: &VisualState, flags: &UiFlags) {
    dom::set_text(document, "status-zone", state.zone.label());
    dom::set_text(
        document,
        "status-coherence",
        &format!("{:.0}%", state.coherence_level * 100.0),
    );
    dom::set_text(
        document,
        "status-karma",
        &format!("{:.0}%", state.karma_load * 100.0),
    );
    dom::set_text(document, "status-mode", flags.mode_label());
}

/// Refresh the value labels next to each slider.
pub fn update_readouts(document: &web::Document, state: &VisualState) {
    dom::set_text(
        document,
        "readout-tone",
        &format!("{:.1}", state.core_tone),
    );
    dom::set_text(
        document,
        "readout-karma",
        &format!("{:.0}%", state.karma_load * 100.0),
    );
    dom::set_text(
        document,
        "readout-coherence",
        &format!("{:.0}%", state.coherence_level * 100.0),
    );
    dom::set_text(
        document,
        "readout-mirror",
        &format!("{:.0}%", state.mirror_interactions * 100.0),
    );
}

/// Highlight the selected zone button and clear the rest.
pub fn update_zone_buttons(document: &web::Document, selected: Zone) {
    for zone in Zone::ALL {
        dom::set_active(document, zone_button_id(zone), zone == selected);
    }
}

/// Swap the post-death toggle label to reflect the flag.
pub fn update_toggle_label(document: &web::Document, flags: &UiFlags) {
    let label = if flags.post_death {
        "Return to Life"
    } else {
        "Simulate Post-Death"
    };
    dom::set_text(document, "post-death-toggle", label);
}

pub fn zone_button_id(zone: Zone) -> &'static str {
    match zone {
        Zone::Heaven => "zone-heaven",
        Zone::Hell => "zone-hell",
        Zone::Reincarnation => "zone-reincarnation",
        Zone::Neutral => "zone-neutral",
    }
}

//! Control panel wiring: sliders, zone buttons, and the post-death toggle.
//!
//! Every handler performs a full-state replacement (build the next record,
//! swap it in) so a single-field change can never drop the others. Handlers
//! run on the UI thread between frames; the next tick reads the new state.

use crate::{dom, overlay};
use coherence_core::{UiFlags, VisualState, Zone};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub state: Rc<RefCell<VisualState>>,
    pub flags: Rc<RefCell<UiFlags>>,
}

pub fn wire_controls(w: ControlWiring) {
    wire_sliders(&w);
    wire_zone_buttons(&w);
    wire_post_death_toggle(&w);

    // Initial paint so labels match the startup state
    let state = *w.state.borrow();
    let flags = *w.flags.borrow();
    overlay::update_readouts(&w.document, &state);
    overlay::update_zone_buttons(&w.document, state.zone);
    overlay::update_toggle_label(&w.document, &flags);
    overlay::update_status(&w.document, &state, &flags);
}

/// Replace the shared state and repaint everything derived from it.
pub fn apply_state(w: &ControlWiring, next: VisualState) {
    *w.state.borrow_mut() = next;
    overlay::update_readouts(&w.document, &next);
    overlay::update_zone_buttons(&w.document, next.zone);
    overlay::update_status(&w.document, &next, &w.flags.borrow());
}

fn wire_sliders(w: &ControlWiring) {
    let sliders: [(&str, fn(VisualState, f32) -> VisualState); 4] = [
        ("slider-tone", VisualState::with_core_tone),
        ("slider-karma", VisualState::with_karma_load),
        ("slider-coherence", VisualState::with_coherence_level),
        ("slider-mirror", VisualState::with_mirror_interactions),
    ];
    for (id, apply) in sliders {
        let w2 = w.clone();
        dom::add_slider_listener(&w.document, id, move |value| {
            let next = apply(*w2.state.borrow(), value);
            apply_state(&w2, next);
        });
    }
}

fn wire_zone_buttons(w: &ControlWiring) {
    for zone in Zone::ALL {
        let w2 = w.clone();
        dom::add_click_listener(&w.document, overlay::zone_button_id(zone), move || {
            let next = w2.state.borrow().with_zone(zone);
            apply_state(&w2, next);
            log::info!("[controls] zone -> {}", zone.label());
        });
    }
}

fn wire_post_death_toggle(w: &ControlWiring) {
    let w2 = w.clone();
    dom::add_click_listener(&w.document, "post-death-toggle", move || {
        toggle_post_death(&w2);
    });
}

/// Flip the UI-only flag; the visual state is untouched.
pub fn toggle_post_death(w: &ControlWiring) {
    w.flags.borrow_mut().toggle_post_death();
    let flags = *w.flags.borrow();
    overlay::update_toggle_label(&w.document, &flags);
    overlay::update_status(&w.document, &w.state.borrow(), &flags);
    log::info!("[controls] mode -> {}", flags.mode_label());
}

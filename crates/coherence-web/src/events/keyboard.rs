//! Keyboard shortcuts mirroring the panel controls.

use crate::controls::{self, ControlWiring};
use coherence_core::Zone;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Zone selection on the digit row.
#[inline]
pub fn zone_for_digit(key: &str) -> Option<Zone> {
    match key {
        "1" => Some(Zone::Heaven),
        "2" => Some(Zone::Hell),
        "3" => Some(Zone::Reincarnation),
        "4" => Some(Zone::Neutral),
        _ => None,
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, wiring: &ControlWiring) {
    let key = ev.key();
    if let Some(zone) = zone_for_digit(&key) {
        let next = wiring.state.borrow().with_zone(zone);
        controls::apply_state(wiring, next);
        log::info!("[keys] zone -> {}", zone.label());
        return;
    }
    if key == " " {
        controls::toggle_post_death(wiring);
        ev.prevent_default();
    }
}

pub fn wire_global_keydown(wiring: ControlWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &wiring);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

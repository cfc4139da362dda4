#![cfg(target_arch = "wasm32")]
use crate::camera::OrbitCamera;
use coherence_core::{UiFlags, VisualState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod controls;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas = canvas.clone();
    dom::add_window_listener("resize", move || dom::sync_canvas_backing_size(&canvas));
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("coherence-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    // Shared state: one writer (control callbacks), one reader (frame loop),
    // both on the UI thread in strict alternation.
    let state = Rc::new(RefCell::new(VisualState::default()));
    let flags = Rc::new(RefCell::new(UiFlags::default()));
    let camera = Rc::new(RefCell::new(OrbitCamera::default()));

    let wiring = controls::ControlWiring {
        document: document.clone(),
        state: state.clone(),
        flags: flags.clone(),
    };
    controls::wire_controls(wiring.clone());
    events::wire_global_keydown(wiring);
    events::wire_camera_handlers(events::pointer::CameraWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
    });

    // WebGPU; a missing adapter leaves the panel alive with rendering skipped
    let gpu = frame::init_gpu(&canvas).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state: state.clone(),
        camera: camera.clone(),
        canvas: canvas.clone(),
        gpu,
        scene: coherence_core::scene::Scene::new(constants::PARTICLE_SEED),
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}

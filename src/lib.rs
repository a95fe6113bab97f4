#![cfg(target_arch = "wasm32")]
//! Scroll-driven VHS tape page.
//!
//! One input signal (vertical scroll) drives every layer: the WebGPU tape
//! scene, the glitch post pass over it, the 2D noise overlay, the background
//! tint and the hidden 25th-frame flashes.

use crate::constants::*;
use crate::core::{FlashConfig, FlashMachine, RotationMode, TransitionLatch};
use crate::render::ModelTransform;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod flash;
mod frame;
mod render;
mod scene;
mod vhs;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tape-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn create_scene_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let wrapper = document
        .query_selector(GLITCH_WRAPPER_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| anyhow::anyhow!("missing {GLITCH_WRAPPER_SELECTOR}"))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("not a canvas: {:?}", e))?;
    _ = canvas.style().set_property("width", "100%");
    _ = canvas.style().set_property("height", "100%");
    _ = canvas.style().set_property("display", "block");
    wrapper
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("append canvas: {:?}", e))?;
    dom::sync_canvas_backing_size(&canvas);
    Ok(canvas)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = create_scene_canvas(&document)?;

    let vhs = Rc::new(RefCell::new(vhs::VhsOverlay::create(&document)?));

    let frames = flash::install_hidden_frames(&document)?;
    let flash_ctl = flash::FlashController::new(
        FlashMachine::new(FlashConfig {
            flash_count: FLASH_COUNT,
            image_count: frames.len(),
        }),
        frames,
    );
    {
        // Warm the image cache once the rest of the page has loaded
        let flash_ctl = flash_ctl.clone();
        dom::add_window_listener("load", move || flash_ctl.preload_frames());
    }

    // Cover at the origin, tape tucked behind it; slots match
    // events::{COVER_SLOT, TAPE_SLOT}
    let transforms = Rc::new(RefCell::new(vec![
        ModelTransform::at_z(0.0),
        ModelTransform::at_z(TAPE_Z_OFFSET),
    ]));
    let rotation = Rc::new(RefCell::new(RotationMode::default()));
    let transition = Rc::new(RefCell::new(TransitionLatch::default()));

    events::wire_scroll(events::ScrollWiring {
        document: document.clone(),
        transforms: transforms.clone(),
        rotation: rotation.clone(),
        flash: flash_ctl,
        vhs: vhs.clone(),
        transition,
    });
    events::wire_resize(&canvas, vhs.clone());

    // WebGPU and models come up asynchronously; the page scrolls fine
    // without them
    spawn_local(async move {
        let mut gpu = frame::init_gpu(&canvas).await;

        if let Some(g) = &mut gpu {
            let cover = scene::fetch_model(MODEL_COVER_URL).await;
            let tape = scene::fetch_model(MODEL_TAPE_URL).await;
            match (cover, tape) {
                (Ok(cover), Ok(tape)) => {
                    g.upload_model(&cover);
                    g.upload_model(&tape);
                }
                (cover, tape) => {
                    for err in [cover.err(), tape.err()].into_iter().flatten() {
                        log::error!("model load: {:?}", err);
                    }
                }
            }
        }

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            gpu,
            canvas,
            rotation,
            transforms,
            last_instant: Instant::now(),
        }));
        frame::start_loop(frame_ctx);
    });

    Ok(())
}

//! Event wiring: the single scroll handler that fans the scroll position out
//! to every effect, plus resize handling.

use crate::constants::*;
use crate::core;
use crate::dom;
use crate::flash::FlashController;
use crate::render::ModelTransform;
use crate::vhs::VhsOverlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Slot order in the transform array (matches the model upload order).
pub const COVER_SLOT: usize = 0;
pub const TAPE_SLOT: usize = 1;

#[derive(Clone)]
pub struct ScrollWiring {
    pub document: web::Document,
    pub transforms: Rc<RefCell<Vec<ModelTransform>>>,
    pub rotation: Rc<RefCell<core::RotationMode>>,
    pub flash: FlashController,
    pub vhs: Rc<RefCell<VhsOverlay>>,
    pub transition: Rc<RefCell<core::TransitionLatch>>,
}

pub fn wire_scroll(w: ScrollWiring) {
    let closure = Closure::wrap(Box::new(move || {
        let Some(window) = web::window() else { return };
        let (scroll_y, max_scroll) = dom::scroll_metrics(&window, &w.document);
        let progress = core::scroll_progress(scroll_y, max_scroll);

        // Overlaid text/button reveal (step function, no hysteresis)
        let visible = core::ui_visible(progress);
        for selector in [FIRST_RULE_SELECTOR, ANSWER_BUTTON_SELECTOR] {
            if let Some(el) = dom::query_html(&w.document, selector) {
                dom::set_revealed(&el, visible);
            }
        }

        // Hidden frame: armed near any trigger point, refused while one is
        // in flight or cooling down
        if core::near_trigger_point(scroll_y, max_scroll) {
            w.flash.try_flash();
        }

        // First real scroll ends the free spin for good
        if w.rotation.borrow_mut().note_scroll(scroll_y) {
            log::info!("[scroll] free spin ended, converging to front view");
        }

        // Zoom and split
        let scale = core::model_scale(progress);
        let (tape_x, cover_x) = core::split_offsets(progress, scale);
        {
            let mut transforms = w.transforms.borrow_mut();
            if let Some(t) = transforms.get_mut(COVER_SLOT) {
                t.scale = scale;
                if progress > core::SPLIT_START {
                    t.position.x = cover_x;
                    t.rotation.x = 0.0;
                    t.rotation.z = 0.0;
                }
            }
            if let Some(t) = transforms.get_mut(TAPE_SLOT) {
                t.scale = scale;
                if progress > core::SPLIT_START {
                    t.position.x = tape_x;
                }
            }
        }

        // Background tint behind the models
        if let Some(bg) = dom::query_html(&w.document, TAPE_BACKGROUND_SELECTOR) {
            dom::set_background_black_alpha(&bg, core::background_alpha(progress));
        }

        // VHS overlay: scroll-driven until the transition takes over
        let intensity = core::overlay_intensity(progress);
        if !w.transition.borrow().triggered() {
            let mut vhs = w.vhs.borrow_mut();
            vhs.set_opacity(intensity);
            if let Err(e) = vhs.draw(intensity) {
                log::error!("vhs draw: {:?}", e);
            }
        }
        if w.transition.borrow_mut().try_trigger(progress) {
            log::info!("[scroll] scene transition triggered");
            w.vhs.borrow().begin_transition();
            start_transition_redraw(w.vhs.clone());
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Fixed-rate full-intensity noise redraw after the transition. Runs until
/// page unload; there is deliberately no stop condition.
fn start_transition_redraw(vhs: Rc<RefCell<VhsOverlay>>) {
    let closure = Closure::wrap(Box::new(move || {
        if let Err(e) = vhs.borrow_mut().draw(1.0) {
            log::error!("vhs redraw: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            VHS_REDRAW_MS,
        );
    }
    closure.forget();
}

/// Keep canvas backing stores in step with the window size. The WebGPU
/// surface itself is reconfigured by the frame loop.
pub fn wire_resize(canvas: &web::HtmlCanvasElement, vhs: Rc<RefCell<VhsOverlay>>) {
    let canvas = canvas.clone();
    dom::add_window_listener("resize", move || {
        dom::sync_canvas_backing_size(&canvas);
        vhs.borrow().resize();
    });
}

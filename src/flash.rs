//! Web driver for the hidden-frame flash: owns the DOM image elements and
//! the toggle/cooldown timers around the pure `core::flash` machine.

use crate::constants::*;
use crate::core::{FlashMachine, FlashStep};
use anyhow::anyhow;
use rand::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Create the three `img.hidden-frame` elements inside the hidden-frames
/// container.
pub fn install_hidden_frames(document: &web::Document) -> anyhow::Result<Vec<web::Element>> {
    let container = document
        .get_element_by_id(HIDDEN_FRAMES_CONTAINER_ID)
        .ok_or_else(|| anyhow!("missing #{HIDDEN_FRAMES_CONTAINER_ID}"))?;
    let mut frames = Vec::with_capacity(HIDDEN_FRAME_IMAGES.len());
    for src in HIDDEN_FRAME_IMAGES {
        let img: web::HtmlImageElement = document
            .create_element("img")
            .map_err(|e| anyhow!("create img: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("not an img: {:?}", e))?;
        img.set_src(src);
        img.set_class_name(HIDDEN_FRAME_CLASS);
        img.set_alt("25th Frame");
        container
            .append_child(&img)
            .map_err(|e| anyhow!("append frame: {:?}", e))?;
        frames.push(web::Element::from(img));
    }
    Ok(frames)
}

#[derive(Clone)]
pub struct FlashController {
    machine: Rc<RefCell<FlashMachine>>,
    frames: Rc<Vec<web::Element>>,
    rng: Rc<RefCell<StdRng>>,
}

impl FlashController {
    pub fn new(machine: FlashMachine, frames: Vec<web::Element>) -> Self {
        Self {
            machine: Rc::new(RefCell::new(machine)),
            frames: Rc::new(frames),
            rng: Rc::new(RefCell::new(StdRng::from_entropy())),
        }
    }

    /// Warm the browser image cache so the first flash doesn't hit the
    /// network.
    pub fn preload_frames(&self) {
        for frame in self.frames.iter() {
            if let Some(src) = frame.get_attribute("src") {
                if let Ok(img) = web::HtmlImageElement::new() {
                    img.set_src(&src);
                }
            }
        }
    }

    /// Arm a flash cycle if the machine is idle; otherwise a no-op.
    pub fn try_flash(&self) {
        let picked = self
            .machine
            .borrow_mut()
            .arm(&mut *self.rng.borrow_mut());
        let Some(index) = picked else { return };
        let Some(frame) = self.frames.get(index).cloned() else {
            return;
        };
        log::info!("[flash] hidden frame {index} armed");

        let machine = self.machine.clone();
        let interval_handle: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
        let handle_inner = interval_handle.clone();
        let closure = Closure::wrap(Box::new(move || {
            _ = frame.class_list().toggle(HIDDEN_FRAME_VISIBLE_CLASS);
            if machine.borrow_mut().on_toggle() == FlashStep::Finished {
                _ = frame.class_list().remove_1(HIDDEN_FRAME_VISIBLE_CLASS);
                if let Some(w) = web::window() {
                    if let Some(h) = handle_inner.borrow_mut().take() {
                        w.clear_interval_with_handle(h);
                    }
                }
                schedule_cooldown(machine.clone());
            }
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            match w.set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                FLASH_TOGGLE_MS,
            ) {
                Ok(h) => *interval_handle.borrow_mut() = Some(h),
                Err(e) => log::error!("flash interval: {:?}", e),
            }
        }
        closure.forget();
    }
}

fn schedule_cooldown(machine: Rc<RefCell<FlashMachine>>) {
    let closure = Closure::wrap(Box::new(move || {
        machine.borrow_mut().on_cooldown_elapsed();
    }) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            FLASH_COOLDOWN_MS,
        );
    }
    closure.forget();
}

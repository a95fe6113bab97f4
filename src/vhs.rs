//! Full-screen VHS noise overlay.
//!
//! A fixed-position 2D canvas above the page, blended with `overlay` mode.
//! `draw` is a pure function of an intensity in [0, 1]: grayscale per-pixel
//! noise plus horizontal scanlines. Before the scene transition it is redrawn
//! per scroll event; afterwards on a fixed 50 ms interval at full intensity.

use crate::constants::*;
use crate::dom;
use anyhow::anyhow;
use rand::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys as web;

pub struct VhsOverlay {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    rng: StdRng,
}

impl VhsOverlay {
    /// Create the overlay canvas and append it to the document body.
    pub fn create(document: &web::Document) -> anyhow::Result<Self> {
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow!("create canvas: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow!("not a canvas: {:?}", e))?;

        for (prop, value) in [
            ("position", "fixed"),
            ("top", "0"),
            ("left", "0"),
            ("width", "100%"),
            ("height", "100%"),
            ("z-index", "9999"),
            ("opacity", "0"),
            ("pointer-events", "none"),
            ("transition", VHS_FADE_TRANSITION),
            ("mix-blend-mode", "overlay"),
        ] {
            _ = canvas.style().set_property(prop, value);
        }

        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        body.append_child(&canvas)
            .map_err(|e| anyhow!("append overlay: {:?}", e))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context: {:?}", e))?
            .ok_or_else(|| anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow!("not a 2d context: {:?}", e))?;

        let overlay = Self {
            canvas,
            ctx,
            rng: StdRng::from_entropy(),
        };
        overlay.resize();
        Ok(overlay)
    }

    /// Match the backing store to the window size (the CSS size is always
    /// 100%).
    pub fn resize(&self) {
        if let Some(w) = web::window() {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            self.canvas.set_width((width as u32).max(1));
            self.canvas.set_height((height as u32).max(1));
        }
    }

    pub fn set_opacity(&self, opacity: f32) {
        dom::set_style(&self.canvas, "opacity", &format!("{opacity}"));
    }

    /// Switch to the scene-transition look: slow fade to fully opaque over
    /// black. The caller starts the fixed-rate redraw.
    pub fn begin_transition(&self) {
        dom::set_style(&self.canvas, "transition", TRANSITION_FADE_TRANSITION);
        dom::set_style(&self.canvas, "opacity", "1");
        dom::set_style(&self.canvas, "background", "black");
    }

    /// Redraw noise and scanlines at the given intensity.
    pub fn draw(&mut self, intensity: f32) -> anyhow::Result<()> {
        let width = self.canvas.width();
        let height = self.canvas.height();
        self.ctx
            .clear_rect(0.0, 0.0, width as f64, height as f64);

        let mut pixels = vec![0u8; (width * height * 4) as usize];
        for px in pixels.chunks_exact_mut(4) {
            let val = (self.rng.gen::<f32>() * 255.0 * intensity) as u8;
            px[0] = val;
            px[1] = val;
            px[2] = val;
            px[3] = 255;
        }
        let image = web::ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(pixels.as_slice()),
            width,
            height,
        )
        .map_err(|e| anyhow!("image data: {:?}", e))?;
        self.ctx
            .put_image_data(&image, 0.0, 0.0)
            .map_err(|e| anyhow!("put_image_data: {:?}", e))?;

        self.ctx.set_stroke_style_str(&format!(
            "rgba(255, 255, 255, {})",
            SCANLINE_ALPHA * intensity
        ));
        let mut y = 0;
        while y < height {
            self.ctx.begin_path();
            self.ctx.move_to(0.0, y as f64);
            self.ctx.line_to(width as f64, y as f64);
            self.ctx.stroke();
            y += SCANLINE_PITCH_PX;
        }
        Ok(())
    }
}

use wasm_bindgen::JsCast;
use web_sys as web;

/// First element matching a CSS selector, as an `HtmlElement` so `.style()`
/// is available. `None` if the markup doesn't carry the element.
#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Show or hide an overlaid UI element. Hidden elements also stop receiving
/// pointer events so they can't be clicked through the fade.
pub fn set_revealed(el: &web::HtmlElement, revealed: bool) {
    if revealed {
        set_style(el, "opacity", "1");
        set_style(el, "pointer-events", "auto");
    } else {
        set_style(el, "opacity", "0");
        set_style(el, "pointer-events", "none");
    }
}

pub fn set_background_black_alpha(el: &web::HtmlElement, alpha: f32) {
    set_style(el, "background-color", &format!("rgba(0, 0, 0, {alpha})"));
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Current vertical scroll offset and the maximum scrollable distance.
pub fn scroll_metrics(window: &web::Window, document: &web::Document) -> (f64, f64) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let doc_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (scroll_y, doc_height - viewport)
}

pub fn add_window_listener(event: &str, handler: impl FnMut() + 'static) {
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

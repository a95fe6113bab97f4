// Scroll-to-effect mappings.
//
// Every visual layer on the page is a pure function of one scalar: how far
// the user has scrolled. These functions compute that scalar and the curves
// derived from it; DOM and GPU writes happen in the event layer.

/// Progress at which the overlaid text/button become visible (step, no
/// hysteresis).
pub const UI_REVEAL_THRESHOLD: f32 = 0.05;

/// Progress at which the tape starts sliding out of its cover.
pub const SPLIT_START: f32 = 0.05;

pub const INITIAL_SCALE: f32 = 1.0;
pub const MAX_SCALE: f32 = 2.5;

// Horizontal drift per unit of renormalized split progress, in model units
// (multiplied by the current scale so the split widens as the models grow).
pub const TAPE_SPLIT_FACTOR: f32 = 6.0;
pub const COVER_SPLIT_FACTOR: f32 = -4.5;

// Background tint ramp: sqrt curve starting at 10% scroll, gain 1.9 so it
// saturates well before the end of the page.
pub const BG_FADE_START: f32 = 0.1;
pub const BG_ALPHA_GAIN: f32 = 1.9;

/// Overlay noise reaches full intensity at this progress (also the scene
/// transition threshold).
pub const OVERLAY_FULL_AT: f32 = 0.8;

/// Scroll fractions at which a hidden frame may be armed.
pub const TRIGGER_POINTS: [f64; 4] = [0.2, 0.4, 0.6, 0.8];

/// Half-width of the arming window around each trigger point, in pixels.
pub const TRIGGER_WINDOW_PX: f64 = 250.0;

/// Normalized scroll progress in [0, 1].
///
/// A non-scrollable page (`max_scroll <= 0`) maps to 0 rather than NaN.
#[inline]
pub fn scroll_progress(scroll_y: f64, max_scroll: f64) -> f32 {
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0) as f32
}

#[inline]
pub fn ui_visible(progress: f32) -> bool {
    progress > UI_REVEAL_THRESHOLD
}

/// Linear zoom from `INITIAL_SCALE` to `MAX_SCALE`.
#[inline]
pub fn model_scale(progress: f32) -> f32 {
    INITIAL_SCALE + (MAX_SCALE - INITIAL_SCALE) * progress
}

/// Renormalized progress of the tape/cover split, 0 until `SPLIT_START`.
#[inline]
pub fn split_progress(progress: f32) -> f32 {
    if progress <= SPLIT_START {
        return 0.0;
    }
    (progress - SPLIT_START) / (1.0 - SPLIT_START)
}

/// Horizontal offsets `(tape_x, cover_x)` for the current progress and scale.
#[inline]
pub fn split_offsets(progress: f32, scale: f32) -> (f32, f32) {
    let t = split_progress(progress);
    (t * TAPE_SPLIT_FACTOR * scale, t * COVER_SPLIT_FACTOR * scale)
}

/// Alpha of the black background tint. May exceed 1; the consuming opacity
/// saturates.
#[inline]
pub fn background_alpha(progress: f32) -> f32 {
    let t = ((progress - BG_FADE_START) / (1.0 - BG_FADE_START)).max(0.0);
    t.powf(0.5) * BG_ALPHA_GAIN
}

/// Intensity of the VHS noise overlay in [0, 1].
#[inline]
pub fn overlay_intensity(progress: f32) -> f32 {
    (progress / OVERLAY_FULL_AT).min(1.0)
}

/// Whether `scroll_y` falls inside the arming window of any trigger point.
#[inline]
pub fn near_trigger_point(scroll_y: f64, max_scroll: f64) -> bool {
    TRIGGER_POINTS.iter().any(|point| {
        let center = point * max_scroll;
        scroll_y > center - TRIGGER_WINDOW_PX && scroll_y < center + TRIGGER_WINDOW_PX
    })
}

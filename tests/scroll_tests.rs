// Host-side tests for the pure scroll mappings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod scroll {
    include!("../src/core/scroll.rs");
}

use scroll::*;

#[test]
fn progress_is_clamped() {
    assert_eq!(scroll_progress(0.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(500.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(1000.0, 1000.0), 1.0);
    // Rubber-band scrolling can report positions outside the range
    assert_eq!(scroll_progress(-100.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2000.0, 1000.0), 1.0);
}

#[test]
fn zero_height_page_yields_zero_progress() {
    assert_eq!(scroll_progress(0.0, 0.0), 0.0);
    assert_eq!(scroll_progress(100.0, 0.0), 0.0);
    assert_eq!(scroll_progress(100.0, -5.0), 0.0);
}

#[test]
fn ui_reveal_is_a_step_at_five_percent() {
    assert!(!ui_visible(0.0));
    assert!(!ui_visible(0.05));
    assert!(ui_visible(0.051));
    assert!(ui_visible(1.0));
}

#[test]
fn scale_endpoints() {
    assert_eq!(model_scale(0.0), INITIAL_SCALE);
    assert_eq!(model_scale(1.0), MAX_SCALE);
    assert!((model_scale(0.5) - (INITIAL_SCALE + MAX_SCALE) / 2.0).abs() < 1e-6);
}

#[test]
fn split_starts_after_threshold() {
    assert_eq!(split_progress(0.0), 0.0);
    assert_eq!(split_progress(SPLIT_START), 0.0);
    assert!((split_progress(1.0) - 1.0).abs() < 1e-6);

    let (tape_x, cover_x) = split_offsets(0.02, 1.0);
    assert_eq!(tape_x, 0.0);
    assert_eq!(cover_x, 0.0);
}

#[test]
fn split_offsets_move_models_apart_and_grow_with_scale() {
    let (tape_x, cover_x) = split_offsets(0.5, 1.0);
    assert!(tape_x > 0.0);
    assert!(cover_x < 0.0);

    let (tape_2x, cover_2x) = split_offsets(0.5, 2.0);
    assert!((tape_2x - 2.0 * tape_x).abs() < 1e-5);
    assert!((cover_2x - 2.0 * cover_x).abs() < 1e-5);
}

#[test]
fn background_alpha_curve() {
    assert_eq!(background_alpha(0.0), 0.0);
    assert_eq!(background_alpha(BG_FADE_START), 0.0);
    // sqrt ramp saturates past opacity 1 before the end of the page
    assert!(background_alpha(1.0) > 1.0);
    let mid = background_alpha(0.5);
    assert!(mid > 0.0 && mid < background_alpha(0.9));
}

#[test]
fn overlay_intensity_saturates_at_transition_threshold() {
    assert_eq!(overlay_intensity(0.0), 0.0);
    assert!((overlay_intensity(0.4) - 0.5).abs() < 1e-6);
    assert_eq!(overlay_intensity(OVERLAY_FULL_AT), 1.0);
    assert_eq!(overlay_intensity(1.0), 1.0);
}

#[test]
fn trigger_windows_are_centered_on_the_trigger_points() {
    let max_scroll = 10_000.0;
    for point in TRIGGER_POINTS {
        let center = point * max_scroll;
        assert!(near_trigger_point(center, max_scroll));
        assert!(near_trigger_point(center - TRIGGER_WINDOW_PX + 1.0, max_scroll));
        assert!(near_trigger_point(center + TRIGGER_WINDOW_PX - 1.0, max_scroll));
        // Window bounds are exclusive
        assert!(!near_trigger_point(center - TRIGGER_WINDOW_PX, max_scroll));
        assert!(!near_trigger_point(center + TRIGGER_WINDOW_PX, max_scroll));
    }
    // Between the first two windows
    assert!(!near_trigger_point(3000.0, max_scroll));
    assert!(!near_trigger_point(0.0, max_scroll));
}

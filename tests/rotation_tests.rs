// Host-side tests for the rotation mode and the scene transition latch.

#![allow(dead_code)]
mod rotation {
    include!("../src/core/rotation.rs");
}
mod transition {
    include!("../src/core/transition.rs");
}

use rotation::*;
use transition::*;

#[test]
fn spins_at_a_constant_rate_until_scrolled() {
    let mode = RotationMode::default();
    assert!(mode.spinning);
    let mut angle = 0.0;
    for i in 1..=10 {
        angle = mode.step(angle);
        assert!((angle - SPIN_STEP_RAD * i as f32).abs() < 1e-6);
    }
}

#[test]
fn small_scroll_does_not_end_the_spin() {
    let mut mode = RotationMode::default();
    assert!(!mode.note_scroll(0.0));
    assert!(!mode.note_scroll(10.0)); // threshold is strictly greater
    assert!(mode.spinning);
    assert!(!mode.has_scrolled);
}

#[test]
fn spin_ends_exactly_once() {
    let mut mode = RotationMode::default();
    assert!(mode.note_scroll(11.0));
    assert!(!mode.spinning);
    assert!(mode.has_scrolled);
    // Further scrolls, including back to the top, never flip again
    assert!(!mode.note_scroll(500.0));
    assert!(!mode.note_scroll(0.0));
    assert!(!mode.spinning);
}

#[test]
fn convergence_reaches_the_target_and_stays() {
    let mut mode = RotationMode::default();
    mode.note_scroll(100.0);

    let mut angle = 1.0_f32;
    let mut steps = 0;
    while angle != mode.target_y {
        let next = mode.step(angle);
        // Never overshoots, never diverges
        assert!((next - mode.target_y).abs() <= (angle - mode.target_y).abs());
        angle = next;
        steps += 1;
        assert!(steps < 100, "convergence must terminate via the snap");
    }
    assert_eq!(angle, mode.target_y);
    assert_eq!(mode.step(angle), mode.target_y);
}

#[test]
fn convergence_works_from_either_side() {
    let mut mode = RotationMode::default();
    mode.note_scroll(100.0);
    let mut angle = -2.5_f32;
    for _ in 0..100 {
        angle = mode.step(angle);
    }
    assert_eq!(angle, mode.target_y);
}

#[test]
fn transition_latch_fires_exactly_once() {
    let mut latch = TransitionLatch::default();
    assert!(!latch.triggered());
    assert!(!latch.try_trigger(0.5));
    assert!(!latch.try_trigger(TRANSITION_THRESHOLD)); // strictly greater
    assert!(!latch.triggered());

    assert!(latch.try_trigger(0.85));
    assert!(latch.triggered());
    // Latched: further crossings, in either direction, change nothing
    assert!(!latch.try_trigger(0.9));
    assert!(!latch.try_trigger(0.1));
    assert!(latch.triggered());
}

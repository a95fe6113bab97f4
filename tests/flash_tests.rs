// Host-side tests for the hidden-frame flash state machine.

#![allow(dead_code)]
mod flash {
    include!("../src/core/flash.rs");
}

use flash::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn machine(flash_count: u32) -> FlashMachine {
    FlashMachine::new(FlashConfig {
        flash_count,
        image_count: 3,
    })
}

#[test]
fn arm_picks_an_image_in_range() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let mut m = machine(1);
        let index = m.arm(&mut rng).expect("idle machine must arm");
        assert!(index < 3);
    }
}

#[test]
fn arm_is_refused_while_a_cycle_is_in_flight() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut m = machine(1);
    assert!(m.arm(&mut rng).is_some());
    assert_eq!(m.arm(&mut rng), None);

    // One toggle in: still refused
    assert_eq!(m.on_toggle(), FlashStep::Continue);
    assert_eq!(m.arm(&mut rng), None);

    // Cycle complete: refused during cooldown too
    assert_eq!(m.on_toggle(), FlashStep::Finished);
    assert_eq!(m.phase(), FlashPhase::Cooldown);
    assert_eq!(m.arm(&mut rng), None);

    // Cooldown elapsed: re-armable
    m.on_cooldown_elapsed();
    assert!(m.is_idle());
    assert!(m.arm(&mut rng).is_some());
}

#[test]
fn exactly_two_toggles_per_configured_flash() {
    let mut rng = StdRng::seed_from_u64(2);
    for flash_count in [1u32, 2, 3] {
        let mut m = machine(flash_count);
        m.arm(&mut rng).unwrap();
        let total = flash_count * 2;
        for _ in 0..total - 1 {
            assert_eq!(m.on_toggle(), FlashStep::Continue);
        }
        assert_eq!(m.on_toggle(), FlashStep::Finished);
        assert_eq!(m.phase(), FlashPhase::Cooldown);
    }
}

#[test]
fn stray_toggle_after_cycle_is_harmless() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut m = machine(1);
    m.arm(&mut rng).unwrap();
    m.on_toggle();
    m.on_toggle();
    // A timer tick that raced the clear must not restart the cycle
    assert_eq!(m.on_toggle(), FlashStep::Finished);
    assert_eq!(m.phase(), FlashPhase::Cooldown);
}

#[test]
fn cooldown_elapsed_is_only_meaningful_in_cooldown() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut m = machine(1);
    m.on_cooldown_elapsed();
    assert!(m.is_idle());

    m.arm(&mut rng).unwrap();
    m.on_cooldown_elapsed();
    // Still mid-flash; a stale timeout must not unlock arming
    assert_eq!(m.arm(&mut rng), None);
}

#[test]
fn no_images_means_no_flash() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut m = FlashMachine::new(FlashConfig {
        flash_count: 1,
        image_count: 0,
    });
    assert_eq!(m.arm(&mut rng), None);
    assert!(m.is_idle());
}

#[test]
fn image_pick_varies_across_cycles() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut m = machine(1);
    let mut seen = [false; 3];
    for _ in 0..100 {
        let index = m.arm(&mut rng).unwrap();
        seen[index] = true;
        m.on_toggle();
        m.on_toggle();
        m.on_cooldown_elapsed();
    }
    assert!(seen.iter().filter(|s| **s).count() >= 2);
}

// Hidden-frame ("25th frame") flash state machine.
//
// The timing (toggle interval, cooldown timeout) lives in the web layer;
// this machine only tracks the phase and counts toggles, so the guarantees
// (one flash in flight, fixed toggle count, refractory period) are testable
// on the host.

use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashPhase {
    Idle,
    /// Visibility toggles issued so far in the current cycle.
    Flashing { toggles_done: u32 },
    Cooldown,
}

#[derive(Clone, Copy, Debug)]
pub struct FlashConfig {
    /// Full on/off cycles per flash; each cycle is two visibility toggles.
    pub flash_count: u32,
    /// Number of preloaded hidden-frame images to pick from.
    pub image_count: usize,
}

/// Outcome of one toggle tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlashStep {
    /// Keep the toggle timer running.
    Continue,
    /// Cycle complete: stop the timer, force visibility off, start cooldown.
    Finished,
}

pub struct FlashMachine {
    config: FlashConfig,
    phase: FlashPhase,
}

impl FlashMachine {
    pub fn new(config: FlashConfig) -> Self {
        Self {
            config,
            phase: FlashPhase::Idle,
        }
    }

    #[inline]
    pub fn phase(&self) -> FlashPhase {
        self.phase
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.phase == FlashPhase::Idle
    }

    /// Arm a flash. Returns the index of the image to flash, or `None` while
    /// a cycle or its cooldown is still in flight.
    pub fn arm<R: Rng>(&mut self, rng: &mut R) -> Option<usize> {
        if self.phase != FlashPhase::Idle || self.config.image_count == 0 {
            return None;
        }
        self.phase = FlashPhase::Flashing { toggles_done: 0 };
        Some(rng.gen_range(0..self.config.image_count))
    }

    /// Record one visibility toggle of the flash timer.
    pub fn on_toggle(&mut self) -> FlashStep {
        match self.phase {
            FlashPhase::Flashing { toggles_done } => {
                let done = toggles_done + 1;
                if done >= self.config.flash_count * 2 {
                    self.phase = FlashPhase::Cooldown;
                    FlashStep::Finished
                } else {
                    self.phase = FlashPhase::Flashing { toggles_done: done };
                    FlashStep::Continue
                }
            }
            // Stray timer tick after the cycle ended; nothing to do.
            _ => FlashStep::Finished,
        }
    }

    /// The cooldown timeout fired: accept new arms again.
    pub fn on_cooldown_elapsed(&mut self) {
        if self.phase == FlashPhase::Cooldown {
            self.phase = FlashPhase::Idle;
        }
    }
}

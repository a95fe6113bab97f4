// Model rotation: free spin until the first scroll, then eased convergence
// to a frontal view.

/// Angular increment per frame while spinning freely (radians).
pub const SPIN_STEP_RAD: f32 = 0.025;

/// Per-frame easing factor toward the target angle once spinning stops.
pub const CONVERGE_FACTOR: f32 = 0.25;

/// Snap to the target once within this distance, so convergence terminates
/// instead of approaching asymptotically.
pub const SNAP_EPSILON_RAD: f32 = 0.001;

/// Scroll distance (pixels) that irreversibly ends the free spin.
pub const SCROLL_FLIP_THRESHOLD_PX: f64 = 10.0;

#[derive(Clone, Copy, Debug)]
pub struct RotationMode {
    pub spinning: bool,
    pub has_scrolled: bool,
    pub target_y: f32,
}

impl Default for RotationMode {
    fn default() -> Self {
        Self {
            spinning: true,
            has_scrolled: false,
            target_y: 0.0,
        }
    }
}

impl RotationMode {
    /// Note a scroll position; flips spin -> convergence exactly once.
    /// Returns true on the flip.
    pub fn note_scroll(&mut self, scroll_y: f64) -> bool {
        if !self.has_scrolled && scroll_y > SCROLL_FLIP_THRESHOLD_PX {
            self.has_scrolled = true;
            self.spinning = false;
            self.target_y = 0.0;
            return true;
        }
        false
    }

    /// Advance a model's Y rotation by one frame.
    pub fn step(&self, current_y: f32) -> f32 {
        if self.spinning {
            return current_y + SPIN_STEP_RAD;
        }
        let next = current_y + (self.target_y - current_y) * CONVERGE_FACTOR;
        if (next - self.target_y).abs() < SNAP_EPSILON_RAD {
            self.target_y
        } else {
            next
        }
    }
}

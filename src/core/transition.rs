// One-shot scene transition latch.

/// Scroll progress past which the page fades to the full-intensity noise
/// scene.
pub const TRANSITION_THRESHOLD: f32 = 0.8;

/// One-way latch; there is no reset short of a page reload.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransitionLatch {
    triggered: bool,
}

impl TransitionLatch {
    #[inline]
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Returns true exactly once, the first time `progress` exceeds the
    /// threshold.
    pub fn try_trigger(&mut self, progress: f32) -> bool {
        if !self.triggered && progress > TRANSITION_THRESHOLD {
            self.triggered = true;
            return true;
        }
        false
    }
}

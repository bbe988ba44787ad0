/// Elapsed whole seconds in the current episode, bounded by its duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProgressTracker {
    position: u32,
    duration: u32,
}

impl ProgressTracker {
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Metadata for a new episode arrived: rewind to zero.
    pub fn reset(&mut self, duration: u32) {
        self.duration = duration;
        self.position = 0;
    }

    /// Time-update tick from the element. Stores the floor of `current_time`.
    pub fn on_time_update(&mut self, current_time: f64) -> u32 {
        self.position = self.clamp(current_time);
        self.position
    }

    /// User dragged the slider of an episode `duration` seconds long. Returns
    /// the position the element should jump to. Works before metadata arrives.
    pub fn seek(&mut self, target: f64, duration: u32) -> u32 {
        self.duration = duration;
        self.position = self.clamp(target);
        self.position
    }

    fn clamp(&self, seconds: f64) -> u32 {
        if !seconds.is_finite() || seconds <= 0.0 {
            return 0;
        }
        (seconds.floor() as u64).min(self.duration as u64) as u32
    }
}

use std::time::{Duration, Instant};

/// Frame clock driving debounced camera work between redraws
#[derive(Debug)]
pub struct FrameClock {
    last_tick: Instant,
    max_delta: Duration,
}

impl FrameClock {
    /// Deltas are capped at `max_delta` so a stalled frame cannot skip
    /// straight through a debounce window.
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_tick: Instant::now(),
            max_delta,
        }
    }

    /// Seconds since the previous tick, capped
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_tick).min(self.max_delta);
        self.last_tick = now;
        delta.as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(250))
    }
}

/// Self-contained timers - accumulate delta time, no clock dependency

/// Debounce timer - fires once after `window` seconds without a new trigger.
/// Each trigger replaces the pending value and restarts the window.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    window: f32,
    elapsed: f32,
    pending: Option<T>,
}

impl<T> Debounce<T> {
    /// Create debounce with quiescence window in seconds
    pub fn new(window: f32) -> Self {
        Self {
            window,
            elapsed: 0.0,
            pending: None,
        }
    }

    /// Schedule `value`, superseding anything still pending
    pub fn trigger(&mut self, value: T) {
        self.pending = Some(value);
        self.elapsed = 0.0;
    }

    /// Advance by delta, returns the pending value once the window has passed
    pub fn tick(&mut self, delta: f32) -> Option<T> {
        self.pending.as_ref()?;
        self.elapsed += delta;
        if self.elapsed >= self.window {
            self.elapsed = 0.0;
            self.pending.take()
        } else {
            None
        }
    }

    /// Drop the pending value without firing
    pub fn cancel(&mut self) -> Option<T> {
        self.elapsed = 0.0;
        self.pending.take()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

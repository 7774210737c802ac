use std::time::{Duration, Instant};

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in seconds as float.
    pub fn elapsed_secs_as_f64(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.start.elapsed().as_millis()
    }

    /// Runs given action and returns its result with elapsed time.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let start = Instant::now();
        let result = action();

        (result, start.elapsed())
    }
}

use std::time::{Duration, Instant};
use tracing::debug;

/// Timer for one pipeline stage; logs the duration when stopped
pub struct StageTimer {
    stage: &'static str,
    start: Instant,
}

impl StageTimer {
    pub fn start(stage: &'static str) -> Self {
        Self {
            stage,
            start: Instant::now(),
        }
    }

    /// Get elapsed time without stopping the timer
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and log the duration
    pub fn stop(self) {
        debug!(
            stage = self.stage,
            duration_ms = self.start.elapsed().as_millis(),
            "stage completed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_measures_elapsed() {
        let timer = StageTimer::start("noop");
        assert!(timer.elapsed() < Duration::from_secs(1));
        timer.stop();
    }
}

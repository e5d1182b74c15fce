//! # Timing instrumentation.
//!
//! A [`Timer`] is a `(label, start instant)` pair covering one measured
//! span: the whole run, or a single sort attempt. Stopping computes elapsed
//! milliseconds; stopping an absent timer yields zero, not a failure.
//!
//! Purely observational: timer values feed the run report and the
//! `TimerStopped` events consumed by logging subscribers.

use std::borrow::Cow;
use std::time::Instant;

/// A labeled stopwatch, consumed once at the end of its span.
#[derive(Debug)]
pub struct Timer {
    label: Cow<'static, str>,
    started: Instant,
}

impl Timer {
    /// Captures the current instant under the given label.
    pub fn start(label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            label: label.into(),
            started: Instant::now(),
        }
    }

    /// Returns the timer's label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Milliseconds elapsed since start, without consuming the timer.
    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Consumes the timer and returns elapsed milliseconds.
    pub fn stop(self) -> u64 {
        self.elapsed_ms()
    }
}

/// Stops a timer that may never have been started.
///
/// Absent timers yield zero.
pub fn stop_opt(timer: Option<Timer>) -> u64 {
    timer.map_or(0, Timer::stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn absent_timer_stops_to_zero() {
        assert_eq!(stop_opt(None), 0);
    }

    #[test]
    fn elapsed_grows_with_time() {
        let timer = Timer::start("test span");
        std::thread::sleep(Duration::from_millis(10));
        assert!(timer.stop() >= 10);
    }

    #[test]
    fn label_is_preserved() {
        let timer = Timer::start("attempt");
        assert_eq!(timer.label(), "attempt");
    }
}

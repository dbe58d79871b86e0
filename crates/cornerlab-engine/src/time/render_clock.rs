use std::time::{Duration, Instant};

/// Measurement of one render.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderTime {
    /// Wall time spent rendering.
    pub duration: Duration,

    /// Monotonic render counter, starting at 0.
    pub frame_index: u64,
}

/// Start mark returned by [`RenderClock::start`].
#[derive(Debug, Copy, Clone)]
#[must_use = "pass the span to RenderClock::finish"]
pub struct RenderSpan {
    started: Instant,
}

/// Render timer with a smoothed running average.
///
/// The average is an exponential moving average so a single slow frame (first
/// render after a resize, debugger pause) does not dominate the readout.
#[derive(Debug, Clone)]
pub struct RenderClock {
    frame_index: u64,
    average: Option<Duration>,
    smoothing: f32,
}

impl RenderClock {
    /// Creates a clock with a smoothing factor of `0.1`.
    pub fn new() -> Self {
        Self::with_smoothing(0.1)
    }

    /// `smoothing` is the weight of the newest sample, clamped to `(0, 1]`.
    pub fn with_smoothing(smoothing: f32) -> Self {
        Self {
            frame_index: 0,
            average: None,
            smoothing: if smoothing > 0.0 { smoothing.min(1.0) } else { 1.0 },
        }
    }

    pub fn start(&self) -> RenderSpan {
        RenderSpan { started: Instant::now() }
    }

    pub fn finish(&mut self, span: RenderSpan) -> RenderTime {
        self.record(span.started.elapsed())
    }

    /// Adds an externally measured sample.
    pub fn record(&mut self, duration: Duration) -> RenderTime {
        self.average = Some(match self.average {
            None => duration,
            Some(avg) => avg.mul_f32(1.0 - self.smoothing) + duration.mul_f32(self.smoothing),
        });

        let time = RenderTime { duration, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }

    /// Smoothed render duration, `None` before the first sample.
    pub fn average(&self) -> Option<Duration> {
        self.average
    }

    /// Number of renders recorded so far.
    pub fn frames(&self) -> u64 {
        self.frame_index
    }
}

impl Default for RenderClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_counts_up() {
        let mut clock = RenderClock::new();
        assert_eq!(clock.record(Duration::from_millis(1)).frame_index, 0);
        assert_eq!(clock.record(Duration::from_millis(1)).frame_index, 1);
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn first_sample_seeds_the_average() {
        let mut clock = RenderClock::new();
        assert_eq!(clock.average(), None);
        clock.record(Duration::from_millis(4));
        assert_eq!(clock.average(), Some(Duration::from_millis(4)));
    }

    #[test]
    fn average_moves_towards_new_samples() {
        let mut clock = RenderClock::with_smoothing(0.5);
        clock.record(Duration::from_millis(10));
        clock.record(Duration::from_millis(20));
        let avg = clock.average().unwrap().as_secs_f64();
        assert!((avg - 0.015).abs() < 1e-6);
    }

    #[test]
    fn finish_measures_elapsed_time() {
        let mut clock = RenderClock::new();
        let span = clock.start();
        std::thread::sleep(Duration::from_millis(2));
        assert!(clock.finish(span).duration >= Duration::from_millis(2));
    }
}

use std::time::Duration;

/// Fixed-interval playback stepper fed by [`FrameTime`](super::FrameTime) deltas.
///
/// Accumulates elapsed time and reports how many playback steps are due.
/// While paused, time is discarded rather than banked.
#[derive(Debug, Clone)]
pub struct PlaybackPacer {
    interval: f32,
    accumulated: f32,
    paused: bool,
}

impl PlaybackPacer {
    /// `interval` is clamped to at least one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.as_secs_f32().max(0.001),
            accumulated: 0.0,
            paused: false,
        }
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
        self.accumulated = 0.0;
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.set_paused(!self.paused);
        self.paused
    }

    /// Adds `dt` seconds and returns the number of steps now due.
    pub fn advance(&mut self, dt: f32) -> u32 {
        if self.paused || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulated += dt;
        let steps = (self.accumulated / self.interval).floor();
        self.accumulated -= steps * self.interval;
        steps as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pacer_ms(ms: u64) -> PlaybackPacer {
        PlaybackPacer::new(Duration::from_millis(ms))
    }

    #[test]
    fn accumulates_partial_intervals() {
        let mut p = pacer_ms(100);
        assert_eq!(p.advance(0.06), 0);
        assert_eq!(p.advance(0.06), 1);
        assert_eq!(p.advance(0.05), 0);
    }

    #[test]
    fn long_delta_yields_several_steps() {
        let mut p = pacer_ms(100);
        assert_eq!(p.advance(0.35), 3);
    }

    #[test]
    fn paused_discards_time() {
        let mut p = pacer_ms(100);
        p.advance(0.09);
        assert!(p.toggle_pause());
        assert_eq!(p.advance(1.0), 0);
        assert!(!p.toggle_pause());
        assert_eq!(p.advance(0.05), 0);
    }

    #[test]
    fn rejects_non_finite_delta() {
        let mut p = pacer_ms(10);
        assert_eq!(p.advance(f32::NAN), 0);
        assert_eq!(p.advance(-1.0), 0);
    }
}

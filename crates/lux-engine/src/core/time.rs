/// Converts animation-frame timestamps into per-frame timing.
///
/// Hosts pass the `requestAnimationFrame` timestamp (milliseconds); the clock
/// reports the delta since the previous frame and the time since the first.
pub struct FrameClock {
    start_ms: Option<f64>,
    last_ms: Option<f64>,
    frame: u64,
    /// Upper bound on a single delta, so a backgrounded tab does not
    /// resume with one giant step.
    max_dt: f64,
}

/// Timing of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Host timestamp of this frame, milliseconds.
    pub now_ms: f64,
    /// Seconds since the previous frame (zero on the first).
    pub dt: f64,
    /// Seconds since the first frame.
    pub elapsed: f64,
    /// Frames seen so far, starting at 0.
    pub frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(0.1)
    }

    pub fn with_max_dt(max_dt: f64) -> Self {
        Self {
            start_ms: None,
            last_ms: None,
            frame: 0,
            max_dt,
        }
    }

    /// Register a frame at `now_ms`.
    pub fn tick(&mut self, now_ms: f64) -> FrameTime {
        let start = *self.start_ms.get_or_insert(now_ms);
        let dt = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, self.max_dt),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        let time = FrameTime {
            now_ms,
            dt,
            elapsed: (now_ms - start) / 1000.0,
            frame: self.frame,
        };
        self.frame += 1;
        time
    }

    /// Forget the previous timestamp so the next frame after a pause has dt 0.
    /// Elapsed time keeps counting from the original start.
    pub fn pause(&mut self) {
        self.last_ms = None;
    }

    pub fn frames(&self) -> u64 {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_has_zero_dt() {
        let mut clock = FrameClock::new();
        let t = clock.tick(1000.0);
        assert_eq!(t.dt, 0.0);
        assert_eq!(t.elapsed, 0.0);
        assert_eq!(t.frame, 0);
    }

    #[test]
    fn reports_delta_and_elapsed() {
        let mut clock = FrameClock::new();
        clock.tick(1000.0);
        let t = clock.tick(1016.0);
        assert!((t.dt - 0.016).abs() < 1e-9);
        let t = clock.tick(1050.0);
        assert!((t.elapsed - 0.05).abs() < 1e-9);
        assert_eq!(t.frame, 2);
    }

    #[test]
    fn caps_long_gaps() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        let t = clock.tick(5000.0);
        assert_eq!(t.dt, 0.1);
        assert_eq!(t.elapsed, 5.0);
    }

    #[test]
    fn pause_resets_delta_only() {
        let mut clock = FrameClock::new();
        clock.tick(0.0);
        clock.pause();
        let t = clock.tick(2000.0);
        assert_eq!(t.dt, 0.0);
        assert_eq!(t.elapsed, 2.0);
    }
}

use crate::api::config::SmoothScrollConfig;
use crate::extensions::easing::Easing;

/// Options for [`SmoothScroll::scroll_to`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollToOptions {
    /// Added to the target before clamping.
    pub offset: f64,
    /// Animation length in seconds; `None` uses the configured duration.
    pub duration: Option<f64>,
    pub easing: Easing,
    /// Jump straight to the destination.
    pub immediate: bool,
}

impl Default for ScrollToOptions {
    fn default() -> Self {
        Self {
            offset: 0.0,
            duration: None,
            easing: Easing::ScrollExpo,
            immediate: false,
        }
    }
}

impl ScrollToOptions {
    /// The slower glide used for in-page anchor links.
    pub fn anchor(config: &SmoothScrollConfig) -> Self {
        Self {
            duration: Some(config.anchor_duration),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f64,
    to: f64,
    elapsed: f64,
    duration: f64,
    easing: Easing,
}

impl ScrollAnimation {
    /// Advance by `dt` seconds; returns the position and whether it finished.
    fn advance(&mut self, dt: f64) -> (f64, bool) {
        self.elapsed += dt;
        let t = if self.duration > 0.0 {
            (self.elapsed / self.duration).min(1.0)
        } else {
            1.0
        };
        if t >= 1.0 {
            return (self.to, true);
        }
        let eased = self.easing.apply(t as f32) as f64;
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// Eased vertical scroller driven by wheel input and `requestAnimationFrame`.
///
/// Holds a target position that input moves instantly and an animated
/// position that chases it. The host feeds input through [`on_wheel`],
/// calls [`raf`] every frame and writes the returned position to the window.
///
/// [`on_wheel`]: SmoothScroll::on_wheel
/// [`raf`]: SmoothScroll::raf
#[derive(Debug)]
pub struct SmoothScroll {
    config: SmoothScrollConfig,
    position: f64,
    target: f64,
    limit: f64,
    animation: Option<ScrollAnimation>,
    stopped: bool,
    last_time: Option<f64>,
}

impl SmoothScroll {
    pub fn new(config: SmoothScrollConfig) -> Self {
        Self {
            config,
            position: 0.0,
            target: 0.0,
            limit: 0.0,
            animation: None,
            stopped: false,
            last_time: None,
        }
    }

    pub fn config(&self) -> &SmoothScrollConfig {
        &self.config
    }

    /// Current animated scroll position.
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn is_scrolling(&self) -> bool {
        self.animation.is_some()
    }

    /// Maximum scroll position (document height minus viewport height).
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.position = self.position.clamp(0.0, self.limit);
    }

    /// Adopt a position the page reached natively (touch, keyboard, scroll
    /// while stopped). Cancels any running animation.
    pub fn sync(&mut self, position: f64) {
        let position = position.clamp(0.0, self.limit);
        self.position = position;
        self.target = position;
        self.animation = None;
    }

    pub fn start(&mut self) {
        if self.stopped {
            log::debug!("smooth scroll: start at {}", self.position);
        }
        self.stopped = false;
    }

    /// Freeze the scroller: input is ignored and no frames animate until
    /// [`start`](Self::start).
    pub fn stop(&mut self) {
        if !self.stopped {
            log::debug!("smooth scroll: stop at {}", self.position);
        }
        self.stopped = true;
        self.target = self.position;
        self.animation = None;
    }

    /// Wheel input in pixels. Returns `true` when consumed, in which case the
    /// host suppresses the native scroll.
    pub fn on_wheel(&mut self, delta_y: f64) -> bool {
        if self.stopped {
            return false;
        }
        self.nudge(delta_y * self.config.wheel_multiplier);
        true
    }

    /// Touch drag in pixels. Only consumed when smooth touch is enabled;
    /// otherwise the page scrolls natively and the host calls [`sync`](Self::sync).
    pub fn on_touch(&mut self, delta_y: f64) -> bool {
        if self.stopped || !self.config.smooth_touch {
            return false;
        }
        self.nudge(delta_y * self.config.touch_multiplier);
        true
    }

    fn nudge(&mut self, delta: f64) {
        self.target = (self.target + delta).clamp(0.0, self.limit);
        self.animate_to(self.target, self.config.duration, Easing::ScrollExpo);
    }

    /// Scroll to an absolute position. Ignored while stopped.
    pub fn scroll_to(&mut self, target: f64, options: ScrollToOptions) {
        if self.stopped {
            return;
        }
        let destination = (target + options.offset).clamp(0.0, self.limit);
        if options.immediate {
            self.sync(destination);
            return;
        }
        self.target = destination;
        let duration = options.duration.unwrap_or(self.config.duration);
        self.animate_to(destination, duration, options.easing);
    }

    fn animate_to(&mut self, to: f64, duration: f64, easing: Easing) {
        self.animation = Some(ScrollAnimation {
            from: self.position,
            to,
            elapsed: 0.0,
            duration,
            easing,
        });
    }

    /// Advance to `time_ms` (a `requestAnimationFrame` timestamp). Returns
    /// the new position when the scroller moved this frame.
    pub fn raf(&mut self, time_ms: f64) -> Option<f64> {
        let dt = self
            .last_time
            .map(|last| ((time_ms - last) / 1000.0).max(0.0))
            .unwrap_or(0.0);
        self.last_time = Some(time_ms);

        if self.stopped {
            return None;
        }
        let animation = self.animation.as_mut()?;
        let (position, done) = animation.advance(dt);
        self.position = position;
        if done {
            self.animation = None;
        }
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroller() -> SmoothScroll {
        let mut s = SmoothScroll::new(SmoothScrollConfig::default());
        s.set_limit(2000.0);
        s.raf(0.0);
        s
    }

    #[test]
    fn wheel_moves_target_and_animates() {
        let mut s = scroller();
        assert!(s.on_wheel(100.0));
        assert_eq!(s.target(), 100.0);

        let mid = s.raf(300.0).unwrap();
        assert!(mid > 0.0 && mid < 100.0);

        assert_eq!(s.raf(1500.0), Some(100.0));
        assert!(!s.is_scrolling());
        assert_eq!(s.raf(1600.0), None);
    }

    #[test]
    fn target_clamps_to_limit() {
        let mut s = scroller();
        s.on_wheel(-500.0);
        assert_eq!(s.target(), 0.0);
        s.on_wheel(5000.0);
        assert_eq!(s.target(), 2000.0);
    }

    #[test]
    fn stopped_ignores_input() {
        let mut s = scroller();
        s.on_wheel(300.0);
        s.raf(100.0);
        s.stop();
        assert!(!s.on_wheel(100.0));
        s.scroll_to(1000.0, ScrollToOptions::default());
        assert_eq!(s.raf(2000.0), None);
        assert_eq!(s.target(), s.position());

        s.start();
        assert!(s.on_wheel(10.0));
    }

    #[test]
    fn anchor_scroll_takes_two_seconds() {
        let mut s = scroller();
        let opts = ScrollToOptions::anchor(s.config());
        assert_eq!(opts.duration, Some(2.0));
        s.scroll_to(800.0, opts);

        // The expo curve saturates at t ~= 0.9997.
        let at_1_2 = s.raf(1200.0).unwrap();
        assert!(at_1_2 < 800.0);
        assert_eq!(s.raf(2000.0), Some(800.0));
    }

    #[test]
    fn immediate_jumps() {
        let mut s = scroller();
        s.scroll_to(
            600.0,
            ScrollToOptions {
                offset: -100.0,
                immediate: true,
                ..Default::default()
            },
        );
        assert_eq!(s.position(), 500.0);
        assert!(!s.is_scrolling());
    }

    #[test]
    fn touch_is_native_by_default() {
        let mut s = scroller();
        assert!(!s.on_touch(50.0));
        s.sync(250.0);
        assert_eq!(s.position(), 250.0);
        assert_eq!(s.target(), 250.0);
    }
}

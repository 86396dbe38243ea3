// extensions/easing.rs
//
// Easing curves for tweens and the smooth scroller.
// Pure math, no element or scroll state.
//
// Name mapping from the animation vocabulary the page uses:
//   power1.out -> QuadOut, power2.out -> CubicOut, power3.out -> QuartOut,
//   elastic.out(1, 0.3) -> ElasticOut.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Default tween ease.
    #[default]
    QuadOut,
    CubicOut,
    QuartOut,
    /// Spring with amplitude 1 and period 0.3.
    ElasticOut,
    /// Scroller curve `min(1, 1.001 - 2^(-10t))`: exponential settle that
    /// reaches exactly 1 slightly before the end.
    ScrollExpo,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t` in [0, 1].
    /// Returns the eased value, typically in [0, 1] (Elastic overshoots).
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,

            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::QuartOut => 1.0 - (1.0 - t).powi(4),

            Easing::ElasticOut => {
                const PERIOD: f32 = 0.3;
                const SHIFT: f32 = PERIOD / 4.0;
                if t == 0.0 {
                    0.0
                } else if t == 1.0 {
                    1.0
                } else {
                    2.0_f32.powf(-10.0 * t)
                        * ((t - SHIFT) * std::f32::consts::TAU / PERIOD).sin()
                        + 1.0
                }
            }

            Easing::ScrollExpo => (1.001 - 2.0_f32.powf(-10.0 * t)).min(1.0),
        }
    }
}

// ── Interpolation helpers ────────────────────────────────────────────────

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate with easing.
#[inline]
pub fn ease(a: f32, b: f32, t: f32, easing: Easing) -> f32 {
    lerp(a, b, easing.apply(t))
}

use glam::DVec2;

use super::geometry::ViewportGeometry;
use crate::api::config::OrbitalConfig;

/// Per-frame phase increments, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngularVelocity {
    pub outer: f64,
    pub inner: f64,
    pub core: f64,
}

impl From<&OrbitalConfig> for AngularVelocity {
    fn from(config: &OrbitalConfig) -> Self {
        Self {
            outer: config.speed_outer,
            inner: config.speed_inner,
            core: config.speed_core,
        }
    }
}

/// Everything the orbital renderer mutates between frames.
///
/// Phases grow without bound and are only ever read through `sin`/`cos`,
/// so they are never wrapped. Positions are derived from the phases each
/// frame rather than integrated, so no drift accumulates.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalState {
    /// Outer body (light source).
    pub outer_phase: f64,
    /// Inner body (lit body).
    pub inner_phase: f64,
    pub core_phase: f64,
    pub velocity: AngularVelocity,
    pub core_radius: f64,
    pub satellite_radius: f64,
    pub geometry: ViewportGeometry,
}

impl OrbitalState {
    pub fn new(config: &OrbitalConfig, geometry: ViewportGeometry) -> Self {
        Self {
            outer_phase: 0.0,
            inner_phase: 0.0,
            core_phase: 0.0,
            velocity: AngularVelocity::from(config),
            core_radius: config.core_radius,
            satellite_radius: config.satellite_radius,
            geometry,
        }
    }

    /// Step every phase by one frame.
    pub fn advance(&mut self) {
        self.outer_phase += self.velocity.outer;
        self.inner_phase += self.velocity.inner;
        self.core_phase += self.velocity.core;
    }

    /// Replace the viewport-derived constants.
    pub fn set_geometry(&mut self, geometry: ViewportGeometry) {
        self.geometry = geometry;
    }

    /// Light-source body position.
    pub fn sun_position(&self) -> DVec2 {
        body_position(self.geometry.center(), self.geometry.outer_radius, self.outer_phase)
    }

    /// Lit body position.
    pub fn moon_position(&self) -> DVec2 {
        body_position(self.geometry.center(), self.geometry.inner_radius, self.inner_phase)
    }
}

/// Point at `angle` on the circle of `radius` around `center`.
pub fn body_position(center: DVec2, radius: f64, angle: f64) -> DVec2 {
    center + radius * DVec2::new(angle.cos(), angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Size;

    fn state_500() -> OrbitalState {
        let geometry = ViewportGeometry::new(Size::new(500.0, 500.0), 2.0);
        OrbitalState::new(&OrbitalConfig::default(), geometry)
    }

    #[test]
    fn advance_applies_fixed_deltas() {
        let mut s = state_500();
        s.advance();
        s.advance();
        assert!((s.outer_phase - 0.004).abs() < 1e-12);
        assert!((s.inner_phase + 0.006).abs() < 1e-12);
        assert!((s.core_phase - 0.010).abs() < 1e-12);
    }

    #[test]
    fn phases_are_not_wrapped() {
        let mut s = state_500();
        s.velocity.outer = 1.0;
        for _ in 0..10 {
            s.advance();
        }
        assert!(s.outer_phase > std::f64::consts::TAU);
    }

    #[test]
    fn sun_starts_on_the_right() {
        let s = state_500();
        assert_eq!(s.sun_position(), DVec2::new(250.0 + 215.0, 250.0));
        assert_eq!(s.moon_position(), DVec2::new(250.0 + 107.5, 250.0));
    }

    #[test]
    fn positions_stay_on_their_circle() {
        let center = DVec2::new(123.0, -45.0);
        for i in 0..1000 {
            let angle = i as f64 * 0.7391 - 300.0;
            let p = body_position(center, 215.0, angle);
            assert!(((p - center).length() - 215.0).abs() < 1e-9, "angle {angle}");
        }
    }

    #[test]
    fn long_runs_do_not_drift_off_orbit() {
        let mut s = state_500();
        for _ in 0..100_000 {
            s.advance();
        }
        let r = (s.sun_position() - s.geometry.center()).length();
        assert!((r - s.geometry.outer_radius).abs() < 1e-9);
    }
}

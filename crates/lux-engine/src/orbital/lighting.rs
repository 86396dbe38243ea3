//! Phase shading for the lit body.
//!
//! The outer body acts as a light source. On the dark theme the inner body
//! is painted with a radial gradient whose bright spot leans toward the
//! light and whose strength falls with distance, like a moon phase. Every
//! other theme paints it flat and never enters this model.

use glam::DVec2;

use super::geometry::ViewportGeometry;
use super::palette::Palette;
use crate::api::error::Result;
use crate::renderer::color::Color;
use crate::renderer::traits::{FillStyle, RadialGradient, Surface};

/// Brightness at the closest approach.
pub const BRIGHTNESS_NEAR: f64 = 255.0;
/// Brightness at the farthest separation.
pub const BRIGHTNESS_FAR: f64 = 90.0;
pub const BRIGHTNESS_MIN: f64 = 60.0;
pub const BRIGHTNESS_MAX: f64 = 255.0;

/// Shadow stop offset at the closest approach.
pub const SHADOW_STOP_NEAR: f64 = 0.4;
/// Shadow stop offset at the farthest separation.
pub const SHADOW_STOP_FAR: f64 = 0.2;

/// Focal offset toward the light, as a fraction of the body radius.
pub const FOCAL_SHIFT: f64 = 0.5;

pub const SHADOW_COLOR: Color = Color::gray(0x33);
pub const BACKDROP_COLOR: Color = Color::gray(0x1a);

/// Linear map of `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
/// Not clamped. A zero-width input range maps everything to `out_min`.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return out_min;
    }
    (value - in_min) * (out_max - out_min) / span + out_min
}

/// Gray level of the light color for a body-to-light `distance`.
/// Closer is brighter; the result is clamped to `[60, 255]` and floored.
pub fn brightness(distance: f64, range: (f64, f64)) -> u8 {
    let raw = map_range(distance, range.0, range.1, BRIGHTNESS_NEAR, BRIGHTNESS_FAR);
    if raw.is_nan() {
        return BRIGHTNESS_MIN as u8;
    }
    raw.clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX).floor() as u8
}

/// Offset of the shadow stop; farther bodies start their shadow earlier.
/// Passed through unclamped.
pub fn shadow_stop(distance: f64, range: (f64, f64)) -> f64 {
    map_range(distance, range.0, range.1, SHADOW_STOP_NEAR, SHADOW_STOP_FAR)
}

/// Lighting solution for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseShading {
    /// Direction from the body to the light, radians.
    pub angle: f64,
    pub distance: f64,
    pub brightness: u8,
    /// Gradient focal point, shifted from the body center toward the light.
    pub focal: DVec2,
    pub shadow_stop: f64,
}

impl PhaseShading {
    pub fn compute(light: DVec2, body: DVec2, radius: f64, geometry: &ViewportGeometry) -> Self {
        let delta = light - body;
        let angle = delta.y.atan2(delta.x);
        let distance = delta.length();
        let range = geometry.distance_range();
        Self {
            angle,
            distance,
            brightness: brightness(distance, range),
            focal: body + FOCAL_SHIFT * radius * DVec2::new(angle.cos(), angle.sin()),
            shadow_stop: shadow_stop(distance, range),
        }
    }

    pub fn light_color(&self) -> Color {
        Color::gray(self.brightness)
    }

    /// Gradient spanning the body disc.
    pub fn gradient(&self, body: DVec2, radius: f64) -> RadialGradient {
        RadialGradient::new(self.focal, 0.0, body, radius)
            .with_stop(0.0, self.light_color())
            .with_stop(self.shadow_stop, SHADOW_COLOR)
            .with_stop(1.0, BACKDROP_COLOR)
    }
}

/// Paint the lit body: phase-shaded on the dark theme, flat otherwise.
pub fn draw_lit_body(
    surface: &mut dyn Surface,
    body: DVec2,
    radius: f64,
    light: DVec2,
    palette: &Palette,
    geometry: &ViewportGeometry,
) -> Result<()> {
    if !palette.is_dark() {
        return surface.fill_circle(body, radius, &FillStyle::Solid(palette.flat.clone()));
    }
    let shading = PhaseShading::compute(light, body, radius, geometry);
    surface.fill_circle(body, radius, &FillStyle::Radial(shading.gradient(body, radius)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Size;
    use crate::renderer::recorder::{DrawCommand, RecordingSurface};
    use crate::theme::kind::Theme;

    fn geometry_500() -> ViewportGeometry {
        ViewportGeometry::new(Size::new(500.0, 500.0), 2.0)
    }

    fn palette(theme: Theme) -> Palette {
        Palette {
            theme,
            core: Color::WHITE,
            orbit: Color::WHITE,
            flat: Color::gray(0x1a),
        }
    }

    #[test]
    fn brightness_at_range_ends() {
        let range = geometry_500().distance_range();
        assert_eq!(brightness(107.5, range), 255);
        assert_eq!(brightness(322.5, range), 90);
    }

    #[test]
    fn brightness_is_clamped_everywhere() {
        let range = geometry_500().distance_range();
        for d in [-1e9, -50.0, 0.0, 50.0, 400.0, 1e6, f64::INFINITY, f64::NAN] {
            let b = brightness(d, range) as f64;
            assert!((BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(&b), "d={d} b={b}");
        }
        assert_eq!(brightness(0.0, range), 255);
        assert_eq!(brightness(1e6, range), 60);
    }

    #[test]
    fn brightness_never_increases_with_distance() {
        let range = geometry_500().distance_range();
        let mut last = u8::MAX;
        let mut d = 0.0;
        while d < 500.0 {
            let b = brightness(d, range);
            assert!(b <= last, "brightness rose at d={d}");
            last = b;
            d += 0.25;
        }
    }

    #[test]
    fn midpoint_uses_unclamped_values() {
        let range = geometry_500().distance_range();
        let mid = (range.0 + range.1) / 2.0;
        assert_eq!(brightness(mid, range), 172);
        assert!((shadow_stop(mid, range) - 0.3).abs() < 1e-12);
    }

    #[test]
    fn shadow_stop_is_not_clamped() {
        let range = geometry_500().distance_range();
        assert!((shadow_stop(107.5, range) - 0.4).abs() < 1e-12);
        assert!((shadow_stop(322.5, range) - 0.2).abs() < 1e-12);
        assert!(shadow_stop(0.0, range) > 0.4);
    }

    #[test]
    fn focal_point_leans_toward_light() {
        let g = geometry_500();
        let body = DVec2::new(100.0, 100.0);
        let light = DVec2::new(100.0, 300.0);
        let s = PhaseShading::compute(light, body, 8.0, &g);
        assert!((s.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((s.focal - DVec2::new(100.0, 104.0)).length() < 1e-9);
        assert_eq!(s.distance, 200.0);
    }

    #[test]
    fn gradient_stops() {
        let g = geometry_500();
        let body = DVec2::new(0.0, 0.0);
        let s = PhaseShading::compute(DVec2::new(107.5, 0.0), body, 8.0, &g);
        let grad = s.gradient(body, 8.0);
        assert_eq!(grad.start_radius, 0.0);
        assert_eq!(grad.end, body);
        assert_eq!(grad.end_radius, 8.0);
        assert_eq!(grad.stops[0].color, Color::gray(255));
        assert_eq!(grad.stops[1].color, SHADOW_COLOR);
        assert_eq!(grad.stops[2].offset, 1.0);
        assert_eq!(grad.stops[2].color, BACKDROP_COLOR);
    }

    #[test]
    fn flat_themes_never_build_a_gradient() {
        let g = geometry_500();
        let mut surface = RecordingSurface::new(500.0, 500.0);
        for theme in [Theme::Light, Theme::Blue] {
            draw_lit_body(&mut surface, DVec2::ZERO, 8.0, DVec2::X, &palette(theme), &g).unwrap();
        }
        assert_eq!(surface.gradient_fills(), 0);
        for cmd in surface.fills() {
            assert!(matches!(cmd, DrawCommand::Fill { style: FillStyle::Solid(_), .. }));
        }
    }

    #[test]
    fn dark_theme_uses_the_gradient() {
        let g = geometry_500();
        let mut surface = RecordingSurface::new(500.0, 500.0);
        draw_lit_body(&mut surface, DVec2::ZERO, 8.0, DVec2::X, &palette(Theme::Dark), &g).unwrap();
        assert_eq!(surface.gradient_fills(), 1);
    }
}

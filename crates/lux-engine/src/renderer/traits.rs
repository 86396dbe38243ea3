//! Drawing-surface contract for 2D renderers.
//!
//! The engine never talks to a browser directly. Components draw through
//! [`Surface`], which mirrors the subset of the Canvas 2D API they need.
//! `lux-web` implements it over `CanvasRenderingContext2d`; the
//! [`RecordingSurface`](super::recorder::RecordingSurface) implements it
//! headlessly for tests and tooling.

use std::f64::consts::TAU;

use glam::DVec2;

use super::color::Color;
use crate::api::error::Result;
use crate::api::types::Size;

/// One color stop of a gradient. `offset` is normally in `[0, 1]`; it is
/// passed to the surface exactly as computed.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Color,
}

/// Two-circle radial gradient, as `createRadialGradient(x0, y0, r0, x1, y1, r1)`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub start: DVec2,
    pub start_radius: f64,
    pub end: DVec2,
    pub end_radius: f64,
    pub stops: Vec<ColorStop>,
}

impl RadialGradient {
    pub fn new(start: DVec2, start_radius: f64, end: DVec2, end_radius: f64) -> Self {
        Self {
            start,
            start_radius,
            end,
            end_radius,
            stops: Vec::with_capacity(3),
        }
    }

    pub fn with_stop(mut self, offset: f64, color: Color) -> Self {
        self.stops.push(ColorStop { offset, color });
        self
    }
}

/// What a `fill()` paints with.
#[derive(Debug, Clone, PartialEq)]
pub enum FillStyle {
    Solid(Color),
    Radial(RadialGradient),
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle::Solid(Color::BLACK)
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Solid(color)
    }
}

/// 2D drawing surface (a canvas and its context).
///
/// Coordinates are CSS pixels; implementors apply the backing-store scale
/// set by [`Surface::resize`].
pub trait Surface {
    /// Backend identifier (e.g. "canvas2d", "recording").
    fn backend(&self) -> &'static str;

    /// Current size in CSS pixels.
    fn size(&self) -> Size;

    /// Re-measure the host element and resize the backing store to
    /// `css_size * scale`, resetting the transform to `scale`.
    /// Returns the CSS size that was measured.
    fn resize(&mut self, scale: f64) -> Size;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);

    fn arc(&mut self, center: DVec2, radius: f64, start_angle: f64, end_angle: f64) -> Result<()>;

    fn set_fill_style(&mut self, style: &FillStyle) -> Result<()>;

    fn fill(&mut self);

    fn set_stroke_style(&mut self, color: &Color);

    fn set_line_width(&mut self, width: f64);

    /// Dash pattern for subsequent strokes; an empty slice means solid.
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<()>;

    fn stroke(&mut self);

    fn set_shadow_color(&mut self, color: &Color);

    fn set_shadow_blur(&mut self, blur: f64);

    fn save(&mut self);

    fn restore(&mut self);

    fn translate(&mut self, offset: DVec2);

    /// Begin a new path holding one full circle.
    fn circle_path(&mut self, center: DVec2, radius: f64) -> Result<()> {
        self.begin_path();
        self.arc(center, radius, 0.0, TAU)
    }

    /// Fill a full circle with `style`.
    fn fill_circle(&mut self, center: DVec2, radius: f64, style: &FillStyle) -> Result<()> {
        self.circle_path(center, radius)?;
        self.set_fill_style(style)?;
        self.fill();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_builder_keeps_stop_order() {
        let g = RadialGradient::new(DVec2::ZERO, 0.0, DVec2::ONE, 8.0)
            .with_stop(0.0, Color::WHITE)
            .with_stop(0.3, Color::gray(0x33))
            .with_stop(1.0, Color::gray(0x1a));
        let offsets: Vec<f64> = g.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.3, 1.0]);
    }

    #[test]
    fn color_converts_to_solid_fill() {
        assert_eq!(FillStyle::from(Color::WHITE), FillStyle::Solid(Color::WHITE));
    }
}

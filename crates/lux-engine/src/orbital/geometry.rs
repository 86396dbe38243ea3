use glam::DVec2;

use crate::api::types::Size;

/// Gap between the outer orbit and the nearest canvas edge, CSS pixels.
pub const EDGE_MARGIN: f64 = 35.0;
/// Inner orbit radius as a fraction of the outer one.
pub const INNER_RATIO: f64 = 0.5;

/// Canvas-derived constants, recomputed as a whole on every resize.
///
/// Viewports whose short side is under `2 * EDGE_MARGIN` produce a negative
/// outer radius; such canvases are not supported and are not clamped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportGeometry {
    /// Canvas size in CSS pixels.
    pub size: Size,
    pub outer_radius: f64,
    pub inner_radius: f64,
    /// Backing-store pixels per CSS pixel.
    pub pixel_scale: f64,
}

impl ViewportGeometry {
    pub fn new(size: Size, pixel_scale: f64) -> Self {
        let outer_radius = size.min_dim() / 2.0 - EDGE_MARGIN;
        Self {
            size,
            outer_radius,
            inner_radius: outer_radius * INNER_RATIO,
            pixel_scale,
        }
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Closest and farthest possible distance between the two bodies.
    pub fn distance_range(&self) -> (f64, f64) {
        (
            self.outer_radius - self.inner_radius,
            self.outer_radius + self.inner_radius,
        )
    }
}

use glam::Vec2;

use crate::api::config::LiquidConfig;
use crate::api::types::Rect;
use crate::renderer::color::Color;
use crate::theme::style::StyleSource;

/// Per-frame shader inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidUniforms {
    /// Seconds since the panel started.
    pub time: f32,
    /// Pointer in UV space, origin bottom-left.
    pub mouse: Vec2,
    pub hover: f32,
    pub color: [f32; 3],
}

/// Interaction state of the liquid grid panel.
#[derive(Debug, Clone)]
pub struct LiquidPanel {
    config: LiquidConfig,
    start_ms: Option<f64>,
    mouse: Vec2,
    hover: f32,
    hover_target: f32,
    color: [f32; 3],
}

impl LiquidPanel {
    pub fn new(config: LiquidConfig) -> Self {
        Self {
            config,
            start_ms: None,
            mouse: Vec2::splat(0.5),
            hover: 0.0,
            hover_target: 0.0,
            color: [1.0, 1.0, 1.0],
        }
    }

    pub fn config(&self) -> &LiquidConfig {
        &self.config
    }

    /// Backing-store scale for the panel canvas.
    pub fn pixel_ratio(&self, device_pixel_ratio: f64) -> f64 {
        device_pixel_ratio.min(self.config.max_pixel_ratio)
    }

    /// Map a client-space pointer to panel UV. Both axes are normalized by
    /// the configured panel size.
    pub fn pointer_uv(&self, pointer: Vec2, rect: &Rect) -> Vec2 {
        let size = self.config.size as f32;
        Vec2::new(
            (pointer.x - rect.left as f32) / size,
            1.0 - (pointer.y - rect.top as f32) / size,
        )
    }

    pub fn on_pointer_move(&mut self, pointer: Vec2, rect: &Rect) {
        self.mouse = self.pointer_uv(pointer, rect);
        self.hover_target = self.config.hover_target;
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover_target = 0.0;
    }

    /// Re-read the grid color from the primary text color. Malformed values
    /// and keywords without a fixed value keep the previous color.
    pub fn refresh_color(&mut self, style: &dyn StyleSource) {
        let raw = style.text_primary();
        match raw.parse::<Color>() {
            Ok(color) => match color.to_rgb_f32() {
                Some(rgb) => self.color = rgb,
                None => log::debug!("liquid: no rgb value for {raw:?}, keeping color"),
            },
            Err(e) => log::warn!("liquid: {e}"),
        }
    }

    /// Advance one frame at `now_ms`.
    pub fn frame(&mut self, now_ms: f64) -> LiquidUniforms {
        let start = *self.start_ms.get_or_insert(now_ms);
        self.hover += (self.hover_target - self.hover) * self.config.hover_lerp;
        LiquidUniforms {
            time: ((now_ms - start) / 1000.0) as f32,
            mouse: self.mouse,
            hover: self.hover,
            color: self.color,
        }
    }
}

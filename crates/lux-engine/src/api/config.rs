use serde::{Deserialize, Serialize};

use crate::api::error::Result;

/// Page-wide configuration. Every field has a default, so an empty JSON
/// object (or no config element at all) yields the stock page behavior.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `log` level name for the console logger ("error" .. "trace").
    pub log_level: LogLevel,
    pub orbital: OrbitalConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub navbar: NavbarConfig,
    pub liquid: LiquidConfig,
}

impl SiteConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level(self) -> log::Level {
        match self {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

/// Geometry and speeds of the orbital illustration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitalConfig {
    /// Radius of the center dot.
    pub core_radius: f64,
    /// Radius of both orbiting bodies.
    pub satellite_radius: f64,
    /// Outer body (light source) angular speed, radians per frame.
    pub speed_outer: f64,
    /// Inner body (lit body) angular speed, radians per frame.
    pub speed_inner: f64,
    /// Core phase speed, radians per frame.
    pub speed_core: f64,
    /// Backing-store scale applied to the canvas.
    pub pixel_scale: f64,
}

impl Default for OrbitalConfig {
    fn default() -> Self {
        Self {
            core_radius: 5.0,
            satellite_radius: 8.0,
            speed_outer: 0.002,
            speed_inner: -0.003,
            speed_core: 0.005,
            pixel_scale: 2.0,
        }
    }
}

/// Smooth-scroll wrapper settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothScrollConfig {
    /// Seconds a wheel-driven scroll takes to settle.
    pub duration: f64,
    /// Seconds an anchor-link scroll takes.
    pub anchor_duration: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
    /// Whether touch input is smoothed (otherwise native touch scrolling).
    pub smooth_touch: bool,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            duration: 1.2,
            anchor_duration: 2.0,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
            smooth_touch: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Scroll offset under which the navbar is always shown.
    pub top_buffer: f64,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self { top_buffer: 50.0 }
    }
}

/// Liquid grid panel settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LiquidConfig {
    /// Panel edge length in CSS pixels (the panel is square).
    pub size: f64,
    /// Plane subdivisions per side.
    pub segments: u32,
    /// Hover intensity targeted while the pointer moves over the panel.
    pub hover_target: f32,
    /// Per-frame lerp factor toward the hover target.
    pub hover_lerp: f32,
    pub max_pixel_ratio: f64,
}

impl Default for LiquidConfig {
    fn default() -> Self {
        Self {
            size: 250.0,
            segments: 48,
            hover_target: 1.2,
            hover_lerp: 0.08,
            max_pixel_ratio: 2.0,
        }
    }
}

//! CSS color values as the 2D surface consumes them.
//!
//! Colors come from two places: constants baked into the renderers and the
//! page's computed style (`--text-primary`). The latter is external input and
//! goes through `csscolorparser`, so every CSS color syntax a stylesheet can
//! produce (hex, `rgb()`/`rgba()` in comma or space form, percentages, `hsl()`,
//! `hwb()`, named colors) decodes to RGBA. Keywords the canvas resolves itself,
//! such as `currentcolor`, are kept verbatim.

use std::fmt;
use std::str::FromStr;

use crate::api::error::{LuxError, Result};

/// A color accepted by the drawing surface.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// 8-bit RGB with a float alpha in `[0, 1]`.
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// A CSS keyword with no fixed value (`currentcolor`), passed through.
    Css(String),
    /// An empty style lookup. Draws with whatever the surface already holds.
    Inherit,
}

impl Color {
    /// Opaque color from 8-bit components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    /// Neutral gray with all three channels at `level`.
    pub const fn gray(level: u8) -> Self {
        Self::rgb(level, level, level)
    }

    /// RGB floats in `[0, 1]` for shader uniforms. Pass-through keywords and
    /// `Inherit` have no known value and map to `None`.
    pub fn to_rgb_f32(&self) -> Option<[f32; 3]> {
        match *self {
            Color::Rgba { r, g, b, .. } => {
                Some([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
            }
            _ => None,
        }
    }

    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0.0);
}

impl Default for Color {
    fn default() -> Self {
        Color::Inherit
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgba { r, g, b, a } if *a >= 1.0 => write!(f, "rgb({r},{g},{b})"),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({r},{g},{b},{a})"),
            Color::Css(css) => f.write_str(css),
            Color::Inherit => Ok(()),
        }
    }
}

impl FromStr for Color {
    type Err = LuxError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Color::Inherit);
        }
        match csscolorparser::parse(s) {
            Ok(parsed) => {
                let [r, g, b, _] = parsed.to_rgba8();
                Ok(Color::rgba(r, g, b, (parsed.a as f32).clamp(0.0, 1.0)))
            }
            Err(_) if s.chars().all(|c| c.is_ascii_alphabetic()) => {
                Ok(Color::Css(s.to_ascii_lowercase()))
            }
            Err(err) => Err(LuxError::InvalidColor(format!("{s}: {err}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!("#FFFFFF".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#333333".parse::<Color>().unwrap(), Color::gray(0x33));
        assert_eq!("#1a1a1a".parse::<Color>().unwrap(), Color::gray(0x1a));
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
    }

    #[test]
    fn parses_functional_forms() {
        assert_eq!(
            "rgba(255, 255, 255, 0.08)".parse::<Color>().unwrap(),
            Color::rgba(255, 255, 255, 0.08)
        );
        assert_eq!("rgb(26,26,26)".parse::<Color>().unwrap(), Color::gray(26));
    }

    #[test]
    fn parses_modern_css_syntax() {
        assert_eq!("rgb(26 26 26)".parse::<Color>().unwrap(), Color::gray(26));
        assert_eq!(
            "rgb(26, 26, 26, 0.5)".parse::<Color>().unwrap(),
            Color::rgba(26, 26, 26, 0.5)
        );
        assert_eq!("hsl(0, 0%, 100%)".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("hsla(0, 0%, 0%, 1)".parse::<Color>().unwrap(), Color::BLACK);
        assert!(matches!("rgb(10%, 10%, 10%)".parse::<Color>(), Ok(Color::Rgba { .. })));
    }

    #[test]
    fn empty_lookup_is_inherit_not_error() {
        assert_eq!("".parse::<Color>().unwrap(), Color::Inherit);
        assert_eq!("   ".parse::<Color>().unwrap(), Color::Inherit);
    }

    #[test]
    fn named_colors_decode() {
        assert_eq!("White".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("transparent".parse::<Color>().unwrap().to_rgb_f32(), Some([0.0; 3]));
    }

    #[test]
    fn unresolved_keywords_pass_through() {
        let color = "currentColor".parse::<Color>().unwrap();
        assert_eq!(color, Color::Css("currentcolor".into()));
        assert_eq!(color.to_string(), "currentcolor");
        assert_eq!(color.to_rgb_f32(), None);
    }

    #[test]
    fn malformed_strings_are_rejected() {
        for bad in ["#12", "#zzzzzz", "rgb(1,2)", "12px", "hsl(", "red blue"] {
            assert!(
                matches!(bad.parse::<Color>(), Err(LuxError::InvalidColor(_))),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn displays_as_css() {
        assert_eq!(Color::gray(200).to_string(), "rgb(200,200,200)");
        assert_eq!(Color::rgba(255, 255, 255, 0.8).to_string(), "rgba(255,255,255,0.8)");
        assert_eq!(Color::Inherit.to_string(), "");
    }
}

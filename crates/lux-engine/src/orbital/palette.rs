use crate::api::error::Result;
use crate::renderer::color::Color;
use crate::theme::kind::Theme;
use crate::theme::style::StyleSource;

/// Orbit guide color on the dark theme.
pub const ORBIT_ON_DARK: Color = Color::rgba(255, 255, 255, 0.08);
/// Orbit guide color on every other theme.
pub const ORBIT_ON_LIGHT: Color = Color::rgba(26, 26, 26, 0.08);

/// Colors the orbital renderer draws with, sampled for one theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Theme the palette was sampled for; selects flat vs. lit rendering.
    pub theme: Theme,
    /// Center dot.
    pub core: Color,
    /// Dashed orbit guides.
    pub orbit: Color,
    /// Body fill outside the dark theme.
    pub flat: Color,
}

impl Palette {
    /// Derive the palette for `theme` from the page's computed style.
    ///
    /// An empty lookup yields [`Color::Inherit`]; only a malformed value is
    /// an error.
    pub fn sample(theme: Theme, style: &dyn StyleSource) -> Result<Self> {
        let text: Color = style.text_primary().parse()?;
        Ok(Self {
            theme,
            core: text.clone(),
            orbit: if theme.is_dark() { ORBIT_ON_DARK } else { ORBIT_ON_LIGHT },
            flat: text,
        })
    }

    /// Like [`Palette::sample`], but a malformed style value is logged and
    /// replaced by `Inherit` so rendering continues.
    pub fn sample_or_inherit(theme: Theme, style: &dyn StyleSource) -> Self {
        Self::sample(theme, style).unwrap_or_else(|err| {
            log::error!("orbital palette: {err}");
            Self {
                theme,
                core: Color::Inherit,
                orbit: if theme.is_dark() { ORBIT_ON_DARK } else { ORBIT_ON_LIGHT },
                flat: Color::Inherit,
            }
        })
    }

    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::LuxError;
    use crate::theme::style::{StaticStyle, TEXT_PRIMARY};

    #[test]
    fn dark_palette() {
        let style = StaticStyle::new().with(TEXT_PRIMARY, " #f5f5f5");
        let p = Palette::sample(Theme::Dark, &style).unwrap();
        assert_eq!(p.core, Color::gray(0xf5));
        assert_eq!(p.flat, Color::gray(0xf5));
        assert_eq!(p.orbit, ORBIT_ON_DARK);
        assert!(p.is_dark());
    }

    #[test]
    fn light_and_blue_share_the_light_guides() {
        let style = StaticStyle::new().with(TEXT_PRIMARY, "#1a1a1a");
        for theme in [Theme::Light, Theme::Blue] {
            let p = Palette::sample(theme, &style).unwrap();
            assert_eq!(p.orbit, ORBIT_ON_LIGHT);
            assert!(!p.is_dark());
        }
    }

    #[test]
    fn empty_style_degrades_to_inherit() {
        let p = Palette::sample(Theme::Light, &StaticStyle::new()).unwrap();
        assert_eq!(p.core, Color::Inherit);
        assert_eq!(p.flat, Color::Inherit);
    }

    #[test]
    fn malformed_style_is_reported() {
        let style = StaticStyle::new().with(TEXT_PRIMARY, "#12");
        assert!(matches!(
            Palette::sample(Theme::Dark, &style),
            Err(LuxError::InvalidColor(_))
        ));
        let p = Palette::sample_or_inherit(Theme::Dark, &style);
        assert_eq!(p.core, Color::Inherit);
        assert_eq!(p.orbit, ORBIT_ON_DARK);
    }

    #[test]
    fn any_css_color_syntax_is_sampled() {
        let cases = [
            ("hsl(0, 0%, 100%)", Color::WHITE),
            ("rgb(26 26 26)", Color::gray(26)),
            ("rgb(26, 26, 26, 0.5)", Color::rgba(26, 26, 26, 0.5)),
            ("hsla(0, 0%, 0%, 1)", Color::BLACK),
        ];
        for (css, expected) in cases {
            let style = StaticStyle::new().with(TEXT_PRIMARY, css);
            let p = Palette::sample_or_inherit(Theme::Light, &style);
            assert_eq!(p.flat, expected, "{css}");
            assert_eq!(p.core, expected, "{css}");
            assert!(!p.flat.to_string().is_empty(), "{css}");
        }
    }

    #[test]
    fn percentage_channels_are_not_dropped() {
        let style = StaticStyle::new().with(TEXT_PRIMARY, "rgb(10%, 10%, 10%)");
        let p = Palette::sample(Theme::Dark, &style).unwrap();
        assert!(matches!(p.core, Color::Rgba { .. }));
    }

    #[test]
    fn keyword_colors_reach_the_canvas_verbatim() {
        let style = StaticStyle::new().with(TEXT_PRIMARY, "currentcolor");
        let p = Palette::sample(Theme::Light, &style).unwrap();
        assert_eq!(p.flat.to_string(), "currentcolor");
    }

    #[test]
    fn sampling_is_idempotent() {
        let style = StaticStyle::new().with(TEXT_PRIMARY, "rgb(10, 20, 30)");
        let a = Palette::sample(Theme::Dark, &style).unwrap();
        let b = Palette::sample(Theme::Dark, &style).unwrap();
        assert_eq!(a, b);
    }
}

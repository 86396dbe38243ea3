use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::api::error::{LuxError, Result};

/// Visual theme, stored as the root element's `data-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    /// The stock theme for first-time visitors.
    #[default]
    Blue,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Blue];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Blue => "blue",
        }
    }

    /// Only the dark theme enables the glow and phase-lighting effects.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Main toggle: light goes dark; dark and blue go back to light.
    pub fn after_main_toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark | Theme::Blue => Theme::Light,
        }
    }

    /// Blue toggle: leaves blue for light, enters blue from anything else.
    pub fn after_blue_toggle(self) -> Theme {
        match self {
            Theme::Blue => Theme::Light,
            Theme::Light | Theme::Dark => Theme::Blue,
        }
    }

    /// Icon shown on the main toggle while this theme is active.
    pub fn toggle_icon(self) -> ToggleIcon {
        match self {
            Theme::Light => ToggleIcon::Moon,
            Theme::Dark | Theme::Blue => ToggleIcon::Sun,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = LuxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "blue" => Ok(Theme::Blue),
            other => Err(LuxError::UnknownTheme(other.to_string())),
        }
    }
}

/// The main toggle advertises where a click will take you.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Next click goes dark.
    Moon,
    /// Next click goes light.
    Sun,
}

impl ToggleIcon {
    /// Inner SVG markup for the icon.
    pub fn svg(self) -> &'static str {
        match self {
            ToggleIcon::Moon => MOON_SVG,
            ToggleIcon::Sun => SUN_SVG,
        }
    }
}

const MOON_SVG: &str = r#"<path d="M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z"></path>"#;

const SUN_SVG: &str = concat!(
    r#"<circle cx="12" cy="12" r="5"></circle>"#,
    r#"<line x1="12" y1="1" x2="12" y2="3"></line>"#,
    r#"<line x1="12" y1="21" x2="12" y2="23"></line>"#,
    r#"<line x1="4.22" y1="4.22" x2="5.64" y2="5.64"></line>"#,
    r#"<line x1="18.36" y1="18.36" x2="19.78" y2="19.78"></line>"#,
    r#"<line x1="1" y1="12" x2="3" y2="12"></line>"#,
    r#"<line x1="21" y1="12" x2="23" y2="12"></line>"#,
    r#"<line x1="4.22" y1="19.78" x2="5.64" y2="18.36"></line>"#,
    r#"<line x1="18.36" y1="5.64" x2="19.78" y2="4.22"></line>"#,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_names() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
        assert!(matches!("sepia".parse::<Theme>(), Err(LuxError::UnknownTheme(_))));
    }

    #[test]
    fn main_toggle_cycle() {
        assert_eq!(Theme::Light.after_main_toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.after_main_toggle(), Theme::Light);
        assert_eq!(Theme::Blue.after_main_toggle(), Theme::Light);
    }

    #[test]
    fn blue_toggle_cycle() {
        assert_eq!(Theme::Blue.after_blue_toggle(), Theme::Light);
        assert_eq!(Theme::Light.after_blue_toggle(), Theme::Blue);
        assert_eq!(Theme::Dark.after_blue_toggle(), Theme::Blue);
    }

    #[test]
    fn icon_points_at_next_action() {
        assert_eq!(Theme::Light.toggle_icon(), ToggleIcon::Moon);
        assert_eq!(Theme::Dark.toggle_icon(), ToggleIcon::Sun);
        assert_eq!(Theme::Blue.toggle_icon(), ToggleIcon::Sun);
        assert!(ToggleIcon::Sun.svg().starts_with("<circle"));
    }

    #[test]
    fn serde_uses_attribute_names() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(serde_json::from_str::<Theme>("\"blue\"").unwrap(), Theme::Blue);
    }
}

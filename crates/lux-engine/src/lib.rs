pub mod api;
pub mod core;
pub mod extensions;
#[cfg(feature = "liquid")]
pub mod liquid;
pub mod orbital;
pub mod renderer;
pub mod scroll;
pub mod theme;
pub mod ui;

// Re-export key types at crate root for convenience
pub use api::config::{
    LiquidConfig, LogLevel, NavbarConfig, OrbitalConfig, SiteConfig, SmoothScrollConfig,
};
pub use api::context::PageContext;
pub use api::error::{LuxError, Result};
pub use api::types::{ElementId, ElementIds, Rect, Size};
pub use core::lifecycle::Lifecycle;
pub use core::time::{FrameClock, FrameTime};
pub use orbital::{OrbitalState, OrbitalSystem, Palette, ViewportGeometry};
pub use renderer::{Color, FillStyle, RadialGradient, RecordingSurface, Surface};
pub use scroll::{
    Marquee, NavVisibility, RevealGroup, RevealPreset, RevealSet, ScrollToOptions, ScrollTrigger,
    Scrub, SharedScroll, SmartNavbar, SmoothScroll,
};
pub use theme::{
    MemoryStore, PreferenceStore, StaticStyle, StyleSource, Theme, ThemeBus, ThemeChanged,
    ThemeController, ToggleIcon,
};
pub use ui::{
    CursorFollower, IntroEvent, IntroSequence, IntroTargets, MagneticButton, ProjectData,
    ProjectSheet, SheetView,
};

#[cfg(feature = "liquid")]
pub use liquid::{LiquidPanel, LiquidUniforms, PlaneMesh, PlaneVertex};

// Extensions: decoupled animation building blocks
pub use extensions::{
    ease, lerp, Easing, ElementStyle, StyleProp, StyleSheet, Tween, TweenId, TweenState,
};

// scroll/trigger.rs
//
// Scroll-position triggers: one-shot reveals and scrubbed progress.
// Positions are written as "<element edge> <viewport position>", e.g.
// "top 85%" fires when the element's top reaches 85% of the viewport height.

use std::str::FromStr;

use crate::api::error::{LuxError, Result};
use crate::api::types::{ElementId, Rect};
use crate::extensions::easing::Easing;
use crate::extensions::style::{StyleProp, StyleSheet};
use crate::extensions::tween::{Tween, TweenId, TweenState};

/// A point along an element or the viewport, measured from its top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Offset {
    /// Fraction of the height (`top` = 0, `center` = 0.5, `bottom` = 1).
    Fraction(f64),
    Pixels(f64),
}

impl Offset {
    pub fn resolve(self, height: f64) -> f64 {
        match self {
            Offset::Fraction(f) => f * height,
            Offset::Pixels(px) => px,
        }
    }
}

impl FromStr for Offset {
    type Err = LuxError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || LuxError::InvalidTrigger(s.to_string());
        match s {
            "top" => Ok(Offset::Fraction(0.0)),
            "center" => Ok(Offset::Fraction(0.5)),
            "bottom" => Ok(Offset::Fraction(1.0)),
            _ => {
                if let Some(pct) = s.strip_suffix('%') {
                    pct.parse::<f64>()
                        .map(|p| Offset::Fraction(p / 100.0))
                        .map_err(|_| invalid())
                } else {
                    let px = s.strip_suffix("px").unwrap_or(s);
                    px.parse::<f64>().map(Offset::Pixels).map_err(|_| invalid())
                }
            }
        }
    }
}

/// Where an element edge meets a viewport line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriggerPosition {
    pub element: Offset,
    pub viewport: Offset,
}

impl TriggerPosition {
    /// Pixels the page still has to scroll before this position is reached.
    /// Zero or negative once reached.
    pub fn distance(&self, rect: &Rect, viewport_height: f64) -> f64 {
        rect.top + self.element.resolve(rect.height) - self.viewport.resolve(viewport_height)
    }
}

impl FromStr for TriggerPosition {
    type Err = LuxError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some(element), Some(viewport), None) => Ok(Self {
                element: element.parse()?,
                viewport: viewport.parse()?,
            }),
            _ => Err(LuxError::InvalidTrigger(s.to_string())),
        }
    }
}

/// Fires once when the trigger position is first reached.
#[derive(Debug, Clone)]
pub struct ScrollTrigger {
    start: TriggerPosition,
    fired: bool,
}

impl ScrollTrigger {
    pub fn new(start: &str) -> Result<Self> {
        Ok(Self {
            start: start.parse()?,
            fired: false,
        })
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Check the trigger element's current viewport rect. Returns `true` on
    /// the single update where the start position is crossed.
    pub fn update(&mut self, rect: &Rect, viewport_height: f64) -> bool {
        if self.fired || self.start.distance(rect, viewport_height) > 0.0 {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Maps the scroll between two trigger positions to progress in [0, 1].
#[derive(Debug, Clone)]
pub struct Scrub {
    start: TriggerPosition,
    end: TriggerPosition,
}

impl Scrub {
    pub fn new(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
        })
    }

    pub fn progress(&self, rect: &Rect, viewport_height: f64) -> f64 {
        let a = self.start.distance(rect, viewport_height);
        let b = self.end.distance(rect, viewport_height);
        let span = b - a;
        if span.abs() < f64::EPSILON {
            return if a <= 0.0 { 1.0 } else { 0.0 };
        }
        (-a / span).clamp(0.0, 1.0)
    }
}

/// Extra horizontal drift of the marquee track across its scrub range,
/// in percent of the track width.
pub const MARQUEE_SHIFT_PERCENT: f32 = -5.0;

/// The marquee track: scrubbed from when it enters at the bottom of the
/// viewport until it leaves at the top.
#[derive(Debug, Clone)]
pub struct Marquee {
    track: ElementId,
    scrub: Scrub,
}

impl Marquee {
    pub fn new(track: ElementId) -> Result<Self> {
        Ok(Self {
            track,
            scrub: Scrub::new("top bottom", "bottom top")?,
        })
    }

    pub fn update(&self, rect: &Rect, viewport_height: f64, sheet: &mut StyleSheet) {
        let progress = self.scrub.progress(rect, viewport_height) as f32;
        sheet.set(self.track, StyleProp::XPercent, MARQUEE_SHIFT_PERCENT * progress);
    }
}

/// Parameters of a rise-and-fade reveal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealPreset {
    pub start: &'static str,
    /// Initial downward offset in pixels.
    pub from_y: f32,
    pub duration: f32,
    pub stagger: f32,
    pub easing: Easing,
}

impl RevealPreset {
    /// Generic `.reveal` blocks.
    pub const BLOCK: Self = Self {
        start: "top 85%",
        from_y: 50.0,
        duration: 1.0,
        stagger: 0.0,
        easing: Easing::QuartOut,
    };
    /// Project list rows.
    pub const PROJECTS: Self = Self {
        start: "top 75%",
        from_y: 50.0,
        duration: 1.2,
        stagger: 0.15,
        easing: Easing::QuartOut,
    };
    /// Contact grid items.
    pub const CONTACT: Self = Self {
        start: "top 85%",
        from_y: 30.0,
        duration: 1.0,
        stagger: 0.1,
        easing: Easing::CubicOut,
    };
    /// Split title characters.
    pub const TITLE_CHARS: Self = Self {
        start: "top 85%",
        from_y: 50.0,
        duration: 1.0,
        stagger: 0.03,
        easing: Easing::QuartOut,
    };

    pub fn tween(&self) -> Tween {
        Tween::new(self.duration, self.easing)
            .from_to(StyleProp::Y, self.from_y, 0.0)
            .from_to(StyleProp::Opacity, 0.0, 1.0)
    }
}

/// A set of elements revealed together when their trigger element scrolls in.
///
/// Arming renders the hidden start state immediately and parks paused tweens
/// that resume when the trigger fires.
#[derive(Debug, Clone)]
pub struct RevealGroup {
    trigger_element: ElementId,
    trigger: ScrollTrigger,
    tweens: Vec<TweenId>,
}

impl RevealGroup {
    pub fn arm(
        preset: &RevealPreset,
        trigger_element: ElementId,
        targets: &[ElementId],
        tweens: &mut TweenState,
        sheet: &mut StyleSheet,
    ) -> Result<Self> {
        let trigger = ScrollTrigger::new(preset.start)?;
        let ids = tweens.add_staggered(targets, preset.tween().paused(), preset.stagger, sheet);
        Ok(Self {
            trigger_element,
            trigger,
            tweens: ids,
        })
    }

    pub fn trigger_element(&self) -> ElementId {
        self.trigger_element
    }

    pub fn is_revealed(&self) -> bool {
        self.trigger.has_fired()
    }

    /// Returns `true` when this update started the reveal.
    pub fn update(&mut self, rect: &Rect, viewport_height: f64, tweens: &mut TweenState) -> bool {
        if !self.trigger.update(rect, viewport_height) {
            return false;
        }
        for &id in &self.tweens {
            tweens.resume(id);
        }
        true
    }
}

/// All armed reveals on the page.
#[derive(Debug, Default)]
pub struct RevealSet {
    groups: Vec<RevealGroup>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: RevealGroup) {
        self.groups.push(group);
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Check every pending group; `rect_of` looks up a trigger element's
    /// current viewport rect. Returns how many groups fired.
    pub fn update<F>(&mut self, mut rect_of: F, viewport_height: f64, tweens: &mut TweenState) -> usize
    where
        F: FnMut(ElementId) -> Option<Rect>,
    {
        let mut fired = 0;
        for group in self.groups.iter_mut().filter(|g| !g.is_revealed()) {
            if let Some(rect) = rect_of(group.trigger_element) {
                if group.update(&rect, viewport_height, tweens) {
                    fired += 1;
                }
            }
        }
        self.groups.retain(|g| !g.is_revealed());
        fired
    }
}

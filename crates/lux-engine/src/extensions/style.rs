// extensions/style.rs
//
// Animated style state per element. Tweens write here; the host drains the
// dirty entries once per frame and copies them onto the real elements.

use std::collections::{BTreeSet, HashMap};

use crate::api::types::ElementId;

/// An animatable style property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProp {
    /// Horizontal translation, px.
    X,
    /// Vertical translation, px.
    Y,
    /// Horizontal translation as a percentage of the element's width.
    XPercent,
    /// Vertical translation as a percentage of the element's height.
    YPercent,
    Opacity,
    /// Uniform scale.
    Scale,
}

/// Transform and opacity of one element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    pub x: f32,
    pub y: f32,
    pub x_percent: f32,
    pub y_percent: f32,
    pub opacity: f32,
    pub scale: f32,
}

impl Default for ElementStyle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            x_percent: 0.0,
            y_percent: 0.0,
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

impl ElementStyle {
    pub fn get(&self, prop: StyleProp) -> f32 {
        match prop {
            StyleProp::X => self.x,
            StyleProp::Y => self.y,
            StyleProp::XPercent => self.x_percent,
            StyleProp::YPercent => self.y_percent,
            StyleProp::Opacity => self.opacity,
            StyleProp::Scale => self.scale,
        }
    }

    pub fn set(&mut self, prop: StyleProp, value: f32) {
        match prop {
            StyleProp::X => self.x = value,
            StyleProp::Y => self.y = value,
            StyleProp::XPercent => self.x_percent = value,
            StyleProp::YPercent => self.y_percent = value,
            StyleProp::Opacity => self.opacity = value,
            StyleProp::Scale => self.scale = value,
        }
    }

    /// CSS `transform` value: percentage translation, then pixel
    /// translation, then scale.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}%, {}%) translate3d({}px, {}px, 0px) scale({})",
            self.x_percent, self.y_percent, self.x, self.y, self.scale
        )
    }
}

/// Style state of every animated element.
#[derive(Debug, Default)]
pub struct StyleSheet {
    styles: HashMap<ElementId, ElementStyle>,
    dirty: BTreeSet<ElementId>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current style (defaults for elements never touched).
    pub fn style(&self, id: ElementId) -> ElementStyle {
        self.styles.get(&id).copied().unwrap_or_default()
    }

    pub fn get(&self, id: ElementId, prop: StyleProp) -> f32 {
        self.style(id).get(prop)
    }

    pub fn set(&mut self, id: ElementId, prop: StyleProp, value: f32) {
        let style = self.styles.entry(id).or_default();
        if style.get(prop) != value {
            style.set(prop, value);
            self.dirty.insert(id);
        }
    }

    /// Elements changed since the last drain, in id order.
    pub fn drain_dirty(&mut self) -> Vec<(ElementId, ElementStyle)> {
        let dirty = std::mem::take(&mut self.dirty);
        dirty.into_iter().map(|id| (id, self.style(id))).collect()
    }

    pub fn remove(&mut self, id: ElementId) {
        self.styles.remove(&id);
        self.dirty.remove(&id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_elements_use_defaults() {
        let sheet = StyleSheet::new();
        assert_eq!(sheet.get(ElementId(7), StyleProp::Opacity), 1.0);
        assert_eq!(sheet.get(ElementId(7), StyleProp::Y), 0.0);
    }

    #[test]
    fn only_real_changes_are_dirty() {
        let mut sheet = StyleSheet::new();
        sheet.set(ElementId(1), StyleProp::Y, 50.0);
        sheet.set(ElementId(2), StyleProp::Opacity, 1.0);
        let dirty = sheet.drain_dirty();
        assert_eq!(dirty.len(), 1);
        assert_eq!(dirty[0].0, ElementId(1));
        assert!(sheet.drain_dirty().is_empty());
    }

    #[test]
    fn transform_css_order() {
        let style = ElementStyle {
            x: 10.0,
            y: -4.5,
            x_percent: -50.0,
            y_percent: -50.0,
            opacity: 1.0,
            scale: 1.5,
        };
        assert_eq!(
            style.transform_css(),
            "translate(-50%, -50%) translate3d(10px, -4.5px, 0px) scale(1.5)"
        );
    }
}

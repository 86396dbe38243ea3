use glam::Vec2;

use crate::api::types::{ElementId, Rect};
use crate::extensions::easing::Easing;
use crate::extensions::style::{StyleProp, StyleSheet};
use crate::extensions::tween::{Tween, TweenId, TweenState};

/// Fraction of the pointer's offset from the button center the button follows.
pub const MAGNETIC_PULL: f32 = 0.3;
pub const FOLLOW_DURATION: f32 = 0.3;
pub const RELEASE_DURATION: f32 = 0.5;

/// Offset a button is pulled toward for a pointer position.
pub fn magnetic_offset(pointer: Vec2, rect: &Rect) -> Vec2 {
    let center = rect.center().as_vec2();
    (pointer - center) * MAGNETIC_PULL
}

/// A button that leans toward the pointer and springs back on leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MagneticButton {
    element: ElementId,
}

impl MagneticButton {
    pub fn new(element: ElementId) -> Self {
        Self { element }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn on_move(&self, pointer: Vec2, rect: &Rect, tweens: &mut TweenState, sheet: &mut StyleSheet) -> TweenId {
        let offset = magnetic_offset(pointer, rect);
        let tween = Tween::new(FOLLOW_DURATION, Easing::CubicOut)
            .to(StyleProp::X, offset.x)
            .to(StyleProp::Y, offset.y);
        tweens.add(self.element, tween, sheet)
    }

    pub fn on_leave(&self, tweens: &mut TweenState, sheet: &mut StyleSheet) -> TweenId {
        let tween = Tween::new(RELEASE_DURATION, Easing::ElasticOut)
            .to(StyleProp::X, 0.0)
            .to(StyleProp::Y, 0.0);
        tweens.add(self.element, tween, sheet)
    }
}

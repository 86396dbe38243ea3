use glam::Vec2;

use crate::api::types::ElementId;
use crate::extensions::easing::Easing;
use crate::extensions::style::{StyleProp, StyleSheet};
use crate::extensions::tween::{Tween, TweenState};

pub const DOT_DURATION: f32 = 0.1;
pub const CIRCLE_DURATION: f32 = 0.5;
pub const HOVER_SCALE: f32 = 1.5;
pub const HOVER_DURATION: f32 = 0.3;

/// Custom cursor: a dot that tracks the pointer tightly and a circle that trails it.
#[derive(Debug, Clone)]
pub struct CursorFollower {
    dot: ElementId,
    circle: ElementId,
    hovering: bool,
}

impl CursorFollower {
    pub fn new(dot: ElementId, circle: ElementId) -> Self {
        Self {
            dot,
            circle,
            hovering: false,
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    fn follow(duration: f32, easing: Easing, pointer: Vec2) -> Tween {
        Tween::new(duration, easing)
            .to(StyleProp::X, pointer.x)
            .to(StyleProp::Y, pointer.y)
            .to(StyleProp::XPercent, -50.0)
            .to(StyleProp::YPercent, -50.0)
    }

    pub fn on_move(&self, pointer: Vec2, tweens: &mut TweenState, sheet: &mut StyleSheet) {
        tweens.add(self.dot, Self::follow(DOT_DURATION, Easing::QuadOut, pointer), sheet);
        tweens.add(self.circle, Self::follow(CIRCLE_DURATION, Easing::CubicOut, pointer), sheet);
    }

    /// Pointer entered an interactive element. Returns `true` when the hover
    /// state changed and the host should toggle the cursor's hover class.
    pub fn on_hover_enter(&mut self, tweens: &mut TweenState, sheet: &mut StyleSheet) -> bool {
        self.set_hover(true, HOVER_SCALE, tweens, sheet)
    }

    pub fn on_hover_leave(&mut self, tweens: &mut TweenState, sheet: &mut StyleSheet) -> bool {
        self.set_hover(false, 1.0, tweens, sheet)
    }

    fn set_hover(&mut self, hovering: bool, scale: f32, tweens: &mut TweenState, sheet: &mut StyleSheet) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        tweens.add(
            self.circle,
            Tween::new(HOVER_DURATION, Easing::QuadOut).to(StyleProp::Scale, scale),
            sheet,
        );
        changed
    }
}

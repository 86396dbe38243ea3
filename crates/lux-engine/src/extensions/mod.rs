// extensions/mod.rs
//
// Animation building blocks shared by the page components.
// Decoupled from the DOM: tweens write into a StyleSheet the host flushes.

pub mod easing;
pub mod style;
pub mod tween;

pub use easing::{ease, lerp, Easing};
pub use style::{ElementStyle, StyleProp, StyleSheet};
pub use tween::{Track, Tween, TweenId, TweenState};

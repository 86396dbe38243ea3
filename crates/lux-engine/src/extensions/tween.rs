// extensions/tween.rs
//
// Tween system: animated style transitions by ElementId.
// Decoupled from the DOM; writes into a StyleSheet the host flushes.
//
// Usage:
//   let mut tweens = TweenState::new();
//   tweens.add(id, Tween::new(1.0, Easing::QuartOut).from_to(StyleProp::Y, 50.0, 0.0), &mut sheet);
//   tweens.tick(dt, &mut sheet);  // Advances all tweens, updates styles

use std::collections::HashMap;

use super::easing::{ease, Easing};
use super::style::{StyleProp, StyleSheet};
use crate::api::types::ElementId;

/// One animated property of a tween.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub prop: StyleProp,
    /// Start value; `None` means "whatever the element has when the tween starts".
    pub from: Option<f32>,
    pub to: f32,
}

/// A single tween animation over one or more properties.
#[derive(Debug, Clone)]
pub struct Tween {
    pub tracks: Vec<Track>,
    /// Duration in seconds.
    pub duration: f32,
    /// Seconds to wait before the first frame.
    pub delay: f32,
    /// Elapsed time, including the delay.
    pub elapsed: f32,
    pub easing: Easing,
    /// Paused tweens hold their elapsed time.
    pub playing: bool,
    /// Resolved start values, filled on the first active frame.
    started: bool,
}

impl Tween {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            tracks: Vec::with_capacity(2),
            duration,
            delay: 0.0,
            elapsed: 0.0,
            easing,
            playing: true,
            started: false,
        }
    }

    /// Animate `prop` from its current value to `to`.
    pub fn to(mut self, prop: StyleProp, to: f32) -> Self {
        self.tracks.push(Track { prop, from: None, to });
        self
    }

    /// Animate `prop` from `from` to `to`. The start value is applied as
    /// soon as the tween is added, even if it is delayed or paused.
    pub fn from_to(mut self, prop: StyleProp, from: f32, to: f32) -> Self {
        self.tracks.push(Track { prop, from: Some(from), to });
        self
    }

    // -- Builder methods --

    pub fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn paused(mut self) -> Self {
        self.playing = false;
        self
    }

    fn animates(&self, prop: StyleProp) -> bool {
        self.tracks.iter().any(|t| t.prop == prop)
    }
}

/// Handle to a tween for later reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TweenId(pub u32);

/// Manages all active tweens.
#[derive(Debug, Default)]
pub struct TweenState {
    tweens: HashMap<TweenId, (ElementId, Tween)>,
    next_id: u32,
}

impl TweenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tween for an element. Returns a handle for later control.
    ///
    /// Properties this tween animates are taken away from any older tween
    /// on the same element, so the newest tween always wins. Explicit
    /// start values are rendered immediately.
    pub fn add(&mut self, element: ElementId, tween: Tween, sheet: &mut StyleSheet) -> TweenId {
        self.tweens.retain(|_, (e, old)| {
            if *e != element {
                return true;
            }
            old.tracks.retain(|t| !tween.animates(t.prop));
            !old.tracks.is_empty()
        });

        for track in &tween.tracks {
            if let Some(from) = track.from {
                sheet.set(element, track.prop, from);
            }
        }

        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(id, (element, tween));
        id
    }

    /// Add the same tween to several elements, each starting `stagger`
    /// seconds after the previous one.
    pub fn add_staggered(
        &mut self,
        elements: &[ElementId],
        tween: Tween,
        stagger: f32,
        sheet: &mut StyleSheet,
    ) -> Vec<TweenId> {
        elements
            .iter()
            .enumerate()
            .map(|(i, &element)| {
                let t = tween.clone().with_delay(tween.delay + stagger * i as f32);
                self.add(element, t, sheet)
            })
            .collect()
    }

    /// Resume a paused tween.
    pub fn resume(&mut self, id: TweenId) {
        if let Some((_, tween)) = self.tweens.get_mut(&id) {
            tween.playing = true;
        }
    }

    /// Advance all tweens and apply them to the style sheet.
    /// Returns the number of tweens that completed this tick.
    pub fn tick(&mut self, dt: f32, sheet: &mut StyleSheet) -> usize {
        let mut completed = Vec::new();

        // Stable order so overlapping writes resolve the same way every frame.
        let mut ids: Vec<TweenId> = self.tweens.keys().copied().collect();
        ids.sort_unstable();

        for id in ids {
            let Some((element, tween)) = self.tweens.get_mut(&id) else {
                continue;
            };
            if !tween.playing {
                continue;
            }

            tween.elapsed += dt;
            if tween.elapsed < tween.delay {
                continue;
            }

            if !tween.started {
                for track in tween.tracks.iter_mut() {
                    if track.from.is_none() {
                        track.from = Some(sheet.get(*element, track.prop));
                    }
                }
                tween.started = true;
            }

            let active = tween.elapsed - tween.delay;
            let raw_t = if tween.duration > 0.0 {
                active / tween.duration
            } else {
                1.0
            };
            let t = raw_t.clamp(0.0, 1.0);

            for track in &tween.tracks {
                let from = track.from.unwrap_or(track.to);
                sheet.set(*element, track.prop, ease(from, track.to, t, tween.easing));
            }

            if active >= tween.duration {
                completed.push(id);
            }
        }

        let count = completed.len();
        for id in completed {
            self.tweens.remove(&id);
        }

        count
    }

    /// Number of active tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether there are no active tweens.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Clear all tweens.
    pub fn clear(&mut self) {
        self.tweens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_to_renders_start_immediately() {
        let mut tweens = TweenState::new();
        let mut sheet = StyleSheet::new();
        let id = ElementId(1);

        tweens.add(
            id,
            Tween::new(1.0, Easing::Linear)
                .from_to(StyleProp::Y, 50.0, 0.0)
                .from_to(StyleProp::Opacity, 0.0, 1.0)
                .paused(),
            &mut sheet,
        );
        assert_eq!(sheet.get(id, StyleProp::Y), 50.0);
        assert_eq!(sheet.get(id, StyleProp::Opacity), 0.0);
    }

    #[test]
    fn to_starts_from_current_value() {
        let mut tweens = TweenState::new();
        let mut sheet = StyleSheet::new();
        let id = ElementId(1);
        sheet.set(id, StyleProp::X, 40.0);

        tweens.add(id, Tween::new(1.0, Easing::Linear).to(StyleProp::X, 0.0), &mut sheet);
        tweens.tick(0.5, &mut sheet);
        assert!((sheet.get(id, StyleProp::X) - 20.0).abs() < 0.01);

        tweens.tick(0.5, &mut sheet);
        assert_eq!(sheet.get(id, StyleProp::X), 0.0);
        assert!(tweens.is_empty());
    }

    #[test]
    fn delay_holds_the_tween() {
        let mut tweens = TweenState::new();
        let mut sheet = StyleSheet::new();
        let id = ElementId(1);

        tweens.add(
            id,
            Tween::new(1.0, Easing::Linear).to(StyleProp::Y, 100.0).with_delay(0.5),
            &mut sheet,
        );
        tweens.tick(0.4, &mut sheet);
        assert_eq!(sheet.get(id, StyleProp::Y), 0.0);
        tweens.tick(0.6, &mut sheet);
        assert!((sheet.get(id, StyleProp::Y) - 50.0).abs() < 0.01);
    }

    #[test]
    fn stagger_offsets_each_element() {
        let mut tweens = TweenState::new();
        let mut sheet = StyleSheet::new();
        let ids = [ElementId(1), ElementId(2), ElementId(3)];

        tweens.add_staggered(
            &ids,
            Tween::new(1.0, Easing::Linear).from_to(StyleProp::Opacity, 0.0, 1.0),
            0.15,
            &mut sheet,
        );
        tweens.tick(0.15, &mut sheet);
        assert!(sheet.get(ids[0], StyleProp::Opacity) > 0.0);
        assert_eq!(sheet.get(ids[1], StyleProp::Opacity), 0.0);

        assert_eq!(tweens.tick(0.9, &mut sheet), 1);
        assert_eq!(tweens.tick(1.0, &mut sheet), 2);
        assert!(tweens.is_empty());
        assert_eq!(sheet.get(ids[2], StyleProp::Opacity), 1.0);
    }

    #[test]
    fn newer_tween_takes_over_shared_props() {
        let mut tweens = TweenState::new();
        let mut sheet = StyleSheet::new();
        let id = ElementId(1);

        tweens.add(
            id,
            Tween::new(1.0, Easing::Linear).to(StyleProp::X, 100.0).to(StyleProp::Scale, 2.0),
            &mut sheet,
        );
        tweens.add(id, Tween::new(1.0, Easing::Linear).to(StyleProp::X, -100.0), &mut sheet);
        assert_eq!(tweens.len(), 2);

        tweens.tick(1.0, &mut sheet);
        assert_eq!(sheet.get(id, StyleProp::X), -100.0);
        // The older tween keeps animating what was not taken over.
        assert_eq!(sheet.get(id, StyleProp::Scale), 2.0);
    }

    #[test]
    fn paused_until_resumed() {
        let mut tweens = TweenState::new();
        let mut sheet = StyleSheet::new();
        let id = ElementId(1);
        let t = tweens.add(
            id,
            Tween::new(1.0, Easing::Linear).from_to(StyleProp::Opacity, 0.0, 1.0).paused(),
            &mut sheet,
        );

        tweens.tick(5.0, &mut sheet);
        assert_eq!(sheet.get(id, StyleProp::Opacity), 0.0);
        tweens.resume(t);
        tweens.tick(1.0, &mut sheet);
        assert_eq!(sheet.get(id, StyleProp::Opacity), 1.0);
    }

    #[test]
    fn fully_overwritten_tween_is_dropped() {
        let mut tweens = TweenState::new();
        let mut sheet = StyleSheet::new();
        let id = ElementId(1);

        tweens.add(id, Tween::new(0.3, Easing::CubicOut).to(StyleProp::X, 10.0), &mut sheet);
        tweens.add(id, Tween::new(0.5, Easing::ElasticOut).to(StyleProp::X, 0.0), &mut sheet);
        assert_eq!(tweens.len(), 1);
    }
}

// ui/intro.rs
//
// Page intro: loader letters rise, the loader exits, then the hero reveals.
//
//   letters (stagger 0.05s, 0.8s) ── 1000ms ──> LoaderExit ── 500ms ──> HeroReveal
//
// Hero: title line spans rise (stagger 0.1s, 1.2s); description, CTA and
// scroll hint fade up starting 0.8s before the title lines finish.

use crate::api::types::ElementId;
use crate::extensions::easing::Easing;
use crate::extensions::style::{StyleProp, StyleSheet};
use crate::extensions::tween::{Tween, TweenState};

pub const LETTER_STAGGER: f32 = 0.05;
pub const LETTER_DURATION: f32 = 0.8;
pub const LOADER_HOLD: f32 = 1.0;
pub const EXIT_DURATION: f32 = 0.5;
pub const LINE_STAGGER: f32 = 0.1;
pub const LINE_DURATION: f32 = 1.2;
pub const DETAIL_OVERLAP: f32 = 0.8;
pub const DETAIL_STAGGER: f32 = 0.1;
pub const DETAIL_DURATION: f32 = 0.8;
/// Initial drop of the hero description, CTA and scroll hint, px.
pub const DETAIL_FROM_Y: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEvent {
    /// Add the loader's exit state.
    LoaderExit,
    /// Hero tweens have been started.
    HeroReveal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroPhase {
    Pending,
    Letters,
    Hold,
    Exit,
    Done,
}

/// Elements the intro animates.
#[derive(Debug, Clone, Default)]
pub struct IntroTargets {
    pub letters: Vec<ElementId>,
    pub title_lines: Vec<ElementId>,
    /// Description, CTA and scroll hint, in that order.
    pub details: Vec<ElementId>,
}

fn stagger_span(count: usize, stagger: f32, duration: f32) -> f32 {
    duration + stagger * count.saturating_sub(1) as f32
}

#[derive(Debug)]
pub struct IntroSequence {
    targets: IntroTargets,
    phase: IntroPhase,
    remaining: f32,
}

impl IntroSequence {
    /// Renders the hidden start state of every target immediately.
    pub fn new(targets: IntroTargets, sheet: &mut StyleSheet) -> Self {
        for &id in targets.letters.iter().chain(&targets.title_lines) {
            sheet.set(id, StyleProp::YPercent, 100.0);
        }
        for &id in &targets.details {
            sheet.set(id, StyleProp::Y, DETAIL_FROM_Y);
            sheet.set(id, StyleProp::Opacity, 0.0);
        }
        Self {
            targets,
            phase: IntroPhase::Pending,
            remaining: 0.0,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    /// Start the letters.
    pub fn begin(&mut self, tweens: &mut TweenState, sheet: &mut StyleSheet) {
        if self.phase != IntroPhase::Pending {
            return;
        }
        let letters = Tween::new(LETTER_DURATION, Easing::QuartOut).to(StyleProp::YPercent, 0.0);
        tweens.add_staggered(&self.targets.letters, letters, LETTER_STAGGER, sheet);
        self.phase = IntroPhase::Letters;
        self.remaining = if self.targets.letters.is_empty() {
            0.0
        } else {
            stagger_span(self.targets.letters.len(), LETTER_STAGGER, LETTER_DURATION)
        };
        log::debug!("intro: {} letters", self.targets.letters.len());
    }

    /// Advance the timeline. Returns the events crossed during `dt`, in order.
    pub fn tick(&mut self, dt: f32, tweens: &mut TweenState, sheet: &mut StyleSheet) -> Vec<IntroEvent> {
        let mut events = Vec::new();
        if matches!(self.phase, IntroPhase::Pending | IntroPhase::Done) {
            return events;
        }

        self.remaining -= dt;
        while self.remaining <= 0.0 && self.phase != IntroPhase::Done {
            match self.phase {
                IntroPhase::Letters => {
                    self.phase = IntroPhase::Hold;
                    self.remaining += LOADER_HOLD;
                }
                IntroPhase::Hold => {
                    events.push(IntroEvent::LoaderExit);
                    self.phase = IntroPhase::Exit;
                    self.remaining += EXIT_DURATION;
                }
                IntroPhase::Exit => {
                    self.reveal_hero(tweens, sheet);
                    events.push(IntroEvent::HeroReveal);
                    self.phase = IntroPhase::Done;
                }
                IntroPhase::Pending | IntroPhase::Done => break,
            }
        }
        events
    }

    fn reveal_hero(&self, tweens: &mut TweenState, sheet: &mut StyleSheet) {
        let lines = Tween::new(LINE_DURATION, Easing::QuartOut).to(StyleProp::YPercent, 0.0);
        tweens.add_staggered(&self.targets.title_lines, lines, LINE_STAGGER, sheet);

        let lines_end = if self.targets.title_lines.is_empty() {
            0.0
        } else {
            stagger_span(self.targets.title_lines.len(), LINE_STAGGER, LINE_DURATION)
        };
        let details = Tween::new(DETAIL_DURATION, Easing::QuadOut)
            .to(StyleProp::Y, 0.0)
            .to(StyleProp::Opacity, 1.0)
            .with_delay((lines_end - DETAIL_OVERLAP).max(0.0));
        tweens.add_staggered(&self.targets.details, details, DETAIL_STAGGER, sheet);
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use crate::api::config::SiteConfig;
use crate::api::types::{ElementId, ElementIds};
use crate::extensions::style::StyleSheet;
use crate::extensions::tween::TweenState;
use crate::scroll::{SharedScroll, SmoothScroll};
use crate::theme::bus::ThemeBus;
use crate::theme::controller::ThemeController;
use crate::theme::store::PreferenceStore;

/// Page-wide state shared by every component, passed explicitly.
///
/// The theme controller is the only writer of the theme; components that
/// react to it subscribe to the bus. The smooth scroller is shared because
/// the frame loop, anchor links and the project sheet all drive it.
pub struct PageContext {
    pub config: SiteConfig,
    pub theme: ThemeController,
    pub tweens: TweenState,
    pub styles: StyleSheet,
    scroll: SharedScroll,
    ids: ElementIds,
}

impl PageContext {
    pub fn new(config: SiteConfig, store: Box<dyn PreferenceStore>) -> Self {
        let scroll = Rc::new(RefCell::new(SmoothScroll::new(config.smooth_scroll)));
        Self {
            theme: ThemeController::load(store),
            tweens: TweenState::new(),
            styles: StyleSheet::new(),
            scroll,
            ids: ElementIds::new(),
            config,
        }
    }

    pub fn bus(&self) -> ThemeBus {
        self.theme.bus()
    }

    pub fn scroll(&self) -> SharedScroll {
        Rc::clone(&self.scroll)
    }

    /// Generate the next unique element id.
    pub fn next_id(&mut self) -> ElementId {
        self.ids.next_id()
    }

    pub fn take_ids(&mut self, n: usize) -> Vec<ElementId> {
        self.ids.take(n)
    }

    pub fn ids_mut(&mut self) -> &mut ElementIds {
        &mut self.ids
    }

    /// Advance all tweens by `dt` seconds into the style sheet.
    pub fn animate(&mut self, dt: f32) -> usize {
        self.tweens.tick(dt, &mut self.styles)
    }
}

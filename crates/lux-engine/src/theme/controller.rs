use super::bus::{ThemeBus, ThemeChanged};
use super::kind::{Theme, ToggleIcon};
use super::store::PreferenceStore;

/// Storage key for the persisted theme.
pub const THEME_KEY: &str = "theme";

/// Single writer of the page theme.
///
/// Owns the preference store and the publishing side of the [`ThemeBus`].
pub struct ThemeController {
    store: Box<dyn PreferenceStore>,
    bus: ThemeBus,
}

impl ThemeController {
    /// Restore the saved theme, falling back to [`Theme::default`] when
    /// nothing (or an unrecognized value) is stored.
    pub fn load(store: Box<dyn PreferenceStore>) -> Self {
        let saved = store
            .get(THEME_KEY)
            .and_then(|value| match value.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(err) => {
                    log::warn!("ignoring stored theme: {err}");
                    None
                }
            })
            .unwrap_or_default();
        Self {
            store,
            bus: ThemeBus::new(saved),
        }
    }

    pub fn theme(&self) -> Theme {
        self.bus.current()
    }

    /// Read-side handle for components that react to theme changes.
    pub fn bus(&self) -> ThemeBus {
        self.bus.clone()
    }

    /// Activate `theme`: persist it, then notify subscribers.
    /// A storage failure is logged; the theme still applies for this page.
    pub fn set_theme(&mut self, theme: Theme) -> ThemeChanged {
        if let Err(err) = self.store.set(THEME_KEY, theme.as_str()) {
            log::warn!("could not persist theme: {err}");
        }
        let event = self.bus.publish(theme);
        log::debug!("theme {} -> {}", event.previous, event.current);
        event
    }

    /// Re-apply the current theme so hosts and subscribers sync to it at startup.
    pub fn apply_current(&mut self) -> ThemeChanged {
        self.set_theme(self.theme())
    }

    pub fn toggle_main(&mut self) -> ThemeChanged {
        self.set_theme(self.theme().after_main_toggle())
    }

    pub fn toggle_blue(&mut self) -> ThemeChanged {
        self.set_theme(self.theme().after_blue_toggle())
    }

    pub fn icon(&self) -> ToggleIcon {
        self.theme().toggle_icon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::{LuxError, Result};
    use crate::theme::store::MemoryStore;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Store that shares its contents with the test after being boxed.
    #[derive(Clone, Default)]
    struct SharedStore(Rc<RefCell<MemoryStore>>);

    impl PreferenceStore for SharedStore {
        fn get(&self, key: &str) -> Option<String> {
            self.0.borrow().get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<()> {
            self.0.borrow_mut().set(key, value)
        }
    }

    struct FailingStore;

    impl PreferenceStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(LuxError::Storage("quota exceeded".into()))
        }
    }

    #[test]
    fn defaults_to_blue() {
        let controller = ThemeController::load(Box::new(MemoryStore::new()));
        assert_eq!(controller.theme(), Theme::Blue);
    }

    #[test]
    fn restores_saved_theme() {
        let store = MemoryStore::new().with(THEME_KEY, "dark");
        let controller = ThemeController::load(Box::new(store));
        assert_eq!(controller.theme(), Theme::Dark);
    }

    #[test]
    fn unknown_saved_value_falls_back() {
        let store = MemoryStore::new().with(THEME_KEY, "neon");
        let controller = ThemeController::load(Box::new(store));
        assert_eq!(controller.theme(), Theme::Blue);
    }

    #[test]
    fn set_theme_persists_and_publishes() {
        let store = SharedStore::default();
        let mut controller = ThemeController::load(Box::new(store.clone()));
        let seen = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&seen);
        controller.bus().subscribe(move |e| *sink.borrow_mut() = Some(e.current));

        controller.set_theme(Theme::Light);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(*seen.borrow(), Some(Theme::Light));
        assert_eq!(controller.icon(), ToggleIcon::Moon);
    }

    #[test]
    fn toggles_follow_page_rules() {
        let mut controller = ThemeController::load(Box::new(MemoryStore::new()));
        assert_eq!(controller.toggle_main().current, Theme::Light);
        assert_eq!(controller.toggle_main().current, Theme::Dark);
        assert_eq!(controller.toggle_blue().current, Theme::Blue);
        assert_eq!(controller.toggle_blue().current, Theme::Light);
    }

    #[test]
    fn storage_failure_still_applies_theme() {
        let mut controller = ThemeController::load(Box::new(FailingStore));
        let event = controller.set_theme(Theme::Dark);
        assert_eq!(event.current, Theme::Dark);
        assert_eq!(controller.theme(), Theme::Dark);
    }
}

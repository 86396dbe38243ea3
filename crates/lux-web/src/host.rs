use lux_engine::theme::SubscriptionId;
use lux_engine::{LuxError, PreferenceStore, Result, StyleSource, Theme, ThemeBus};
use web_sys::{Element, Storage, Window};

/// [`PreferenceStore`] backed by `localStorage`.
///
/// Private browsing modes can deny storage; reads then return nothing and
/// writes report a storage error.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    pub fn open(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            log::warn!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage = self
            .storage
            .as_ref()
            .ok_or_else(|| LuxError::Storage("localStorage unavailable".into()))?;
        storage
            .set_item(key, value)
            .map_err(|err| LuxError::Storage(format!("{err:?}")))
    }
}

/// [`StyleSource`] reading computed custom properties of one element.
pub struct ComputedStyle {
    window: Window,
    element: Element,
}

impl ComputedStyle {
    pub fn new(window: Window, element: Element) -> Self {
        Self { window, element }
    }
}

impl StyleSource for ComputedStyle {
    fn property(&self, name: &str) -> String {
        self.window
            .get_computed_style(&self.element)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value(name).ok())
            .unwrap_or_default()
    }
}

/// Reflect the theme onto the page: the root `data-theme` attribute and the
/// toggle button icon.
///
/// Subscribe this before anything that reads computed styles on theme
/// change, so they see the new attribute.
pub fn bind_theme_attribute(bus: &ThemeBus, root: Element, icon: Option<Element>) -> SubscriptionId {
    bus.subscribe(move |event| {
        apply_theme(&root, icon.as_ref(), event.current);
    })
}

fn apply_theme(root: &Element, icon: Option<&Element>, theme: Theme) {
    if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
        log::warn!("theme: failed to set data-theme: {err:?}");
    }
    if let Some(icon) = icon {
        icon.set_inner_html(theme.toggle_icon().svg());
    }
}

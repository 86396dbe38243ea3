use serde::Deserialize;

use crate::scroll::SharedScroll;

/// Project details carried on a project row's `data-*` attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProjectData {
    pub title: String,
    pub desc: String,
    pub image: String,
    /// Comma separated.
    pub tags: String,
    pub link: String,
}

impl ProjectData {
    /// Build from a dataset lookup; missing attributes become empty strings.
    pub fn from_dataset<F>(mut get: F) -> Self
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut field = |key: &str| get(key).unwrap_or_default();
        Self {
            title: field("title"),
            desc: field("desc"),
            image: field("image"),
            tags: field("tags"),
            link: field("link"),
        }
    }

    pub fn tag_list(&self) -> Vec<String> {
        if self.tags.is_empty() {
            return Vec::new();
        }
        self.tags.split(',').map(|t| t.trim().to_string()).collect()
    }
}

/// What the host renders into the sheet when it opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetView {
    pub title: String,
    pub body: String,
    /// Image source; `None` hides the image container.
    pub image: Option<String>,
    pub tags: Vec<String>,
}

impl From<&ProjectData> for SheetView {
    fn from(data: &ProjectData) -> Self {
        Self {
            title: data.title.clone(),
            body: data.desc.clone(),
            image: (!data.image.is_empty()).then(|| data.image.clone()),
            tags: data.tag_list(),
        }
    }
}

/// Modal project sheet. Opening locks page scrolling and freezes the smooth
/// scroller; closing releases both.
#[derive(Debug)]
pub struct ProjectSheet {
    scroll: SharedScroll,
    visible: bool,
}

impl ProjectSheet {
    pub fn new(scroll: SharedScroll) -> Self {
        Self { scroll, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn open(&mut self, data: &ProjectData) -> SheetView {
        self.visible = true;
        self.scroll.borrow_mut().stop();
        log::debug!("sheet: open {:?}", data.title);
        SheetView::from(data)
    }

    /// Returns `false` if the sheet was already closed.
    pub fn close(&mut self) -> bool {
        if !self.visible {
            return false;
        }
        self.visible = false;
        self.scroll.borrow_mut().start();
        log::debug!("sheet: close");
        true
    }

    /// Keyboard handler. Escape closes a visible sheet; returns whether it did.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// Wheel and touch events inside the sheet scroll it natively and must
    /// not reach the smooth scroller.
    pub fn captures_scroll(&self) -> bool {
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::api::config::SmoothScrollConfig;
    use crate::scroll::SmoothScroll;

    fn sheet() -> (ProjectSheet, SharedScroll) {
        let scroll = Rc::new(RefCell::new(SmoothScroll::new(SmoothScrollConfig::default())));
        (ProjectSheet::new(Rc::clone(&scroll)), scroll)
    }

    #[test]
    fn tags_are_split_and_trimmed() {
        let data = ProjectData {
            tags: "Rust, WASM ,Canvas".into(),
            ..Default::default()
        };
        assert_eq!(data.tag_list(), vec!["Rust", "WASM", "Canvas"]);
        assert!(ProjectData::default().tag_list().is_empty());
    }

    #[test]
    fn image_hidden_when_empty() {
        let mut data = ProjectData::from_dataset(|k| (k == "title").then(|| "Lux".to_string()));
        assert_eq!(data.title, "Lux");
        assert_eq!(SheetView::from(&data).image, None);
        data.image = "/img/lux.png".into();
        assert_eq!(SheetView::from(&data).image.as_deref(), Some("/img/lux.png"));
    }

    #[test]
    fn open_stops_scroller_and_close_restarts() {
        let (mut sheet, scroll) = sheet();
        let view = sheet.open(&ProjectData {
            title: "Orbit".into(),
            desc: "Phase lighting".into(),
            ..Default::default()
        });
        assert_eq!(view.body, "Phase lighting");
        assert!(sheet.is_visible());
        assert!(sheet.captures_scroll());
        assert!(scroll.borrow().is_stopped());

        assert!(sheet.close());
        assert!(!scroll.borrow().is_stopped());
        assert!(!sheet.close());
    }

    #[test]
    fn escape_only_when_visible() {
        let (mut sheet, scroll) = sheet();
        assert!(!sheet.on_key("Escape"));
        scroll.borrow_mut().stop();
        // A closed sheet must not restart a scroller someone else stopped.
        assert!(scroll.borrow().is_stopped());

        sheet.open(&ProjectData::default());
        assert!(!sheet.on_key("Enter"));
        assert!(sheet.on_key("Escape"));
        assert!(!sheet.is_visible());
    }
}

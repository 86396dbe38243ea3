use lux_engine::ui::{ProjectData, SheetView};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::dom::{query, set_class};

const VISIBLE: &str = "is-visible";
const NO_SCROLL: &str = "no-scroll";

/// The project sheet's DOM nodes.
pub struct SheetDom {
    pub overlay: HtmlElement,
    pub sheet: HtmlElement,
    pub close: Option<HtmlElement>,
    title: Option<HtmlElement>,
    body: Option<HtmlElement>,
    image_container: Option<HtmlElement>,
    image: Option<HtmlImageElement>,
    meta: Option<HtmlElement>,
    page: Option<HtmlElement>,
    document: Document,
}

impl SheetDom {
    /// Returns `Ok(None)` when the page has no sheet markup.
    pub fn find(document: &Document) -> Result<Option<Self>, JsValue> {
        let (Some(overlay), Some(sheet)) = (
            query(document, ".project-sheet-overlay")?,
            query(document, ".project-sheet")?,
        ) else {
            log::debug!("sheet: markup missing, skipping");
            return Ok(None);
        };
        let image = query(document, ".sheet-image")?.and_then(|el| el.dyn_into::<HtmlImageElement>().ok());
        Ok(Some(Self {
            overlay,
            sheet,
            close: query(document, ".sheet-close")?,
            title: query(document, ".sheet-title")?,
            body: query(document, ".sheet-body")?,
            image_container: query(document, ".sheet-image-container")?,
            image,
            meta: query(document, ".sheet-meta")?,
            page: document.body(),
            document: document.clone(),
        }))
    }

    pub fn render(&self, view: &SheetView) -> Result<(), JsValue> {
        if let Some(title) = &self.title {
            title.set_text_content(Some(&view.title));
        }
        if let Some(body) = &self.body {
            body.set_text_content(Some(&view.body));
        }
        if let Some(container) = &self.image_container {
            match (&view.image, &self.image) {
                (Some(src), Some(image)) => {
                    image.set_src(src);
                    image.set_alt(&view.title);
                    container.style().set_property("display", "block")?;
                }
                _ => container.style().set_property("display", "none")?,
            }
        }
        if let Some(meta) = &self.meta {
            meta.set_inner_html("");
            for tag in &view.tags {
                let span = self.document.create_element("span")?;
                span.class_list().add_1("project-tag")?;
                span.set_text_content(Some(tag));
                meta.append_child(&span)?;
            }
        }
        Ok(())
    }

    pub fn set_visible(&self, visible: bool) -> Result<(), JsValue> {
        set_class(&self.overlay, VISIBLE, visible)?;
        set_class(&self.sheet, VISIBLE, visible)?;
        if let Some(page) = &self.page {
            set_class(page, NO_SCROLL, visible)?;
        }
        Ok(())
    }
}

/// Project data from the `.project-item` enclosing a trigger.
pub fn project_data(trigger: &Element) -> Result<Option<ProjectData>, JsValue> {
    let Some(item) = trigger.closest(".project-item")? else {
        return Ok(None);
    };
    Ok(Some(ProjectData::from_dataset(|key| item.get_attribute(&format!("data-{key}")))))
}

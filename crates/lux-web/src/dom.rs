use std::collections::HashMap;

use lux_engine::{ElementId, ElementStyle, LuxError, Rect, StyleSheet};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

pub fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub fn document() -> Result<Document, JsValue> {
    window()?.document().ok_or_else(|| JsValue::from_str("no document"))
}

/// Engine errors cross the wasm-bindgen boundary as strings.
pub fn js_error(err: LuxError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

pub fn query(document: &Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    document
        .query_selector(selector)?
        .map(|el| el.dyn_into::<HtmlElement>().map_err(JsValue::from))
        .transpose()
}

/// All matches that are HTML elements, in document order.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

pub fn rect(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Maximum window scroll offset.
pub fn scroll_limit(window: &Window, document: &Document) -> f64 {
    let content = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    (content - viewport_height(window)).max(0.0)
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), JsValue> {
    let list = element.class_list();
    if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    }
}

/// Event listener that detaches itself when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listener that may call `prevent_default` on wheel and touch events.
    pub fn active<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Maps engine element ids to the DOM elements they animate.
#[derive(Default)]
pub struct Elements {
    map: HashMap<ElementId, HtmlElement>,
}

impl Elements {
    pub fn insert(&mut self, id: ElementId, element: HtmlElement) {
        self.map.insert(id, element);
    }

    pub fn get(&self, id: ElementId) -> Option<&HtmlElement> {
        self.map.get(&id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Copy every changed style onto its element.
    pub fn flush(&self, sheet: &mut StyleSheet) -> Result<(), JsValue> {
        for (id, style) in sheet.drain_dirty() {
            if let Some(element) = self.map.get(&id) {
                apply_style(element, &style)?;
            }
        }
        Ok(())
    }
}

pub fn apply_style(element: &HtmlElement, style: &ElementStyle) -> Result<(), JsValue> {
    let css = element.style();
    css.set_property("transform", &style.transform_css())?;
    css.set_property("opacity", &style.opacity.to_string())
}
